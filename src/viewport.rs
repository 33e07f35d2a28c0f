use crate::filter::{ShadowNode, TreeView};
use crate::fs::tree::{FileTree, NodeId};

/// Rows kept for the title, status line, search line, separator and footer.
pub const RESERVED_ROWS: usize = 6;

/// Terminal height used when the size query fails.
pub const FALLBACK_TERMINAL_ROWS: u16 = 24;

/// A flattened, currently visible row. Owned snapshot of the node it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub name: String,
    pub depth: usize,
    pub is_dir: bool,
    /// Expanded in the view being flattened (forced for filtered directories).
    pub expanded: bool,
    pub selected: bool,
    /// Matched the active query directly. Always true for the live view.
    pub matched: bool,
}

impl Row {
    fn new(tree: &FileTree, id: NodeId, expanded: bool, matched: bool) -> Self {
        let node = tree.node(id);
        Self {
            id,
            parent: node.parent,
            name: node.name.clone(),
            depth: node.depth,
            is_dir: node.is_dir,
            expanded,
            selected: node.selected,
            matched,
        }
    }
}

/// Pre-order walk of `view`; a directory's children are emitted only when
/// that directory is expanded in the view.
pub fn flatten(tree: &FileTree, view: &TreeView) -> Vec<Row> {
    let mut rows = Vec::new();
    match view {
        TreeView::Live => {
            for id in &tree.roots {
                flatten_live(tree, *id, &mut rows);
            }
        }
        TreeView::Filtered(roots) => {
            for shadow in roots {
                flatten_shadow(tree, shadow, &mut rows);
            }
        }
    }
    rows
}

fn flatten_live(tree: &FileTree, id: NodeId, rows: &mut Vec<Row>) {
    let node = tree.node(id);
    let expanded = node.is_dir && node.expanded;
    rows.push(Row::new(tree, id, expanded, true));
    if expanded {
        for child in &node.children {
            flatten_live(tree, *child, rows);
        }
    }
}

fn flatten_shadow(tree: &FileTree, shadow: &ShadowNode, rows: &mut Vec<Row>) {
    let expanded = tree.node(shadow.id).is_dir && shadow.expanded;
    rows.push(Row::new(tree, shadow.id, expanded, shadow.matched));
    if expanded {
        for child in &shadow.children {
            flatten_shadow(tree, child, rows);
        }
    }
}

/// Index of the next directory row after `from`, wrapping around.
pub fn next_folder(rows: &[Row], from: usize) -> Option<usize> {
    let len = rows.len();
    (1..=len)
        .map(|step| (from + step) % len)
        .find(|i| rows[*i].is_dir)
}

/// Index of the previous directory row before `from`, wrapping around.
pub fn prev_folder(rows: &[Row], from: usize) -> Option<usize> {
    let len = rows.len();
    (1..=len)
        .map(|step| (from + len - step % len) % len)
        .find(|i| rows[*i].is_dir)
}

/// Rows available for the tree, given the terminal height.
pub fn visible_height(terminal_rows: u16, help_lines: usize) -> usize {
    (terminal_rows as usize)
        .saturating_sub(RESERVED_ROWS)
        .saturating_sub(help_lines)
        .max(1)
}

/// Current terminal height, or [`FALLBACK_TERMINAL_ROWS`].
pub fn terminal_rows() -> u16 {
    match crossterm::terminal::size() {
        Ok((_, rows)) if rows > 0 => rows,
        _ => FALLBACK_TERMINAL_ROWS,
    }
}

/// Cursor and scroll position over the flattened rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub cursor: usize,
    pub scroll_offset: usize,
}

impl Viewport {
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, row_count: usize) {
        if self.cursor + 1 < row_count {
            self.cursor += 1;
        }
    }

    /// Keep the cursor inside `[0, row_count - 1]`.
    pub fn clamp_cursor(&mut self, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
        } else if self.cursor >= row_count {
            self.cursor = row_count - 1;
        }
    }

    /// Scroll so the cursor lies in `[scroll_offset, scroll_offset + visible_height)`.
    pub fn ensure_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor + 1 - visible_height;
        }
    }

    /// Slice of `rows` that fits in the viewport.
    pub fn window<'a>(&self, rows: &'a [Row], visible_height: usize) -> &'a [Row] {
        let start = self.scroll_offset.min(rows.len());
        let end = (start + visible_height).min(rows.len());
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::tree::tests::{id, sample_tree, tree_from};

    fn names(tree: &FileTree, rows: &[Row]) -> Vec<String> {
        rows.iter()
            .map(|r| tree.node(r.id).relative_display())
            .collect()
    }

    fn dir_rows(pattern: &[bool]) -> Vec<Row> {
        pattern
            .iter()
            .enumerate()
            .map(|(i, is_dir)| Row {
                id: NodeId(i),
                parent: None,
                name: format!("n{i}"),
                depth: 0,
                is_dir: *is_dir,
                expanded: false,
                selected: false,
                matched: true,
            })
            .collect()
    }

    #[test]
    fn flatten_collapsed_shows_top_level_only() {
        let tree = sample_tree();
        let rows = flatten(&tree, &TreeView::Live);
        assert_eq!(names(&tree, &rows), vec!["a.ts", "src"]);
    }

    #[test]
    fn flatten_expanded_directory_shows_children() {
        let mut tree = sample_tree();
        tree.node_mut(id(&tree, "src")).expanded = true;
        let rows = flatten(&tree, &TreeView::Live);
        assert_eq!(names(&tree, &rows), vec!["a.ts", "src", "src/lib", "src/main.ts"]);
    }

    #[test]
    fn flatten_hides_children_of_collapsed_nested_directory() {
        let mut tree = sample_tree();
        tree.node_mut(id(&tree, "src/lib")).expanded = true;
        let rows = flatten(&tree, &TreeView::Live);
        // lib is expanded but its parent is not, so nothing below src shows.
        assert_eq!(names(&tree, &rows), vec!["a.ts", "src"]);
    }

    #[test]
    fn flatten_includes_exactly_children_of_expanded_dirs() {
        let mut tree = tree_from(&[
            ("a", true),
            ("a/b", true),
            ("a/b/f1", false),
            ("a/c", true),
            ("a/c/f2", false),
            ("a/f3", false),
        ]);
        tree.node_mut(id(&tree, "a")).expanded = true;
        tree.node_mut(id(&tree, "a/c")).expanded = true;
        let rows = flatten(&tree, &TreeView::Live);
        let shown: Vec<NodeId> = rows.iter().map(|r| r.id).collect();
        for row in &rows {
            if row.is_dir {
                for child in &tree.node(row.id).children {
                    assert_eq!(shown.contains(child), row.expanded);
                }
            }
        }
        assert_eq!(names(&tree, &rows), vec!["a", "a/b", "a/c", "a/c/f2", "a/f3"]);
    }

    #[test]
    fn rows_snapshot_depth_and_selection() {
        let mut tree = sample_tree();
        tree.set_all_expanded(true);
        tree.node_mut(id(&tree, "src/lib/x.ts")).selected = true;
        let rows = flatten(&tree, &TreeView::Live);
        let x = rows.iter().find(|r| r.name == "x.ts").unwrap();
        assert_eq!(x.depth, 2);
        assert!(x.selected);
        assert_eq!(x.parent, Some(id(&tree, "src/lib")));
    }

    #[test]
    fn folder_jump_wraps_forward_and_back() {
        let rows = dir_rows(&[false, true, false, true, false]);
        assert_eq!(next_folder(&rows, 0), Some(1));
        assert_eq!(next_folder(&rows, 1), Some(3));
        assert_eq!(next_folder(&rows, 3), Some(1));
        assert_eq!(prev_folder(&rows, 4), Some(3));
        assert_eq!(prev_folder(&rows, 3), Some(1));
        assert_eq!(prev_folder(&rows, 1), Some(3));
        assert_eq!(prev_folder(&rows, 0), Some(3));
    }

    #[test]
    fn folder_jump_with_single_directory_always_lands_on_it() {
        let rows = dir_rows(&[false, false, true, false]);
        for from in 0..rows.len() {
            assert_eq!(next_folder(&rows, from), Some(2));
            assert_eq!(prev_folder(&rows, from), Some(2));
        }
    }

    #[test]
    fn folder_jump_without_directories_is_none() {
        let rows = dir_rows(&[false, false]);
        assert_eq!(next_folder(&rows, 0), None);
        assert_eq!(prev_folder(&rows, 1), None);
        assert_eq!(next_folder(&[], 0), None);
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let mut vp = Viewport::default();
        vp.move_up();
        assert_eq!(vp.cursor, 0);
        vp.move_down(2);
        vp.move_down(2);
        assert_eq!(vp.cursor, 1);
        vp.move_down(0);
        assert_eq!(vp.cursor, 1);
    }

    #[test]
    fn clamp_cursor_after_rows_shrink() {
        let mut vp = Viewport {
            cursor: 9,
            scroll_offset: 5,
        };
        vp.clamp_cursor(4);
        assert_eq!(vp.cursor, 3);
        vp.clamp_cursor(0);
        assert_eq!(vp.cursor, 0);
    }

    #[test]
    fn ensure_visible_scrolls_both_ways() {
        let mut vp = Viewport {
            cursor: 12,
            scroll_offset: 0,
        };
        vp.ensure_visible(5);
        assert_eq!(vp.scroll_offset, 8);
        assert!(vp.cursor >= vp.scroll_offset && vp.cursor < vp.scroll_offset + 5);

        vp.cursor = 3;
        vp.ensure_visible(5);
        assert_eq!(vp.scroll_offset, 3);
    }

    #[test]
    fn window_slices_visible_rows() {
        let rows = dir_rows(&[false; 10]);
        let vp = Viewport {
            cursor: 7,
            scroll_offset: 6,
        };
        let window = vp.window(&rows, 3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].id, NodeId(6));
        assert_eq!(vp.window(&rows, 20).len(), 4);
    }

    #[test]
    fn visible_height_reserves_chrome() {
        assert_eq!(visible_height(24, 0), 18);
        assert_eq!(visible_height(24, 10), 8);
        assert_eq!(visible_height(3, 0), 1);
    }
}
