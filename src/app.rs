use std::collections::HashSet;
use std::path::PathBuf;

use crate::components::help;
use crate::filter::filter_tree;
use crate::fs::tree::{build_tree, BuildOptions, FileTree, NodeId};
use crate::output::{OutputMode, Selection};
use crate::selection;
use crate::session::SessionOptions;
use crate::ui::FrameState;
use crate::viewport::{self, Row, Viewport, FALLBACK_TERMINAL_ROWS};

/// Input mode of the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Browsing,
    SearchEntry,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed(Selection),
    Cancelled,
}

/// Main application state.
pub struct App {
    pub root: PathBuf,
    pub cwd: PathBuf,
    pub root_name: String,
    pub tree: FileTree,
    /// Flattened rows of the current view. Rebuilt by [`App::refresh`].
    pub rows: Vec<Row>,
    pub viewport: Viewport,
    pub mode: InputMode,
    pub query: String,
    pub output_mode: OutputMode,
    pub show_help: bool,
    pub show_ignored: bool,
    pub terminal_rows: u16,
    pub outcome: Option<Outcome>,
    /// Directories collapsed in the filtered view. Reset whenever the query
    /// changes; never written to the live tree.
    filter_collapsed: HashSet<NodeId>,
    build_options: BuildOptions,
}

impl App {
    /// Create the state for an already built tree.
    pub fn new(root: PathBuf, cwd: PathBuf, tree: FileTree, options: &SessionOptions) -> Self {
        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        let mut app = Self {
            root,
            cwd,
            root_name,
            tree,
            rows: Vec::new(),
            viewport: Viewport::default(),
            mode: InputMode::Browsing,
            query: String::new(),
            output_mode: options.output_mode,
            show_help: false,
            show_ignored: options.show_ignored,
            terminal_rows: FALLBACK_TERMINAL_ROWS,
            outcome: None,
            filter_collapsed: HashSet::new(),
            build_options: options.build.clone(),
        };
        app.refresh();
        app
    }

    /// Rows the tree may occupy on screen.
    pub fn visible_height(&self) -> usize {
        let help_lines = if self.show_help {
            help::help_line_count()
        } else {
            0
        };
        viewport::visible_height(self.terminal_rows, help_lines)
    }

    /// Re-derive the rows from the tree and query, then fix up the viewport.
    pub fn refresh(&mut self) {
        let mut view = filter_tree(&self.tree, &self.query);
        view.collapse(&self.filter_collapsed);
        self.rows = viewport::flatten(&self.tree, &view);
        self.viewport.clamp_cursor(self.rows.len());
        self.viewport.ensure_visible(self.visible_height());
    }

    pub fn set_terminal_rows(&mut self, rows: u16) {
        self.terminal_rows = rows;
        self.refresh();
    }

    /// Snapshot of everything the next frame shows.
    pub fn frame_state(&self) -> FrameState<'_> {
        let window = self.viewport.window(&self.rows, self.visible_height());
        let cursor = self
            .viewport
            .cursor
            .checked_sub(self.viewport.scroll_offset)
            .filter(|c| *c < window.len());
        FrameState {
            root_name: &self.root_name,
            rows: window,
            cursor,
            output_mode: self.output_mode,
            show_help: self.show_help,
            show_ignored: self.show_ignored,
            mode: self.mode,
            query: &self.query,
            selected_files: selection::selected_file_count(&self.tree),
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    fn cursor_row(&self) -> Option<&Row> {
        self.rows.get(self.viewport.cursor)
    }

    // ── Navigation ──────────────────────────────────────────────────────────

    pub fn move_up(&mut self) {
        self.viewport.move_up();
        self.refresh();
    }

    pub fn move_down(&mut self) {
        self.viewport.move_down(self.rows.len());
        self.refresh();
    }

    /// Collapse an expanded directory, otherwise jump to the parent row.
    /// While filtering, only the filtered view collapses.
    pub fn left(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        let (id, parent) = (row.id, row.parent);
        if row.is_dir && row.expanded {
            if self.query.is_empty() {
                self.tree.node_mut(id).expanded = false;
            } else {
                self.filter_collapsed.insert(id);
            }
        } else if let Some(parent) = parent {
            if let Some(idx) = self.rows.iter().position(|r| r.id == parent) {
                self.viewport.cursor = idx;
            }
        }
        self.refresh();
    }

    /// Expand a collapsed directory. The cursor stays put.
    pub fn right(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        if row.is_dir && !row.expanded {
            let id = row.id;
            if self.query.is_empty() {
                self.tree.node_mut(id).expanded = true;
            } else {
                self.filter_collapsed.remove(&id);
            }
            self.refresh();
        }
    }

    pub fn expand_all(&mut self) {
        self.tree.set_all_expanded(true);
        self.filter_collapsed.clear();
        self.refresh();
    }

    pub fn collapse_all(&mut self) {
        self.tree.set_all_expanded(false);
        if !self.query.is_empty() {
            self.filter_collapsed
                .extend(self.rows.iter().filter(|r| r.is_dir).map(|r| r.id));
        }
        self.viewport.reset();
        self.refresh();
    }

    pub fn jump_next_folder(&mut self) {
        if let Some(idx) = viewport::next_folder(&self.rows, self.viewport.cursor) {
            self.viewport.cursor = idx;
            self.refresh();
        }
    }

    pub fn jump_prev_folder(&mut self) {
        if let Some(idx) = viewport::prev_folder(&self.rows, self.viewport.cursor) {
            self.viewport.cursor = idx;
            self.refresh();
        }
    }

    // ── Selection ───────────────────────────────────────────────────────────

    pub fn toggle_at_cursor(&mut self) {
        if let Some(id) = self.cursor_row().map(|r| r.id) {
            selection::toggle_selection(&mut self.tree, id, None);
            self.refresh();
        }
    }

    /// Toggle everything, or only the matched rows while a query is active.
    /// Rows kept only as ancestors of a match are not targeted.
    pub fn toggle_all(&mut self) {
        let ids: Vec<_> = if self.query.is_empty() {
            self.tree.roots.clone()
        } else {
            let view = filter_tree(&self.tree, &self.query);
            viewport::flatten(&self.tree, &view)
                .into_iter()
                .filter(|r| r.matched)
                .map(|r| r.id)
                .collect()
        };
        if ids.is_empty() {
            return;
        }
        let value = selection::next_toggle_all_value(&self.tree, &ids);
        selection::toggle_all(&mut self.tree, &ids, value);
        tracing::debug!(count = ids.len(), value, "toggle all");
        self.refresh();
    }

    // ── Modes and flags ─────────────────────────────────────────────────────

    pub fn cycle_output(&mut self) {
        self.output_mode = self.output_mode.next();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.refresh();
    }

    /// Flip the ignored-files flag and rebuild the tree from disk.
    /// Selection and expand state start over.
    pub async fn toggle_ignored(&mut self) {
        self.show_ignored = !self.show_ignored;
        self.tree = build_tree(
            &self.root,
            &self.cwd,
            self.show_ignored,
            &self.build_options,
        )
        .await;
        self.filter_collapsed.clear();
        self.viewport.reset();
        self.refresh();
    }

    // ── Search ──────────────────────────────────────────────────────────────

    pub fn start_search(&mut self) {
        self.mode = InputMode::SearchEntry;
    }

    /// Leave search entry, keeping the query.
    pub fn end_search(&mut self) {
        self.mode = InputMode::Browsing;
    }

    pub fn clear_query(&mut self) {
        if self.query.is_empty() {
            return;
        }
        self.query.clear();
        self.filter_collapsed.clear();
        self.viewport.reset();
        self.refresh();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.filter_collapsed.clear();
        self.viewport.reset();
        self.refresh();
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.filter_collapsed.clear();
        self.viewport.reset();
        self.refresh();
    }

    // ── Exit ────────────────────────────────────────────────────────────────

    pub fn confirm(&mut self) {
        let files = selection::collect_selected_files(&self.tree);
        tracing::info!(files = files.len(), output = self.output_mode.label(), "confirmed");
        self.outcome = Some(Outcome::Confirmed(Selection {
            files,
            output_mode: self.output_mode,
        }));
    }

    pub fn quit(&mut self) {
        self.outcome = Some(Outcome::Cancelled);
    }
}
