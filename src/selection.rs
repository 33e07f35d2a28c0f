//! Cascading selection over the file tree.
//!
//! Selecting a directory selects its whole subtree; afterwards every ancestor
//! is recomputed as the AND of its direct children, so a directory reads as
//! selected exactly when all of its children are.

use crate::fs::tree::{FileTree, NodeId};
use crate::output::SelectedFile;

/// Toggle (or force, when `explicit` is given) the selection of `id`.
///
/// The final value is pushed down to every descendant, then each ancestor is
/// recomputed from its direct children up to the top level.
pub fn toggle_selection(tree: &mut FileTree, id: NodeId, explicit: Option<bool>) {
    let value = explicit.unwrap_or(!tree.node(id).selected);

    let mut stack = vec![id];
    while let Some(cur) = stack.pop() {
        let node = tree.node_mut(cur);
        node.selected = value;
        stack.extend(node.children.iter().copied());
    }

    let mut ancestor = tree.node(id).parent;
    while let Some(parent) = ancestor {
        let all = tree
            .node(parent)
            .children
            .iter()
            .all(|c| tree.node(*c).selected);
        let node = tree.node_mut(parent);
        node.selected = all;
        ancestor = node.parent;
    }
}

/// Force every node in `ids` (and its subtree) to `value`.
pub fn toggle_all(tree: &mut FileTree, ids: &[NodeId], value: bool) {
    for id in ids {
        toggle_selection(tree, *id, Some(value));
    }
}

/// True iff every node in `ids` and every descendant is selected.
pub fn all_selected(tree: &FileTree, ids: &[NodeId]) -> bool {
    ids.iter().all(|id| {
        let node = tree.node(*id);
        node.selected && all_selected(tree, &node.children)
    })
}

/// Value a toggle-all request over `ids` should apply.
pub fn next_toggle_all_value(tree: &FileTree, ids: &[NodeId]) -> bool {
    !all_selected(tree, ids)
}

/// Selected leaf files, sorted by relative path.
pub fn collect_selected_files(tree: &FileTree) -> Vec<SelectedFile> {
    let mut files: Vec<SelectedFile> = tree
        .preorder()
        .into_iter()
        .map(|id| tree.node(id))
        .filter(|n| !n.is_dir && n.selected)
        .map(|n| SelectedFile {
            absolute_path: n.path.clone(),
            relative_path: n.relative_path.clone(),
            extension: n.extension(),
        })
        .collect();
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    files
}

/// Number of selected leaf files.
pub fn selected_file_count(tree: &FileTree) -> usize {
    tree.nodes
        .iter()
        .filter(|n| !n.is_dir && n.selected)
        .count()
}
