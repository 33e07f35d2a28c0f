use std::collections::HashSet;

use crate::fs::tree::{FileTree, NodeId};

/// A node of the filtered shadow tree. Refers back to the live node by id.
/// Retained directories start expanded; collapsing one here never touches
/// the live node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowNode {
    pub id: NodeId,
    /// Whether the node matched the query itself, rather than only being kept
    /// as the ancestor of a match.
    pub matched: bool,
    pub expanded: bool,
    pub children: Vec<ShadowNode>,
}

/// What the viewport flattens: the live tree, or a query-pruned shadow copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeView {
    Live,
    Filtered(Vec<ShadowNode>),
}

impl TreeView {
    /// Collapse the shadow directories listed in `collapsed`. No-op on the
    /// live view.
    pub fn collapse(&mut self, collapsed: &HashSet<NodeId>) {
        if collapsed.is_empty() {
            return;
        }
        if let TreeView::Filtered(roots) = self {
            let mut stack: Vec<&mut ShadowNode> = roots.iter_mut().collect();
            while let Some(node) = stack.pop() {
                if collapsed.contains(&node.id) {
                    node.expanded = false;
                }
                stack.extend(node.children.iter_mut());
            }
        }
    }
}

/// Derive the view for `query`.
///
/// Case-insensitive substring match on name or relative path. An empty query
/// returns [`TreeView::Live`] so real expand state is preserved.
pub fn filter_tree(tree: &FileTree, query: &str) -> TreeView {
    if query.is_empty() {
        return TreeView::Live;
    }
    let query = query.to_lowercase();
    let roots = tree
        .roots
        .iter()
        .filter_map(|id| filter_node(tree, *id, &query))
        .collect();
    TreeView::Filtered(roots)
}

fn filter_node(tree: &FileTree, id: NodeId, query: &str) -> Option<ShadowNode> {
    let node = tree.node(id);
    let matched = node.name.to_lowercase().contains(query)
        || node.relative_display().to_lowercase().contains(query);

    if !node.is_dir {
        return matched.then(|| ShadowNode {
            id,
            matched,
            expanded: false,
            children: Vec::new(),
        });
    }

    let children: Vec<ShadowNode> = node
        .children
        .iter()
        .filter_map(|c| filter_node(tree, *c, query))
        .collect();

    (matched || !children.is_empty()).then(|| ShadowNode {
        id,
        matched,
        expanded: true,
        children,
    })
}
