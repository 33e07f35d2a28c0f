use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::git::{self, GitVisibility};
use crate::fs::walker::{self, Entry, WalkOptions};

/// Index of a node in [`FileTree::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A file or directory in the selection tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub path: PathBuf,
    /// Path relative to the scan root.
    pub relative_path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    /// Depth below the scan root (top-level entries are 0).
    pub depth: usize,
    pub selected: bool,
    /// Meaningful for directories only.
    pub expanded: bool,
    /// Ordered by absolute path, fixed at build time.
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    fn new(path: &Path, root: &Path, is_dir: bool, depth: usize, parent: Option<NodeId>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        Self {
            path: path.to_path_buf(),
            relative_path,
            name,
            is_dir,
            depth,
            selected: false,
            expanded: false,
            children: Vec::new(),
            parent,
        }
    }

    /// Relative path with `/` separators, used for display and matching.
    pub fn relative_display(&self) -> String {
        self.relative_path.to_string_lossy().replace('\\', "/")
    }

    /// File extension without the dot, empty for none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Arena-backed selection tree. Parent links are ids, so there is no
/// ownership cycle between parents and children.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    pub nodes: Vec<Node>,
    /// Top-level nodes, ordered by absolute path.
    pub roots: Vec<NodeId>,
}

impl FileTree {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Every node id in pre-order (parents before children, siblings in order).
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    /// Set `expanded` on every directory in the tree.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for node in self.nodes.iter_mut().filter(|n| n.is_dir) {
            node.expanded = expanded;
        }
    }

    /// Assemble a tree from enumerated entries.
    ///
    /// Entries are sorted by absolute path so every directory is seen before
    /// its contents. Entries whose parent directory is absent are dropped.
    pub fn assemble(root: &Path, mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let mut tree = FileTree {
            nodes: Vec::with_capacity(entries.len()),
            roots: Vec::new(),
        };
        let mut dirs: HashMap<PathBuf, NodeId> = HashMap::new();

        for entry in entries {
            let parent_path = match entry.path.parent() {
                Some(p) => p,
                None => continue,
            };
            let parent = if parent_path == root {
                None
            } else {
                match dirs.get(parent_path) {
                    Some(id) => Some(*id),
                    None => continue,
                }
            };
            let depth = parent.map(|p| tree.node(p).depth + 1).unwrap_or(0);
            let id = NodeId(tree.nodes.len());
            tree.nodes
                .push(Node::new(&entry.path, root, entry.is_dir, depth, parent));

            match parent {
                Some(p) => tree.node_mut(p).children.push(id),
                None => tree.roots.push(id),
            }
            if entry.is_dir {
                dirs.insert(entry.path, id);
            }
        }

        tree
    }
}

/// Inputs for building a tree.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub walk: WalkOptions,
}

/// Build the selection tree for `root`.
///
/// When `show_ignored` is false, the listing is pruned to git-visible paths
/// of `cwd`; if git is unavailable the full listing is used. An unreadable
/// root yields an empty tree.
pub async fn build_tree(
    root: &Path,
    cwd: &Path,
    show_ignored: bool,
    options: &BuildOptions,
) -> FileTree {
    if let Err(e) = fs::read_dir(root) {
        tracing::warn!(root = %root.display(), error = %e, "cannot read scan root");
        return FileTree::default();
    }

    let mut entries = walker::walk(root, &options.walk);
    let walked = entries.len();

    if !show_ignored {
        match git::visible_paths(cwd).await {
            GitVisibility::Visible(visible) => {
                entries = prune_to_visible(entries, &visible);
            }
            GitVisibility::Unavailable => {}
        }
    }

    tracing::info!(
        root = %root.display(),
        walked,
        kept = entries.len(),
        show_ignored,
        "tree built"
    );
    FileTree::assemble(root, entries)
}

/// Drop files outside `visible` and directories with no visible descendant.
pub fn prune_to_visible(entries: Vec<Entry>, visible: &HashSet<PathBuf>) -> Vec<Entry> {
    let kept_files: Vec<&Entry> = entries
        .iter()
        .filter(|e| !e.is_dir && visible.contains(&e.path))
        .collect();

    let mut live_dirs: HashSet<&Path> = HashSet::new();
    for file in &kept_files {
        let mut cur = file.path.parent();
        while let Some(dir) = cur {
            if !live_dirs.insert(dir) {
                break;
            }
            cur = dir.parent();
        }
    }

    entries
        .iter()
        .filter(|e| {
            if e.is_dir {
                live_dirs.contains(e.path.as_path())
            } else {
                visible.contains(&e.path)
            }
        })
        .cloned()
        .collect()
}
