use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directory names pruned at any depth during enumeration.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "dist",
    "build",
    "out",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    ".next",
    ".cache",
    "coverage",
    ".idea",
    ".vscode",
    "vendor",
];

/// Maximum directory depth walked beneath the scan root.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// A single enumerated filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }
}

/// Walker settings: which directory names to prune and how deep to go.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub skip_dirs: HashSet<String>,
    pub max_depth: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WalkOptions {
    /// Default options extended with extra directory names to skip.
    pub fn with_extra_skips<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Enumerate every file and directory beneath `root` (root excluded).
///
/// Unreadable entries and subtrees are dropped rather than failing the walk.
/// The result is unsorted; callers impose their own order.
pub fn walk(root: &Path, options: &WalkOptions) -> Vec<Entry> {
    let skip = &options.skip_dirs;
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(options.max_depth)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir() && skip.contains(e.file_name().to_string_lossy().as_ref()))
        })
        .filter_map(|entry| match entry {
            Ok(e) => Some(Entry::new(e.path(), e.file_type().is_dir())),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .collect()
}
