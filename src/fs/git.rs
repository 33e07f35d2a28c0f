use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::process::Command;

/// Outcome of asking git which paths are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitVisibility {
    /// Absolute paths of tracked files plus untracked files that are not ignored.
    Visible(HashSet<PathBuf>),
    /// Not a repository, git missing, or unreadable output. Callers skip filtering.
    Unavailable,
}

/// List git-visible files for `cwd`.
///
/// Runs `git ls-files --cached --others --exclude-standard -z`; any failure
/// yields [`GitVisibility::Unavailable`] rather than an error.
pub async fn visible_paths(cwd: &Path) -> GitVisibility {
    let output = Command::new("git")
        .args(["ls-files", "--cached", "--others", "--exclude-standard", "-z"])
        .current_dir(cwd)
        .kill_on_drop(true)
        .output()
        .await;

    let output = match output {
        Ok(o) => o,
        Err(e) => {
            tracing::debug!(error = %e, "git not available, showing all files");
            return GitVisibility::Unavailable;
        }
    };

    if !output.status.success() {
        tracing::debug!(
            status = ?output.status,
            "git ls-files failed, showing all files"
        );
        return GitVisibility::Unavailable;
    }

    let paths = parse_ls_files(cwd, &output.stdout);
    tracing::debug!(count = paths.len(), "git visible paths loaded");
    GitVisibility::Visible(paths)
}

/// Parse NUL-separated `ls-files` output into absolute paths under `cwd`.
fn parse_ls_files(cwd: &Path, stdout: &[u8]) -> HashSet<PathBuf> {
    stdout
        .split(|b| *b == 0)
        .filter(|s| !s.is_empty())
        .map(|s| cwd.join(String::from_utf8_lossy(s).as_ref()))
        .collect()
}
