use std::fs;
use std::path::Path;

use super::SelectedFile;

/// Bytes inspected when deciding whether a file is binary.
const SNIFF_LEN: usize = 8000;

/// Concatenated output plus bookkeeping about what went in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub text: String,
    pub included: usize,
    /// Relative paths left out because they were binary or unreadable.
    pub skipped: Vec<String>,
}

/// A NUL byte near the start marks a file as binary.
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(SNIFF_LEN).any(|b| *b == 0)
}

/// Comment line announcing `relative_path`, in the syntax of its extension.
pub fn comment_header(relative_path: &Path) -> String {
    let shown = relative_path.to_string_lossy().replace('\\', "/");
    let ext = relative_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "rs" | "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" | "cs" | "java" | "kt" | "kts"
        | "scala" | "swift" | "go" | "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" | "dart"
        | "php" | "zig" | "proto" | "json5" | "groovy" => format!("// {shown}"),
        "py" | "sh" | "bash" | "zsh" | "fish" | "rb" | "pl" | "r" | "toml" | "yaml" | "yml"
        | "ini" | "cfg" | "conf" | "mk" | "cmake" | "dockerfile" | "ex" | "exs" | "nix" => {
            format!("# {shown}")
        }
        "sql" | "lua" | "hs" | "elm" | "ada" => format!("-- {shown}"),
        "html" | "htm" | "xml" | "svg" | "md" | "markdown" | "vue" | "svelte" => {
            format!("<!-- {shown} -->")
        }
        "css" | "scss" | "sass" | "less" => format!("/* {shown} */"),
        "vim" => format!("\" {shown}"),
        "bat" | "cmd" => format!("REM {shown}"),
        _ => format!("# {shown}"),
    }
}

/// Read each file and join them, each preceded by its comment header.
///
/// Binary and unreadable files are skipped and reported in
/// [`Assembled::skipped`]; they never abort the whole run.
pub fn assemble(files: &[SelectedFile]) -> Assembled {
    let mut out = Assembled::default();
    for file in files {
        let shown = file.relative_path.to_string_lossy().replace('\\', "/");
        let bytes = match fs::read(&file.absolute_path) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(path = %shown, error = %e, "skipping unreadable file");
                out.skipped.push(shown);
                continue;
            }
        };
        if is_binary(&bytes) {
            tracing::debug!(path = %shown, "skipping binary file");
            out.skipped.push(shown);
            continue;
        }

        if out.included > 0 {
            out.text.push('\n');
        }
        out.text.push_str(&comment_header(&file.relative_path));
        out.text.push('\n');
        out.text.push_str(&String::from_utf8_lossy(&bytes));
        if !out.text.ends_with('\n') {
            out.text.push('\n');
        }
        out.included += 1;
        tracing::debug!(path = %shown, ext = %file.extension, bytes = bytes.len(), "file included");
    }
    out
}
