//! What happens to a confirmed selection: where it goes and what it looks like.

pub mod assemble;
pub mod emit;

use std::path::PathBuf;

/// Destination for the concatenated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Stdout,
    Clipboard,
    File,
}

impl OutputMode {
    /// Parse an output mode from config or CLI text. Unknown values are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stdout" => Some(OutputMode::Stdout),
            "clipboard" => Some(OutputMode::Clipboard),
            "file" => Some(OutputMode::File),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputMode::Stdout => "stdout",
            OutputMode::Clipboard => "clipboard",
            OutputMode::File => "file",
        }
    }

    /// Cycle stdout → clipboard → file → stdout.
    pub fn next(&self) -> Self {
        match self {
            OutputMode::Stdout => OutputMode::Clipboard,
            OutputMode::Clipboard => OutputMode::File,
            OutputMode::File => OutputMode::Stdout,
        }
    }
}

/// A file picked in the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub absolute_path: PathBuf,
    pub relative_path: PathBuf,
    /// Extension without the dot, empty for none.
    pub extension: String,
}

/// Result of a confirmed selector session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Sorted by relative path.
    pub files: Vec<SelectedFile>,
    pub output_mode: OutputMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_length_three() {
        let start = OutputMode::Clipboard;
        let mut mode = start;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, start);
    }

    #[test]
    fn cycle_order() {
        assert_eq!(OutputMode::Stdout.next(), OutputMode::Clipboard);
        assert_eq!(OutputMode::Clipboard.next(), OutputMode::File);
        assert_eq!(OutputMode::File.next(), OutputMode::Stdout);
    }

    #[test]
    fn parse_accepts_labels_case_insensitively() {
        for mode in [OutputMode::Stdout, OutputMode::Clipboard, OutputMode::File] {
            assert_eq!(OutputMode::parse(mode.label()), Some(mode));
        }
        assert_eq!(OutputMode::parse("FILE"), Some(OutputMode::File));
        assert_eq!(OutputMode::parse("printer"), None);
    }
}
