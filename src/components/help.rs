use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::ThemeColors;

/// A single keybinding entry for display.
struct KeyEntry {
    key: &'static str,
    description: &'static str,
}

/// A category of keybindings.
struct KeyCategory {
    name: &'static str,
    entries: &'static [KeyEntry],
}

const NAVIGATION_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "j / ↓  k / ↑",
        description: "Move down / up",
    },
    KeyEntry {
        key: "l / →",
        description: "Expand directory",
    },
    KeyEntry {
        key: "h / ←",
        description: "Collapse directory or go to parent",
    },
    KeyEntry {
        key: "Tab / ]  S-Tab / [",
        description: "Next / previous folder",
    },
    KeyEntry {
        key: "e / c",
        description: "Expand all / collapse all",
    },
];

const SELECTION_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "Space",
        description: "Toggle file or folder",
    },
    KeyEntry {
        key: "a",
        description: "Toggle all (matches only while filtering)",
    },
    KeyEntry {
        key: "/",
        description: "Filter by name or path",
    },
    KeyEntry {
        key: "Esc",
        description: "Clear filter",
    },
];

const GENERAL_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "o",
        description: "Cycle output: stdout, clipboard, file",
    },
    KeyEntry {
        key: "i",
        description: "Show / hide git-ignored files",
    },
    KeyEntry {
        key: "?",
        description: "Toggle this help",
    },
    KeyEntry {
        key: "Enter",
        description: "Confirm selection",
    },
    KeyEntry {
        key: "q / Ctrl+C",
        description: "Quit without output",
    },
];

const CATEGORIES: &[KeyCategory] = &[
    KeyCategory {
        name: "Navigation",
        entries: NAVIGATION_KEYS,
    },
    KeyCategory {
        name: "Selection",
        entries: SELECTION_KEYS,
    },
    KeyCategory {
        name: "General",
        entries: GENERAL_KEYS,
    },
];

const KEY_WIDTH: usize = 22;

/// Number of lines [`help_lines`] produces.
pub fn help_line_count() -> usize {
    CATEGORIES.iter().map(|c| 1 + c.entries.len()).sum()
}

/// Keybinding reference shown inline above the tree.
pub fn help_lines(theme: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(help_line_count());
    for category in CATEGORIES {
        lines.push(Line::from(Span::styled(
            format!("── {} ", category.name),
            Style::default()
                .fg(theme.accent_fg)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in category.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", entry.key, width = KEY_WIDTH),
                    Style::default()
                        .fg(theme.warning_fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.description, Style::default().fg(theme.file_fg)),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_have_entries() {
        for cat in CATEGORIES {
            assert!(
                !cat.entries.is_empty(),
                "Category '{}' has no entries",
                cat.name
            );
        }
    }

    #[test]
    fn content_lines_match_count() {
        let theme = crate::theme::dark_theme();
        assert_eq!(help_lines(&theme).len(), help_line_count());
    }
}
