use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::InputMode;
use crate::output::OutputMode;
use crate::theme::ThemeColors;

/// Title line naming the scan root.
pub fn title_line(root_name: &str, theme: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " fpick ",
            Style::default()
                .fg(theme.title_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {root_name}"), Style::default().fg(theme.dim_fg)),
    ])
}

/// Output mode and ignored-files state.
pub fn status_line(output: OutputMode, show_ignored: bool, theme: &ThemeColors) -> Line<'static> {
    let ignored = if show_ignored { "shown" } else { "hidden" };
    Line::from(vec![
        Span::styled(" output: ", Style::default().fg(theme.status_fg)),
        Span::styled(
            output.label(),
            Style::default()
                .fg(theme.warning_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ignored: {ignored}  ? help"),
            Style::default().fg(theme.status_fg),
        ),
    ])
}

/// Search prompt while typing, or the active filter while browsing.
/// `None` when there is nothing to show.
pub fn search_line(mode: InputMode, query: &str, theme: &ThemeColors) -> Option<Line<'static>> {
    match mode {
        InputMode::SearchEntry => Some(Line::from(vec![
            Span::styled(
                " /",
                Style::default()
                    .fg(theme.accent_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(query.to_string(), Style::default().fg(theme.file_fg)),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])),
        InputMode::Browsing if !query.is_empty() => Some(Line::from(vec![
            Span::styled(" filter: ", Style::default().fg(theme.status_fg)),
            Span::styled(query.to_string(), Style::default().fg(theme.accent_fg)),
            Span::styled("  (esc clears)", Style::default().fg(theme.dim_fg)),
        ])),
        InputMode::Browsing => None,
    }
}

/// Footer with the number of selected files.
pub fn footer_line(selected_files: usize, theme: &ThemeColors) -> Line<'static> {
    let noun = if selected_files == 1 { "file" } else { "files" };
    Line::from(vec![
        Span::styled(
            format!(" {selected_files} {noun} selected"),
            Style::default()
                .fg(theme.checked_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  enter confirm · q quit", Style::default().fg(theme.dim_fg)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn status_reports_mode_and_ignored() {
        let theme = crate::theme::dark_theme();
        let line = status_line(OutputMode::Clipboard, true, &theme);
        let s = text(&line);
        assert!(s.contains("output: clipboard"));
        assert!(s.contains("ignored: shown"));
    }

    #[test]
    fn search_line_visibility() {
        let theme = crate::theme::dark_theme();
        assert!(search_line(InputMode::Browsing, "", &theme).is_none());
        let typing = search_line(InputMode::SearchEntry, "ma", &theme).unwrap();
        assert_eq!(text(&typing), " /ma_");
        let active = search_line(InputMode::Browsing, "ma", &theme).unwrap();
        assert!(text(&active).contains("filter: ma"));
    }

    #[test]
    fn footer_pluralizes() {
        let theme = crate::theme::dark_theme();
        assert!(text(&footer_line(1, &theme)).starts_with(" 1 file selected"));
        assert!(text(&footer_line(3, &theme)).starts_with(" 3 files selected"));
    }
}
