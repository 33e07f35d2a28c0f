use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::ThemeColors;
use crate::viewport::Row;

pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";
pub const CHEVRON_OPEN: &str = "▾ ";
pub const CHEVRON_CLOSED: &str = "▸ ";
pub const CURSOR_MARK: &str = "> ";

/// Render one tree row: cursor mark, checkbox, indentation, chevron and name.
pub fn row_line(row: &Row, is_cursor: bool, theme: &ThemeColors) -> Line<'static> {
    let base = if is_cursor {
        Style::default()
            .bg(theme.cursor_bg)
            .fg(theme.cursor_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let marker = if is_cursor { CURSOR_MARK } else { "  " };
    let (checkbox, checkbox_style) = if row.selected {
        (CHECKED, base.fg(theme.checked_fg))
    } else {
        (UNCHECKED, base.fg(theme.dim_fg))
    };

    let indent = "  ".repeat(row.depth);
    let label = if row.is_dir {
        let chevron = if row.expanded {
            CHEVRON_OPEN
        } else {
            CHEVRON_CLOSED
        };
        format!("{indent}{chevron}{}/", row.name)
    } else {
        format!("{indent}{}", row.name)
    };
    let label_style = if is_cursor {
        base
    } else if row.is_dir {
        Style::default()
            .fg(theme.dir_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.file_fg)
    };

    Line::from(vec![
        Span::styled(marker, base),
        Span::styled(checkbox, checkbox_style),
        Span::styled(" ", base),
        Span::styled(label, label_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::tree::NodeId;

    fn row(name: &str, depth: usize, is_dir: bool, expanded: bool, selected: bool) -> Row {
        Row {
            id: NodeId(0),
            parent: None,
            name: name.to_string(),
            depth,
            is_dir,
            expanded,
            selected,
            matched: true,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn file_row_has_no_chevron() {
        let theme = crate::theme::dark_theme();
        let line = row_line(&row("main.ts", 1, false, false, false), false, &theme);
        assert_eq!(text(&line), "  [ ]   main.ts");
    }

    #[test]
    fn directory_row_shows_chevron_and_separator() {
        let theme = crate::theme::dark_theme();
        let collapsed = row_line(&row("src", 0, true, false, true), false, &theme);
        assert_eq!(text(&collapsed), "  [x] ▸ src/");
        let expanded = row_line(&row("src", 0, true, true, false), false, &theme);
        assert_eq!(text(&expanded), "  [ ] ▾ src/");
    }

    #[test]
    fn cursor_row_is_marked_and_highlighted() {
        let theme = crate::theme::dark_theme();
        let line = row_line(&row("a.ts", 0, false, false, false), true, &theme);
        assert!(text(&line).starts_with("> "));
        assert_eq!(line.spans[0].style.bg, Some(theme.cursor_bg));
    }
}
