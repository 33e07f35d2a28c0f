use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use crate::components::{help, status_bar, tree};
use crate::output::OutputMode;
use crate::theme::ThemeColors;
use crate::viewport::Row;

/// Everything a frame depends on. Rendering reads nothing else.
#[derive(Debug, Clone)]
pub struct FrameState<'a> {
    pub root_name: &'a str,
    /// Rows inside the viewport window.
    pub rows: &'a [Row],
    /// Cursor position relative to `rows`, if it falls inside the window.
    pub cursor: Option<usize>,
    pub output_mode: OutputMode,
    pub show_help: bool,
    pub show_ignored: bool,
    pub mode: InputMode,
    pub query: &'a str,
    pub selected_files: usize,
}

/// Build the full frame as text lines. Pure: same input, same lines.
pub fn render_frame(state: &FrameState, theme: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(state.rows.len() + 8);

    lines.push(status_bar::title_line(state.root_name, theme));
    lines.push(status_bar::status_line(
        state.output_mode,
        state.show_ignored,
        theme,
    ));
    if let Some(search) = status_bar::search_line(state.mode, state.query, theme) {
        lines.push(search);
    }
    if state.show_help {
        lines.extend(help::help_lines(theme));
    }
    lines.push(Line::from(""));

    if state.rows.is_empty() && !state.query.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  no files match \"{}\"", state.query),
            Style::default().fg(theme.dim_fg),
        )));
    }
    for (i, row) in state.rows.iter().enumerate() {
        lines.push(tree::row_line(row, state.cursor == Some(i), theme));
    }

    lines.push(Line::from(""));
    lines.push(status_bar::footer_line(state.selected_files, theme));
    lines
}

/// Draw the application frame.
pub fn render(app: &App, theme: &ThemeColors, frame: &mut Frame) {
    let lines = render_frame(&app.frame_state(), theme);
    frame.render_widget(Paragraph::new(lines), frame.area());
}
