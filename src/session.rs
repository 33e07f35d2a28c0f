//! The selector session: build the tree, run the key loop, hand back the result.

use std::path::Path;
use std::time::Duration;

use crate::app::{App, Outcome};
use crate::error::{AppError, Result};
use crate::event::{Event, EventHandler};
use crate::fs::tree::{build_tree, BuildOptions};
use crate::handler;
use crate::output::{OutputMode, Selection};
use crate::theme::{dark_theme, ThemeColors};
use crate::tui::{install_panic_hook, Tui};
use crate::ui;
use crate::viewport;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Startup settings for one session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub show_ignored: bool,
    pub output_mode: OutputMode,
    pub build: BuildOptions,
    pub theme: ThemeColors,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_ignored: false,
            output_mode: OutputMode::default(),
            build: BuildOptions::default(),
            theme: dark_theme(),
        }
    }
}

/// Run an interactive selection over `root`.
///
/// Returns `Ok(None)` when the user quits, `Err(AppError::NoFiles)` when
/// there is nothing to pick from. The terminal is restored on every path.
pub async fn run_selector(
    root: &Path,
    cwd: &Path,
    options: &SessionOptions,
) -> Result<Option<Selection>> {
    let tree = build_tree(root, cwd, options.show_ignored, &options.build).await;
    if tree.is_empty() {
        return Err(AppError::NoFiles(root.to_path_buf()));
    }

    install_panic_hook();
    let mut tui = Tui::new()?;
    let mut app = App::new(root.to_path_buf(), cwd.to_path_buf(), tree, options);
    app.set_terminal_rows(viewport::terminal_rows());
    let mut events = EventHandler::new(POLL_INTERVAL);

    while !app.is_done() {
        app.refresh();
        tui.terminal_mut().draw(|frame| {
            ui::render(&app, &options.theme, frame);
        })?;

        match events.next().await? {
            Event::Key(key) => handler::handle_key_event(&mut app, key).await,
            Event::Resize(rows) => app.set_terminal_rows(rows),
        }
    }

    tui.restore()?;
    Ok(match app.outcome.take() {
        Some(Outcome::Confirmed(selection)) => Some(selection),
        Some(Outcome::Cancelled) | None => None,
    })
}
