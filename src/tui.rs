use std::io::{self, Stderr};

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// Terminal wrapper that manages raw mode and the alternate screen.
///
/// Draws on stderr so stdout stays free for the emitted selection.
/// Dropping the guard restores the terminal.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    active: bool,
}

impl Tui {
    /// Initialize the terminal: enable raw mode and enter the alternate screen.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Self::enter().inspect_err(|_| reset_terminal())
    }

    fn enter() -> Result<Self> {
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Restore the terminal to its original state. Safe to call twice.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Get a mutable reference to the underlying terminal for drawing.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stderr>> {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Best-effort teardown for paths where no `Tui` exists to drop.
fn reset_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(io::stderr(), LeaveAlternateScreen, cursor::Show);
}

/// Install a panic hook that restores the terminal before printing panic info.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        reset_terminal();
        original_hook(panic_info);
    }));
}
