use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

/// Everything a key press can ask the selector to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Confirm,
    StartSearch,
    ClearQuery,
    CycleOutput,
    ToggleHelp,
    ToggleIgnored,
    ToggleSelection,
    ToggleAll,
    Up,
    Down,
    Left,
    Right,
    ExpandAll,
    CollapseAll,
    NextFolder,
    PrevFolder,
    // Search entry
    EndSearch,
    Backspace,
    Insert(char),
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Decode a key press for the given mode. Unbound keys yield `None`.
pub fn key_to_action(mode: InputMode, key: KeyEvent) -> Option<Action> {
    if is_interrupt(&key) {
        return Some(Action::Quit);
    }
    match mode {
        InputMode::Browsing => browsing_action(key),
        InputMode::SearchEntry => search_action(key),
    }
}

fn browsing_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Char('/') => Some(Action::StartSearch),
        KeyCode::Esc => Some(Action::ClearQuery),
        KeyCode::Char('o') => Some(Action::CycleOutput),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('i') => Some(Action::ToggleIgnored),
        KeyCode::Char(' ') => Some(Action::ToggleSelection),
        KeyCode::Char('a') => Some(Action::ToggleAll),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
        KeyCode::Char('e') => Some(Action::ExpandAll),
        KeyCode::Char('c') => Some(Action::CollapseAll),
        KeyCode::Tab | KeyCode::Char(']') => Some(Action::NextFolder),
        KeyCode::BackTab | KeyCode::Char('[') => Some(Action::PrevFolder),
        _ => None,
    }
}

fn search_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::EndSearch),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::Insert(c))
        }
        _ => None,
    }
}

/// Apply one action. Only `ToggleIgnored` suspends, for the tree rebuild.
pub async fn dispatch(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.quit(),
        Action::Confirm => app.confirm(),
        Action::StartSearch => app.start_search(),
        Action::ClearQuery => app.clear_query(),
        Action::CycleOutput => app.cycle_output(),
        Action::ToggleHelp => app.toggle_help(),
        Action::ToggleIgnored => app.toggle_ignored().await,
        Action::ToggleSelection => app.toggle_at_cursor(),
        Action::ToggleAll => app.toggle_all(),
        Action::Up => app.move_up(),
        Action::Down => app.move_down(),
        Action::Left => app.left(),
        Action::Right => app.right(),
        Action::ExpandAll => app.expand_all(),
        Action::CollapseAll => app.collapse_all(),
        Action::NextFolder => app.jump_next_folder(),
        Action::PrevFolder => app.jump_prev_folder(),
        Action::EndSearch => app.end_search(),
        Action::Backspace => app.backspace(),
        Action::Insert(c) => app.push_char(c),
    }
}

/// Handle a key event.
pub async fn handle_key_event(app: &mut App, key: KeyEvent) {
    if let Some(action) = key_to_action(app.mode, key) {
        tracing::trace!(?action, "key");
        dispatch(app, action).await;
    }
}
