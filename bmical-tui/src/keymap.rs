use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use bmical_engine::command::Command;

/// What the key loop should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Dispatch(Command),
    Insert(char),
    DeleteBack,
    SwitchField,
    Quit,
}

/// View state the mapping depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyContext {
    pub reset_visible: bool,
}

/// Translates a key press into an [`Action`]. Enter submits only without
/// Shift; Escape resets only while the reset affordance is visible.
pub fn map_key(key: KeyEvent, ctx: KeyContext) -> Option<Action> {
    match key.code {
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Action::Dispatch(Command::Submit))
        }
        KeyCode::Esc if ctx.reset_visible => Some(Action::Dispatch(Command::Reset)),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            Some(Action::SwitchField)
        }
        KeyCode::Backspace => Some(Action::DeleteBack),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(c) if !c.is_control() => Some(Action::Insert(c)),
        _ => None,
    }
}
