//! Turns keystrokes into actions carrying the full input field contents.

use crate::engine::Action;
use crate::state::SessionState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Dispatch(Action),
    Quit,
    Ignore,
}

pub fn handle_key(state: &SessionState, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('c') if ctrl => return KeyOutcome::Quit,
        _ => {}
    }

    if state.show_instructions {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                KeyOutcome::Dispatch(Action::SetShowInstructions(false))
            }
            _ => KeyOutcome::Ignore,
        };
    }

    if state.finished {
        return KeyOutcome::Ignore;
    }

    match key.code {
        KeyCode::F(1) => KeyOutcome::Dispatch(Action::SetShowInstructions(true)),
        // clearing an empty field would start the timer or repeat the word
        KeyCode::Char('u') | KeyCode::Char('w') if ctrl && state.buffer.is_empty() => {
            KeyOutcome::Ignore
        }
        KeyCode::Char('u') | KeyCode::Char('w') if ctrl => {
            KeyOutcome::Dispatch(Action::SetBuffer(String::new()))
        }
        KeyCode::Char(_) if ctrl => KeyOutcome::Ignore,
        KeyCode::Char(c) => {
            let mut buffer = state.buffer.clone();
            buffer.push(c);
            KeyOutcome::Dispatch(Action::SetBuffer(buffer))
        }
        KeyCode::Backspace => {
            let mut buffer = state.buffer.clone();
            if buffer.pop().is_none() {
                return KeyOutcome::Ignore;
            }
            KeyOutcome::Dispatch(Action::SetBuffer(buffer))
        }
        _ => KeyOutcome::Ignore,
    }
}
