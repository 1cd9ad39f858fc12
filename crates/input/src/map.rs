//! Key mapping from terminal events to game inputs and lifecycle commands.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the engine
    Game(InputEvent),
    /// Start a run (menu or game over)
    Start,
    /// Leave the run for the menu
    Quit,
    ToggleGhost,
    /// Close the program
    Exit,
}

/// Map a key press to an action. Soft drop is not mapped here; it goes
/// through [`crate::SoftDropLatch`] because terminals rarely report releases.
///
/// Auto-repeat only moves the piece sideways; every other key acts once per press.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    match key.kind {
        KeyEventKind::Release => return None,
        KeyEventKind::Repeat if !is_shift_key(key.code) => return None,
        _ => {}
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Exit);
    }

    let action = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            KeyAction::Game(InputEvent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            KeyAction::Game(InputEvent::MoveRight)
        }

        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => {
            KeyAction::Game(InputEvent::RotateRight)
        }
        KeyCode::Char('z' | 'Z' | 'y' | 'Y') => KeyAction::Game(InputEvent::RotateLeft),

        KeyCode::Char(' ') => KeyAction::Game(InputEvent::HardDrop),
        KeyCode::Char('c' | 'C') => KeyAction::Game(InputEvent::HoldSwap),
        KeyCode::Char('p' | 'P') | KeyCode::Esc => KeyAction::Game(InputEvent::TogglePause),

        KeyCode::Enter | KeyCode::Char('n' | 'N') => KeyAction::Start,
        KeyCode::Char('g' | 'G') => KeyAction::ToggleGhost,
        KeyCode::Char('q' | 'Q') => KeyAction::Quit,

        _ => return None,
    };
    Some(action)
}

fn is_shift_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h' | 'H' | 'a' | 'A' | 'l' | 'L' | 'd' | 'D')
    )
}

/// Keys that engage soft drop
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S'))
}
