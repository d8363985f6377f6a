//! Key mapping from terminal events to turn actions.

use crate::types::TurnAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to turn actions.
///
/// Key releases are ignored so terminals that report them do not fire twice.
pub fn handle_key_event(key: KeyEvent) -> Option<TurnAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(TurnAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(TurnAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(TurnAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(TurnAction::MoveDown),

        // Orientation
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TurnAction::Rotate),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(TurnAction::MirrorHorizontal),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(TurnAction::MirrorVertical),

        // Piece selection
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => Some(TurnAction::NextPiece),
        KeyCode::BackTab | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(TurnAction::PreviousPiece)
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(TurnAction::Confirm),
        KeyCode::Esc | KeyCode::Backspace => Some(TurnAction::Cancel),

        _ => None,
    }
}

/// Digit keys pick a piece by its 1-based slot in the deck panel.
///
/// `1`..`9` select slots 1 to 9 and `0` selects slot 10.
pub fn piece_slot(key: KeyEvent) -> Option<usize> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('0') => Some(10),
        KeyCode::Char(c) => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
