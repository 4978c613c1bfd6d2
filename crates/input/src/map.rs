//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameCommand::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameCommand::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameCommand::SoftDrop)
        }

        // Rotation (clockwise only)
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('e')
        | KeyCode::Char('E') => Some(GameCommand::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),
        KeyCode::Enter => Some(GameCommand::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` rotates, so quitting is Esc or Ctrl-C only.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && (key.code == KeyCode::Esc
            || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                && key.modifiers.contains(KeyModifiers::CONTROL)))
}
