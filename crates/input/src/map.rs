//! Key and mouse mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, HitRegions, ThemeId};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map keyboard input to game actions.
///
/// Release events are ignored so terminals that report them don't double
/// every move.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Move(Direction::Down))
        }

        // Themes
        KeyCode::Char(ch @ '1'..='5') => ThemeId::from_digit(ch).map(GameAction::SelectTheme),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a left click on one of the overlay buttons to its action.
pub fn handle_mouse_event(mouse: MouseEvent, hits: &HitRegions) -> Option<GameAction> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (x, y) = (mouse.column, mouse.row);
    if hits.restart.is_some_and(|r| r.contains(x, y)) {
        return Some(GameAction::Restart);
    }
    if hits.exit.is_some_and(|r| r.contains(x, y)) {
        return Some(GameAction::Quit);
    }
    None
}

/// Map any terminal event.
pub fn handle_event(event: &Event, hits: &HitRegions) -> Option<GameAction> {
    match event {
        Event::Key(key) => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse, hits),
        _ => None,
    }
}
