use tui_2048::core::{Board, GameConfig, Grid, Session, SimpleRng};
use tui_2048::input::handle_mouse_event;
use tui_2048::store::FileScoreStore;
use tui_2048::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_2048::types::{Direction, GameAction, ThemeId};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn stuck_session() -> Session<FileScoreStore> {
    let config = GameConfig::default();
    let grid = Grid::with_board(
        &config,
        Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).expect("square board"),
        SimpleRng::new(3),
    );
    let path = std::env::temp_dir().join(format!("tui-2048-view-{}-missing", std::process::id()));
    Session::from_grid(grid, FileScoreStore::new(path), ThemeId::Classic)
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn term_view_top_anchor_starts_with_header() {
    let session = stuck_session();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let (fb, _) = view.render(&session.snapshot(), Viewport::new(60, 24));
    let (_, y) = fb.find_text("SCORE").expect("score box");
    assert_eq!(y, 0);
}

#[test]
fn term_view_theme_switch_changes_background() {
    let mut session = stuck_session();
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let (before, _) = view.render(&session.snapshot(), vp);
    session.apply_action(GameAction::SelectTheme(ThemeId::Dark));
    let (after, _) = view.render(&session.snapshot(), vp);

    assert_ne!(before.get(0, 0), after.get(0, 0));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let session = stuck_session();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&session.snapshot(), Viewport::new(50, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 30));
    assert!(fb.find_text("2048").is_some());
}

#[test]
fn term_view_overlay_buttons_drive_session() {
    let mut session = stuck_session();
    session.apply_action(GameAction::Move(Direction::Up));
    assert!(session.is_game_over());
    session.tick();

    let view = GameView::default();
    let (fb, hits) = view.render(&session.snapshot(), Viewport::new(80, 24));
    assert!(fb.find_text("Game Over!").is_some());

    let restart = hits.restart.expect("restart button");
    let action = handle_mouse_event(click(restart.x + 1, restart.y), &hits);
    assert_eq!(action, Some(GameAction::Restart));
    assert!(session.apply_action(GameAction::Restart));
    assert!(!session.is_game_over());

    let (_, hits) = view.render(&session.snapshot(), Viewport::new(80, 24));
    assert!(hits.restart.is_none() && hits.exit.is_none());
}
