use falling_blocks::core::BoardEngine;
use falling_blocks::term::{piece_color, FrameBuffer, GameView, SessionStatus, Viewport};
use falling_blocks::types::PieceKind;

fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = BoardEngine::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 high.
    let fb = view.render(&snap, SessionStatus::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = BoardEngine::new(1).snapshot();
    snap.grid[19][0] = PieceKind::I.color_id();
    snap.active = None;

    let fb = GameView::default().render(&snap, SessionStatus::default(), Viewport::new(22, 22));

    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, piece_color(PieceKind::I));
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = BoardEngine::new(1).snapshot();
    let active = snap.active.unwrap();
    let fb = GameView::default().render(&snap, SessionStatus::default(), Viewport::new(22, 22));

    for (x, y) in active.cells() {
        let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert!(cell.style.bold);
    }
}

#[test]
fn term_view_side_panel_needs_room() {
    let snap = BoardEngine::new(1).snapshot();
    let view = GameView::default();

    let narrow = view.render(&snap, SessionStatus::default(), Viewport::new(22, 22));
    assert!(!screen_contains(&narrow, "SCORE"));

    let wide = view.render(&snap, SessionStatus::default(), Viewport::new(60, 24));
    assert!(screen_contains(&wide, "SCORE"));
    assert!(screen_contains(&wide, "LEVEL"));
    assert!(screen_contains(&wide, "LINES"));
    assert!(screen_contains(&wide, "NEXT"));
}

#[test]
fn term_view_shows_score_value() {
    let mut snap = BoardEngine::new(1).snapshot();
    snap.score = 4096;
    let fb = GameView::default().render(&snap, SessionStatus::default(), Viewport::new(60, 24));
    assert!(screen_contains(&fb, "4096"));
}

#[test]
fn term_view_game_over_overlay() {
    let mut snap = BoardEngine::new(1).snapshot();
    snap.game_over = true;
    snap.active = None;

    let fb = GameView::default().render(&snap, SessionStatus::default(), Viewport::new(60, 24));
    assert!(screen_contains(&fb, "GAME OVER"));
    assert!(screen_contains(&fb, "R restart"));
    assert!(!screen_contains(&fb, "PAUSED"));
}

#[test]
fn term_view_paused_overlay() {
    let snap = BoardEngine::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let running = view.render(&snap, SessionStatus { paused: false }, vp);
    assert!(!screen_contains(&running, "PAUSED"));

    let paused = view.render(&snap, SessionStatus { paused: true }, vp);
    assert!(screen_contains(&paused, "PAUSED"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = BoardEngine::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, SessionStatus::default(), vp, &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    assert_eq!(fb, view.render(&snap, SessionStatus::default(), vp));
}
