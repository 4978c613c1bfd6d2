use tui_blockfall::core::{Game, GameSnapshot};
use tui_blockfall::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{EngineState, ShapeKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn running_snapshot(kinds: &[ShapeKind]) -> GameSnapshot {
    let mut game = Game::with_sequence(kinds.to_vec());
    game.start();
    game.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 10x20 cells at 2x1 plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = running_snapshot(&[ShapeKind::I]);
    snap.board[19][0] = Some(ShapeKind::J);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    let cell = fb.get(x0, y0).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    // Colour comes from the shape kind.
    let (r, g, b) = ShapeKind::J.rgb();
    assert_eq!((cell.style.fg.r, cell.style.fg.g, cell.style.fg.b), (r, g, b));
}

#[test]
fn term_view_draws_current_piece() {
    // Horizontal I spawns at x=3 on row 0: columns 3..=6 => chars 7..=14.
    let snap = running_snapshot(&[ShapeKind::I]);
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for x in 7..15 {
        assert_eq!(fb.get(x, 1).unwrap().ch, '█', "x={}", x);
    }
    assert_ne!(fb.get(5, 1).unwrap().ch, '█');
    assert_ne!(fb.get(15, 1).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_snapshot(&[ShapeKind::T, ShapeKind::O]);
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
}

#[test]
fn term_view_next_preview_uses_next_shape() {
    let snap = running_snapshot(&[ShapeKind::T, ShapeKind::O]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(60, 22));

    // Panel starts two columns right of the 22-wide frame centred in 60.
    let panel_x = (60 - 22) / 2 + 22 + 2;
    // SCORE/LEVEL/LINES take nine rows, NEXT label is row 9, preview from 10.
    let label: String = fb.row_text(9).chars().skip(panel_x as usize).collect();
    assert_eq!(label.trim_end(), "NEXT");
    for (dx, dy) in [(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (3, 1)] {
        assert_eq!(fb.get(panel_x + dx, 10 + dy).unwrap().ch, '█');
    }
}

#[test]
fn term_view_omits_side_panel_on_narrow_viewport() {
    let snap = running_snapshot(&[ShapeKind::T]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_state() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let idle = GameSnapshot::default();
    assert!(screen_text(&view.render(&idle, vp)).contains("PRESS ENTER"));

    let mut paused = running_snapshot(&[ShapeKind::T]);
    paused.state = EngineState::Paused;
    assert!(screen_text(&view.render(&paused, vp)).contains("PAUSED"));

    let mut over = running_snapshot(&[ShapeKind::T]);
    over.state = EngineState::GameOver;
    assert!(screen_text(&view.render(&over, vp)).contains("GAME OVER"));

    let running = running_snapshot(&[ShapeKind::T]);
    let text = screen_text(&view.render(&running, vp));
    assert!(!text.contains("PAUSED"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameSnapshot::default();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_and_resizes() {
    let snap = running_snapshot(&[ShapeKind::S]);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);

    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 24)));
}
