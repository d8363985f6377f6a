use blokus::core::Board;
use blokus::engine::{standard_pieces, Session};
use blokus::term::palette;
use blokus::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use blokus::types::{Cell, Color, TurnAction};

fn session() -> Session {
    Session::with_colors(
        Board::new(20, 20),
        &[Color::Green, Color::Red],
        &standard_pieces().unwrap(),
    )
    .unwrap()
}

// With cell_w=2: board pixels = 20*2 by 20 => 40x20, plus border => 42x22.
// A 42x24 viewport leaves no room for the panel and puts the frame at (0, 2).
const VIEWPORT: Viewport = Viewport {
    width: 42,
    height: 24,
};

#[test]
fn term_view_renders_border_corners() {
    let fb = BoardView::default().render(&session().snapshot(), VIEWPORT);

    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(41, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_placed_cell_two_chars_wide() {
    let mut session = session();
    session.apply_action(TurnAction::Confirm);
    session.apply_action(TurnAction::MoveDown);

    let fb = BoardView::default().render(&session.snapshot(), VIEWPORT);
    let placed = palette::cell_glyph(Cell::Filled(Color::Green));

    // Inside the border: (1, 3) origin.
    assert_eq!(fb.get(1, 3), Some(placed));
    assert_eq!(fb.get(2, 3), Some(placed));
    // Red's preview sits one row lower.
    assert_eq!(fb.get(1, 4), Some(palette::cell_glyph(Cell::Preview)));
    assert_eq!(fb.get(3, 3).unwrap().ch, '·');
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let view = BoardView::default();
    let snap = session().snapshot();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, VIEWPORT, &mut fb);
    assert_eq!(fb, view.render(&snap, VIEWPORT));
}

#[test]
fn renderer_can_be_built_without_a_terminal() {
    // Never entered, so dropping it must not touch the terminal.
    let renderer = TerminalRenderer::new();
    drop(renderer);
}
