//! BoardView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Piece;
use crate::engine::{SessionSnapshot, TurnStatus};
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::palette;
use crate::types::DECK_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PANEL_GAP: u16 = 2;
const PANEL_MIN_WIDTH: u16 = 14;
const KEY_HINTS: &str = "arrows move  r rotate  m/v mirror  tab piece  enter place  q quit";

pub struct BoardView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame_w = snap.board.width * self.cell_w + 2;
        let frame_h = snap.board.height + 2;
        // Status and key hints sit above the frame so the panel never covers them.
        let top = viewport.height.saturating_sub(frame_h + 2) / 2;
        let start_x = viewport
            .width
            .saturating_sub(frame_w + PANEL_GAP + PANEL_MIN_WIDTH)
            / 2;
        let start_y = top + 2;

        self.draw_status(fb, snap, start_x, top);
        fb.put_str(start_x, top + 1, KEY_HINTS, palette::HINT);

        fb.draw_frame(start_x, start_y, frame_w, frame_h, palette::BORDER);
        for (y, row) in snap.board.rows().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                let px = start_x + 1 + x as u16 * self.cell_w;
                fb.fill_rect(px, start_y + 1 + y as u16, self.cell_w, 1, palette::id_glyph(id));
            }
        }

        let panel_x = start_x + frame_w + PANEL_GAP;
        if viewport.width.saturating_sub(panel_x) >= PANEL_MIN_WIDTH {
            self.draw_panel(fb, snap, panel_x, start_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        let player = palette::player_style(snap.color);
        match snap.status {
            TurnStatus::Ready => {
                let end = fb.put_str(x, y, &snap.color.as_str().to_uppercase(), player);
                fb.put_str(end, y, " to move", palette::TEXT);
            }
            TurnStatus::Placed(prev) => {
                let end = fb.put_str(
                    x,
                    y,
                    &prev.as_str().to_uppercase(),
                    palette::player_style(prev),
                );
                let end = fb.put_str(end, y, " placed a piece, ", palette::TEXT);
                let end = fb.put_str(end, y, &snap.color.as_str().to_uppercase(), player);
                fb.put_str(end, y, " to move", palette::TEXT);
            }
            TurnStatus::Rejected(err) => {
                fb.put_str(x, y, err.message(), palette::ERROR);
            }
            TurnStatus::Finished => {
                fb.put_str(x, y, "Every deck is empty. Press q to quit.", palette::LABEL);
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, top: u16) {
        let player = palette::player_style(snap.color);
        let mut y = top;

        fb.put_str(x, y, "PLAYER", palette::LABEL);
        y += 1;
        fb.put_str(x, y, &snap.color.as_str().to_uppercase(), player);
        y += 2;

        fb.put_str(x, y, "TURN", palette::LABEL);
        y += 1;
        fb.put_str(x, y, &(snap.turn + 1).to_string(), palette::TEXT);
        y += 2;

        fb.put_str(x, y, "PIECE", palette::LABEL);
        y += 1;
        if let Some(piece) = snap.deck.get(snap.selected) {
            let label = format!("#{} of {}", snap.selected + 1, snap.deck.len());
            fb.put_str(x, y, &label, palette::TEXT);
            y += 1;
            y += self.draw_shape(fb, piece, x, y, player) + 1;
        } else {
            fb.put_str(x, y, "-", palette::TEXT);
            y += 2;
        }

        let header = format!("DECK {}/{}", snap.deck.len(), DECK_SIZE);
        fb.put_str(x, y, &header, palette::LABEL);
        y += 1;

        let rows = fb.height().saturating_sub(y) as usize;
        if rows == 0 {
            return;
        }
        let first = (snap.selected + 1).saturating_sub(rows);
        for (i, piece) in snap.deck.iter().enumerate().skip(first).take(rows) {
            let selected = i == snap.selected;
            let line = format!(
                "{}{:>2} {}x{} {}",
                if selected { '>' } else { ' ' },
                i + 1,
                piece.width(),
                piece.height(),
                "■".repeat(piece.len())
            );
            let style = if selected { player } else { palette::TEXT };
            fb.put_str(x, y, &line, style);
            y += 1;
        }
    }

    /// Draw a piece's cells, returning the rows used.
    fn draw_shape(&self, fb: &mut FrameBuffer, piece: &Piece, x: u16, y: u16, style: Style) -> u16 {
        for (dx, dy) in piece.cells() {
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, style.glyph('█'));
        }
        piece.height() as u16
    }
}
