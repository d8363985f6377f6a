//! Colors for board cells and panel text.

use crate::fb::{Glyph, Rgb, Style};
use crate::types::{Cell, Color};

pub const BACKGROUND: Rgb = Rgb::new(30, 30, 40);
pub const SCREEN: Rgb = Rgb::new(0, 0, 0);

pub const BORDER: Style = Style::new(Rgb::new(200, 200, 200), SCREEN);
pub const LABEL: Style = Style::new(Rgb::new(220, 220, 220), SCREEN).bold();
pub const TEXT: Style = Style::new(Rgb::new(190, 190, 190), SCREEN);
pub const HINT: Style = Style::new(Rgb::new(120, 120, 130), SCREEN);
pub const ERROR: Style = Style::new(Rgb::new(255, 110, 110), SCREEN).bold();

pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 70, 70),
        Color::Green => Rgb::new(90, 200, 100),
        Color::Yellow => Rgb::new(235, 210, 80),
        Color::Blue => Rgb::new(80, 130, 230),
    }
}

/// Panel text in a player's color
pub fn player_style(color: Color) -> Style {
    Style::new(color_rgb(color), SCREEN).bold()
}

/// How one board cell looks. Each cell is drawn twice side by side.
pub fn cell_glyph(cell: Cell) -> Glyph {
    match cell {
        Cell::Empty => Style::new(Rgb::new(90, 90, 100), BACKGROUND).glyph('·'),
        Cell::Preview => Style::new(Rgb::new(150, 150, 150), BACKGROUND).glyph('▒'),
        Cell::Filled(color) => Style::new(color_rgb(color), BACKGROUND).glyph('█'),
    }
}

/// Same as [`cell_glyph`] for a raw grid id; unknown ids draw as empty.
pub fn id_glyph(id: u8) -> Glyph {
    cell_glyph(Cell::from_id(id).unwrap_or_default())
}
