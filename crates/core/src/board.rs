//! Board module - manages the game grid and the placement legality checks
//!
//! The board is a width x height grid where each cell is empty, a preview
//! marker, or filled with a player color. Uses a flat array in row-major order.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom).
//!
//! The board also keeps a single backup of the grid. [`Board::save`] takes it,
//! [`Board::restore`] puts it back. Overlap checks read the backup, so a caller
//! can paint a preview on the live grid and still test against the grid as it
//! was before the preview. There is one level of undo, not a stack: a second
//! `save` overwrites the first.

use crate::error::PlacementError;
use crate::piece::{Corner, Piece};
use crate::snapshot::BoardSnapshot;
use crate::types::Cell;

/// The game board with its one-slot undo buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    backup: Option<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
            backup: None,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is inside the board
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check that every cell of the piece lands on the board
    pub fn is_piece_inside_at(&self, piece: &Piece, x_offset: i32, y_offset: i32) -> bool {
        piece
            .cells()
            .all(|(cx, cy)| self.contains(cx + x_offset, cy + y_offset))
    }

    /// Paint a piece with its color at the given origin.
    ///
    /// No rule is checked here; callers validate first. An uncolored piece is
    /// painted with the preview marker. Returns false, painting nothing, if any
    /// cell would land off the board.
    pub fn put(&mut self, piece: &Piece, x: i32, y: i32) -> bool {
        let cell = piece.color().map_or(Cell::Preview, Cell::Filled);
        self.paint(piece, x, y, cell)
    }

    /// Paint the preview marker where the piece would go.
    ///
    /// Cells that fall off the board are skipped, so a preview can hang over
    /// the edge while the player is still moving it.
    pub fn preview(&mut self, piece: &Piece, x: i32, y: i32) {
        for (cx, cy) in piece.cells() {
            if let Some(idx) = self.index(cx + x, cy + y) {
                self.cells[idx] = Cell::Preview;
            }
        }
    }

    fn paint(&mut self, piece: &Piece, x: i32, y: i32, cell: Cell) -> bool {
        if !self.is_piece_inside_at(piece, x, y) {
            return false;
        }
        for (cx, cy) in piece.cells() {
            if let Some(idx) = self.index(cx + x, cy + y) {
                self.cells[idx] = cell;
            }
        }
        true
    }

    /// Copy the live grid into the backup, replacing any earlier backup
    pub fn save(&mut self) {
        self.backup = Some(self.cells.clone());
    }

    /// Overwrite the live grid with the backup
    ///
    /// # Panics
    ///
    /// Panics if [`Board::save`] has never been called on this board.
    pub fn restore(&mut self) {
        let Some(backup) = &self.backup else {
            panic!("Board::restore called before Board::save");
        };
        self.cells.copy_from_slice(backup);
    }

    /// True once [`Board::save`] has been called
    pub fn has_snapshot(&self) -> bool {
        self.backup.is_some()
    }

    /// Check if any cell of the piece lands on one of the four board corners
    pub fn is_piece_in_corner_at(&self, piece: &Piece, x_offset: i32, y_offset: i32) -> bool {
        let right = self.width as i32 - 1;
        let bottom = self.height as i32 - 1;
        piece.cells().any(|(cx, cy)| {
            let x = cx + x_offset;
            let y = cy + y_offset;
            (x == 0 || x == right) && (y == 0 || y == bottom)
        })
    }

    /// Check if the piece would cover an occupied cell of the backup grid.
    ///
    /// Empty and preview cells count as free. Without a backup the live grid
    /// is used. Cells off the board never overlap anything.
    pub fn is_piece_overlapping_at(&self, piece: &Piece, x_offset: i32, y_offset: i32) -> bool {
        let baseline = self.backup.as_deref().unwrap_or(&self.cells);
        piece.cells().any(|(cx, cy)| {
            self.index(cx + x_offset, cy + y_offset)
                .is_some_and(|idx| !baseline[idx].is_free())
        })
    }

    /// Full legality check for any placement after a player's opening move.
    ///
    /// Cell by cell, a cell off the board fails with `OutOfBoard` and an
    /// overlapping piece fails with `Overlap`. The piece must then touch its
    /// own color through a corner (see [`Board::touches_own_corner_at`]) or the
    /// check fails with `NotAdjacent`.
    pub fn can_place_at(
        &self,
        piece: &Piece,
        x_offset: i32,
        y_offset: i32,
    ) -> Result<(), PlacementError> {
        let overlapping = self.is_piece_overlapping_at(piece, x_offset, y_offset);
        for (cx, cy) in piece.cells() {
            if !self.contains(cx + x_offset, cy + y_offset) {
                return Err(PlacementError::OutOfBoard);
            }
            if overlapping {
                return Err(PlacementError::Overlap);
            }
        }

        if !self.touches_own_corner_at(piece, x_offset, y_offset) {
            return Err(PlacementError::NotAdjacent);
        }
        Ok(())
    }

    /// The diagonal-touch rule.
    ///
    /// True when some corner cell of the piece, once offset, has its diagonal
    /// neighbor (in the direction of its corner class) filled with the piece's
    /// color on the live grid, while neither cell sharing an edge with both of
    /// them holds that color. The first corner that qualifies wins. An uncolored
    /// piece never touches anything.
    pub fn touches_own_corner_at(&self, piece: &Piece, x_offset: i32, y_offset: i32) -> bool {
        let Some(color) = piece.color() else {
            return false;
        };
        let own = Some(Cell::Filled(color));

        Corner::ALL.iter().any(|&corner| {
            let (dx, dy) = corner.diagonal();
            piece.corner_cells(corner).iter().any(|&(cx, cy)| {
                let x = cx + x_offset;
                let y = cy + y_offset;
                self.get(x + dx, y + dy) == own
                    && self.get(x + dx, y) != own
                    && self.get(x, y + dy) != own
            })
        })
    }

    /// Render-ready copy of the live grid
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|c| c.id()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn dot(color: Color) -> Piece {
        let mut piece = Piece::new(&[(0, 0)]).unwrap();
        piece.set_color(color);
        piece
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(5, 4);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(4, 0), Some(4));
        assert_eq!(board.index(0, 1), Some(5));
        assert_eq!(board.index(4, 3), Some(19));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(5, 0), None);
        assert_eq!(board.index(0, 4), None);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_sized_board_panics() {
        let _ = Board::new(0, 5);
    }

    #[test]
    #[should_panic(expected = "before Board::save")]
    fn test_restore_without_save_panics() {
        let mut board = Board::new(5, 5);
        board.restore();
    }

    #[test]
    fn test_put_refuses_partial_paint() {
        let mut board = Board::new(5, 5);
        let mut bar = Piece::new(&[(0, 0), (1, 0)]).unwrap();
        bar.set_color(Color::Red);

        assert!(!board.put(&bar, 4, 0));
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));

        assert!(board.put(&bar, 3, 0));
        assert_eq!(board.get(3, 0), Some(Cell::Filled(Color::Red)));
        assert_eq!(board.get(4, 0), Some(Cell::Filled(Color::Red)));
    }

    #[test]
    fn test_preview_clips_and_is_free() {
        let mut board = Board::new(5, 5);
        let bar = Piece::new(&[(0, 0), (1, 0)]).unwrap();
        board.preview(&bar, 4, 4);
        assert_eq!(board.get(4, 4), Some(Cell::Preview));

        let single = dot(Color::Blue);
        assert!(!board.is_piece_overlapping_at(&single, 4, 4));
    }

    #[test]
    fn test_save_overwrites_previous_backup() {
        let mut board = Board::new(3, 3);
        board.save();
        assert!(board.put(&dot(Color::Green), 1, 1));
        board.save();
        assert!(board.put(&dot(Color::Green), 0, 0));
        board.restore();

        assert_eq!(board.get(1, 1), Some(Cell::Filled(Color::Green)));
        assert_eq!(board.get(0, 0), Some(Cell::Empty));
    }

    #[test]
    fn test_diagonal_touch_rejects_shared_edge() {
        let mut board = Board::new(5, 5);
        assert!(board.put(&dot(Color::Blue), 1, 1));
        assert!(board.put(&dot(Color::Blue), 2, 1));

        // (3, 2) touches (2, 1) by its top-left corner only.
        assert!(board.touches_own_corner_at(&dot(Color::Blue), 3, 2));
        // (2, 2) touches (1, 1) diagonally but shares an edge with (2, 1).
        assert!(!board.touches_own_corner_at(&dot(Color::Blue), 2, 2));
    }

    #[test]
    fn test_snapshot_uses_grid_ids() {
        let mut board = Board::new(2, 2);
        assert!(board.put(&dot(Color::Yellow), 1, 0));
        board.preview(&dot(Color::Yellow), 0, 1);
        let snap = board.snapshot();
        assert_eq!(snap.cells, vec![0, 3, 6, 0]);
    }
}
