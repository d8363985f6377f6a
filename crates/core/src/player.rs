//! Player module - a color, a deck, and the placement rule orchestration

use crate::board::Board;
use crate::deck::Deck;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::types::Color;

/// A player: one color and the deck of pieces carrying it
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    color: Color,
    deck: Deck,
}

impl Player {
    /// Deal a deck from the catalog and color every piece in it.
    ///
    /// Pieces that already carry another color are refused with `ColorConflict`.
    pub fn new(color: Color, pieces: &[Piece]) -> Result<Self, PlacementError> {
        let mut deck = Deck::new(pieces)?;
        deck.apply_color(color)?;
        Ok(Self { color, deck })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn get_piece(&self, index: usize) -> Result<&Piece, PlacementError> {
        self.deck.get(index)
    }

    /// True while this player has not placed anything yet
    pub fn is_opening(&self) -> bool {
        self.deck.is_full()
    }

    /// Decide whether `piece` may go at (x, y) for this player right now.
    ///
    /// Opening move (full deck): the piece must fit on the board, must not
    /// overlap, and must cover a board corner. Diagonal contact is not required.
    /// Every later move goes through [`Board::can_place_at`].
    pub fn check_placement(
        &self,
        board: &Board,
        piece: &Piece,
        x: i32,
        y: i32,
    ) -> Result<(), PlacementError> {
        if self.is_opening() {
            if !board.is_piece_inside_at(piece, x, y) {
                return Err(PlacementError::OutOfBoard);
            }
            if board.is_piece_overlapping_at(piece, x, y) {
                return Err(PlacementError::Overlap);
            }
            if !board.is_piece_in_corner_at(piece, x, y) {
                return Err(PlacementError::NotInCorner);
            }
            return Ok(());
        }
        board.can_place_at(piece, x, y)
    }

    /// Place the deck piece at `index` with its origin at (x, y).
    ///
    /// On success the piece is painted and leaves the deck. On any error
    /// neither the board nor the deck has changed.
    pub fn place_piece(
        &mut self,
        board: &mut Board,
        index: usize,
        x: i32,
        y: i32,
    ) -> Result<(), PlacementError> {
        let piece = self.deck.get(index)?;
        self.check_placement(board, piece, x, y)?;

        if !board.put(piece, x, y) {
            return Err(PlacementError::OutOfBoard);
        }

        self.deck.remove_at(index)?;
        Ok(())
    }
}
