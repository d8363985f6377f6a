//! Error kinds raised by the placement rules and piece construction.

use std::fmt;

use crate::types::{DECK_SIZE, PIECE_MAX_CELLS};

/// Why a placement, deck lookup or deck construction was refused.
///
/// Every variant is an ordinary rejected move: the board and deck are left
/// exactly as they were before the call that returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A cell of the piece falls outside the board
    OutOfBoard,
    /// A cell of the piece lands on an occupied cell
    Overlap,
    /// An opening move does not cover a board corner
    NotInCorner,
    /// No corner of the piece touches a same-color piece diagonally, or the
    /// touching corner also shares an edge with that color
    NotAdjacent,
    /// Deck index out of range, or the piece is not in the deck
    PieceNotFound,
    /// A deck was built from the wrong number of pieces (carries the count given)
    InvalidDeckSize(usize),
    /// A deck piece already belongs to another color
    ColorConflict,
}

impl PlacementError {
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::OutOfBoard => "out_of_board",
            PlacementError::Overlap => "overlap",
            PlacementError::NotInCorner => "not_in_corner",
            PlacementError::NotAdjacent => "not_adjacent",
            PlacementError::PieceNotFound => "piece_not_found",
            PlacementError::InvalidDeckSize(_) => "invalid_deck_size",
            PlacementError::ColorConflict => "color_conflict",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlacementError::OutOfBoard => "piece does not fit on the board",
            PlacementError::Overlap => "piece covers a piece already on the board",
            PlacementError::NotInCorner => "the first piece must cover a corner of the board",
            PlacementError::NotAdjacent => {
                "piece must touch a piece of the same color by a corner only"
            }
            PlacementError::PieceNotFound => "piece does not exist in the deck",
            PlacementError::InvalidDeckSize(_) => "deck has the wrong number of pieces",
            PlacementError::ColorConflict => "piece already belongs to another color",
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidDeckSize(got) => write!(
                f,
                "{}: expected {}, got {}",
                self.message(),
                DECK_SIZE,
                got
            ),
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Why a cell list could not become a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    Empty,
    TooManyCells(usize),
    DuplicateCell(i32, i32),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => f.write_str("piece has no cells"),
            ShapeError::TooManyCells(n) => write!(
                f,
                "piece has {} cells, at most {} allowed",
                n, PIECE_MAX_CELLS
            ),
            ShapeError::DuplicateCell(x, y) => write!(f, "cell ({}, {}) listed twice", x, y),
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let all = [
            PlacementError::OutOfBoard,
            PlacementError::Overlap,
            PlacementError::NotInCorner,
            PlacementError::NotAdjacent,
            PlacementError::PieceNotFound,
            PlacementError::InvalidDeckSize(3),
            PlacementError::ColorConflict,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn deck_size_message_reports_count() {
        let msg = PlacementError::InvalidDeckSize(20).to_string();
        assert!(msg.contains("21"));
        assert!(msg.contains("20"));
    }
}
