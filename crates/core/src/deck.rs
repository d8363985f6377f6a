//! Deck module - the pieces a player still has in hand
//!
//! A deck starts with exactly [`DECK_SIZE`] pieces and only ever shrinks.
//! While it is still full, its owner has not placed anything yet, which is how
//! the rules recognize an opening move.

use crate::error::PlacementError;
use crate::piece::Piece;
use crate::types::{Color, DECK_SIZE};

/// An ordered collection of owned pieces
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pieces: Vec<Piece>,
}

impl Deck {
    pub const MAX_SIZE: usize = DECK_SIZE;

    /// Build a deck from independent copies of `pieces`.
    ///
    /// Fails with `InvalidDeckSize` unless exactly [`Deck::MAX_SIZE`] pieces are given.
    pub fn new(pieces: &[Piece]) -> Result<Self, PlacementError> {
        if pieces.len() != Self::MAX_SIZE {
            return Err(PlacementError::InvalidDeckSize(pieces.len()));
        }
        Ok(Self {
            pieces: pieces.to_vec(),
        })
    }

    /// Color every piece in the deck.
    ///
    /// Fails with `ColorConflict`, coloring nothing, if any piece already
    /// carries a different color.
    pub fn apply_color(&mut self, color: Color) -> Result<(), PlacementError> {
        if self
            .pieces
            .iter()
            .any(|p| p.color().is_some_and(|c| c != color))
        {
            return Err(PlacementError::ColorConflict);
        }
        for piece in &mut self.pieces {
            piece.set_color(color);
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Piece, PlacementError> {
        self.pieces.get(index).ok_or(PlacementError::PieceNotFound)
    }

    /// Mutable access, for rotating or mirroring the stored piece in place
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Piece, PlacementError> {
        self.pieces
            .get_mut(index)
            .ok_or(PlacementError::PieceNotFound)
    }

    /// Remove the first piece equal to `piece` (same cells and color).
    ///
    /// Exactly one entry goes even if the deck holds duplicates, and the
    /// remaining order is kept. Fails with `PieceNotFound` if nothing matches.
    pub fn remove(&mut self, piece: &Piece) -> Result<Piece, PlacementError> {
        let index = self
            .pieces
            .iter()
            .position(|p| p == piece)
            .ok_or(PlacementError::PieceNotFound)?;
        Ok(self.pieces.remove(index))
    }

    /// Remove the piece at `index`, keeping the remaining order
    pub fn remove_at(&mut self, index: usize) -> Result<Piece, PlacementError> {
        if index >= self.pieces.len() {
            return Err(PlacementError::PieceNotFound);
        }
        Ok(self.pieces.remove(index))
    }

    /// True until the first piece has been removed
    pub fn is_full(&self) -> bool {
        self.size() == Self::MAX_SIZE
    }

    pub fn size(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(n: usize) -> Vec<Piece> {
        (0..n).map(|_| Piece::new(&[(0, 0)]).unwrap()).collect()
    }

    #[test]
    fn test_create_requires_exact_size() {
        assert_eq!(
            Deck::new(&pieces(Deck::MAX_SIZE + 1)),
            Err(PlacementError::InvalidDeckSize(22))
        );
        assert_eq!(
            Deck::new(&pieces(Deck::MAX_SIZE - 1)),
            Err(PlacementError::InvalidDeckSize(20))
        );
        let deck = Deck::new(&pieces(Deck::MAX_SIZE)).unwrap();
        assert!(deck.is_full());
        assert_eq!(deck.size(), 21);
    }

    #[test]
    fn test_deck_holds_independent_copies() {
        let mut templates = pieces(Deck::MAX_SIZE);
        templates[0] = Piece::new(&[(0, 0), (1, 0)]).unwrap();
        let mut deck = Deck::new(&templates).unwrap();

        deck.get_mut(0).unwrap().rotate();
        deck.apply_color(Color::Red).unwrap();

        assert_eq!(templates[0].cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);
        assert_eq!(templates[0].color(), None);
        assert_eq!(
            deck.get(0).unwrap().cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1)]
        );
        assert!(deck.iter().all(|p| p.color() == Some(Color::Red)));
    }

    #[test]
    fn test_apply_color_refuses_foreign_pieces() {
        let mut templates = pieces(Deck::MAX_SIZE);
        templates[5].set_color(Color::Blue);
        let mut deck = Deck::new(&templates).unwrap();

        assert_eq!(deck.apply_color(Color::Red), Err(PlacementError::ColorConflict));
        assert_eq!(deck.get(0).unwrap().color(), None);
        assert_eq!(deck.get(5).unwrap().color(), Some(Color::Blue));

        // Same color again is fine.
        assert_eq!(deck.apply_color(Color::Blue), Ok(()));
        assert!(deck.iter().all(|p| p.color() == Some(Color::Blue)));
    }

    #[test]
    fn test_get_out_of_range() {
        let deck = Deck::new(&pieces(Deck::MAX_SIZE)).unwrap();
        assert!(deck.get(20).is_ok());
        assert_eq!(deck.get(21), Err(PlacementError::PieceNotFound));
    }

    #[test]
    fn test_remove_takes_one_duplicate_and_keeps_order() {
        let mut templates = pieces(Deck::MAX_SIZE);
        templates[5] = Piece::new(&[(0, 0), (1, 0)]).unwrap();
        let mut deck = Deck::new(&templates).unwrap();

        let dot = Piece::new(&[(0, 0)]).unwrap();
        deck.remove(&dot).unwrap();

        assert_eq!(deck.size(), 20);
        assert!(!deck.is_full());
        // The domino moved up by exactly one slot.
        assert_eq!(deck.get(4).unwrap().len(), 2);
    }

    #[test]
    fn test_remove_missing_piece_fails_loudly() {
        let mut deck = Deck::new(&pieces(Deck::MAX_SIZE)).unwrap();
        let bar = Piece::new(&[(0, 0), (1, 0), (2, 0)]).unwrap();
        assert_eq!(deck.remove(&bar), Err(PlacementError::PieceNotFound));
        assert_eq!(deck.remove_at(21), Err(PlacementError::PieceNotFound));
        assert!(deck.is_full());
    }
}
