//! Core rules module - pure, deterministic, and testable
//!
//! This crate holds the pieces, decks, board and the placement rules of the
//! game. It has **zero dependencies** on UI, terminal, or file I/O, making it:
//!
//! - **Deterministic**: the same sequence of calls always yields the same grid
//! - **Testable**: every rule is a plain function over in-memory state
//! - **Portable**: usable from the terminal front end, tests or benchmarks
//!
//! # Module Structure
//!
//! - [`piece`]: polyomino shapes, rotation, mirroring and corner sets
//! - [`deck`]: the fixed-size set of pieces each player starts with
//! - [`board`]: the grid, the one-slot undo buffer and the legality checks
//! - [`player`]: color ownership and the placement orchestration
//! - [`error`]: rejected-move kinds
//! - [`snapshot`]: render-ready copy of the grid
//!
//! # Game Rules
//!
//! - **Opening move**: while a player's deck is still full, their piece must
//!   cover one of the four board corners and must not overlap anything
//! - **Later moves**: every cell must be on the board and free, and some corner
//!   of the piece must touch a piece of the same color diagonally without the
//!   two sharing an edge
//! - **Other colors**: only constrain placement through overlap
//!
//! # Example
//!
//! ```
//! use blokus_core::{Board, Piece, Player, PlacementError};
//! use blokus_types::{Color, DECK_SIZE};
//!
//! let domino = Piece::new(&[(0, 0), (1, 0)]).unwrap();
//! let catalog = vec![domino; DECK_SIZE];
//!
//! let mut board = Board::new(5, 5);
//! let mut blue = Player::new(Color::Blue, &catalog).unwrap();
//!
//! // Opening move must sit in a corner
//! assert_eq!(blue.place_piece(&mut board, 0, 2, 2), Err(PlacementError::NotInCorner));
//! blue.place_piece(&mut board, 0, 0, 0).unwrap();
//!
//! // Then pieces chain corner to corner
//! board.save();
//! assert_eq!(blue.place_piece(&mut board, 0, 3, 3), Err(PlacementError::NotAdjacent));
//! blue.place_piece(&mut board, 0, 2, 1).unwrap();
//! assert_eq!(blue.deck().size(), DECK_SIZE - 2);
//! ```
//!
//! # Previews
//!
//! A controller shows where a piece would go by calling [`Board::save`] once,
//! then `restore` + `preview` for each cursor move. Overlap checks read the
//! saved grid, so the preview cells never block the placement they stand for.

pub mod board;
pub mod deck;
pub mod error;
pub mod piece;
pub mod player;
pub mod snapshot;

pub use blokus_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use deck::Deck;
pub use error::{PlacementError, ShapeError};
pub use piece::{Corner, Offset, Piece};
pub use player::Player;
pub use snapshot::BoardSnapshot;
