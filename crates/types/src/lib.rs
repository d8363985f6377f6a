//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule checking, terminal rendering, input mapping).
//!
//! # Grid Values
//!
//! The board stores one [`Cell`] per square. Each cell has a stable numeric id
//! used by render snapshots:
//!
//! | Id | Meaning |
//! |----|---------|
//! | 0 | Empty |
//! | 1 | Red |
//! | 2 | Green |
//! | 3 | Yellow |
//! | 4 | Blue |
//! | 6 | Preview marker (reserved, never a player color) |
//!
//! # Game Constants
//!
//! - **Deck size**: 21 pieces per player, all dealt at game start
//! - **Piece size**: 1 to 5 cells
//! - **Default board**: 20x20
//! - **Players**: 2 to 4
//!
//! # Examples
//!
//! ```
//! use blokus_types::{Cell, Color, TurnAction, DECK_SIZE, PREVIEW_ID};
//!
//! // Parse a color (case-insensitive)
//! let color = Color::from_str("Blue").unwrap();
//! assert_eq!(color, Color::Blue);
//!
//! // Colors and grid ids round-trip, the preview id is never a color
//! assert_eq!(Color::from_id(color.id()), Some(Color::Blue));
//! assert_eq!(Color::from_id(PREVIEW_ID), None);
//! assert_eq!(Cell::from_id(PREVIEW_ID), Some(Cell::Preview));
//!
//! // Parse a controller action
//! assert_eq!(TurnAction::from_str("rotate"), Some(TurnAction::Rotate));
//!
//! assert_eq!(DECK_SIZE, 21);
//! ```

/// Number of pieces in a freshly dealt deck
pub const DECK_SIZE: usize = 21;

/// Largest piece, in cells
pub const PIECE_MAX_CELLS: usize = 5;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 20;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Fewest players a game can be set up with
pub const MIN_PLAYERS: u8 = 2;

/// Most players a game can be set up with (one per color)
pub const MAX_PLAYERS: u8 = 4;

/// Grid id of an empty cell
pub const EMPTY_ID: u8 = 0;

/// Grid id of the preview marker.
///
/// Sits outside the [`Color`] id range so a player color can never collide with it.
pub const PREVIEW_ID: u8 = 6;

/// Player colors
///
/// A closed set: every color a player can own is listed here, and the numeric
/// id of each is what the board stores. Ids `0` and [`PREVIEW_ID`] are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
}

impl Color {
    /// All colors, in the order they are offered to players.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Green, Color::Red, Color::Yellow];

    /// Grid id of this color
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Convert a grid id back into a color
    ///
    /// # Examples
    ///
    /// ```
    /// use blokus_types::Color;
    ///
    /// assert_eq!(Color::from_id(1), Some(Color::Red));
    /// assert_eq!(Color::from_id(0), None);
    /// assert_eq!(Color::from_id(5), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            _ => None,
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }
}

/// A cell on the game board
///
/// - `Empty`: nothing placed
/// - `Preview`: painted by an on-screen preview, treated as empty by the rules
/// - `Filled(Color)`: occupied by a committed piece of that color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Preview,
    Filled(Color),
}

impl Cell {
    /// Numeric grid id (see the module table)
    pub fn id(self) -> u8 {
        match self {
            Cell::Empty => EMPTY_ID,
            Cell::Preview => PREVIEW_ID,
            Cell::Filled(color) => color.id(),
        }
    }

    /// Convert a numeric grid id back into a cell
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            EMPTY_ID => Some(Cell::Empty),
            PREVIEW_ID => Some(Cell::Preview),
            other => Color::from_id(other).map(Cell::Filled),
        }
    }

    /// Color occupying this cell, if any
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Filled(color) => Some(color),
            Cell::Empty | Cell::Preview => None,
        }
    }

    /// True for cells the placement rules treat as free (empty or preview)
    pub fn is_free(self) -> bool {
        matches!(self, Cell::Empty | Cell::Preview)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Filled(color)
    }
}

/// Actions a controller can apply to the turn in progress
///
/// These are produced by keyboard input and consumed by the engine session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Move the preview origin one cell left
    MoveLeft,
    /// Move the preview origin one cell right
    MoveRight,
    /// Move the preview origin one cell up
    MoveUp,
    /// Move the preview origin one cell down
    MoveDown,
    /// Give the selected piece a quarter turn
    Rotate,
    /// Mirror the selected piece left-to-right
    MirrorHorizontal,
    /// Mirror the selected piece top-to-bottom
    MirrorVertical,
    /// Select the next piece in the deck
    NextPiece,
    /// Select the previous piece in the deck
    PreviousPiece,
    /// Commit the placement at the current origin
    Confirm,
    /// Drop the preview and return the cursor to the board origin
    Cancel,
}

impl TurnAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blokus_types::TurnAction;
    ///
    /// assert_eq!(TurnAction::from_str("moveLeft"), Some(TurnAction::MoveLeft));
    /// assert_eq!(TurnAction::from_str("mirrorV"), Some(TurnAction::MirrorVertical));
    /// assert_eq!(TurnAction::from_str("confirm"), Some(TurnAction::Confirm));
    /// assert_eq!(TurnAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(TurnAction::MoveLeft),
            "moveright" => Some(TurnAction::MoveRight),
            "moveup" => Some(TurnAction::MoveUp),
            "movedown" => Some(TurnAction::MoveDown),
            "rotate" | "r" => Some(TurnAction::Rotate),
            "mirrorh" | "mh" => Some(TurnAction::MirrorHorizontal),
            "mirrorv" | "mv" => Some(TurnAction::MirrorVertical),
            "nextpiece" => Some(TurnAction::NextPiece),
            "previouspiece" => Some(TurnAction::PreviousPiece),
            "confirm" => Some(TurnAction::Confirm),
            "cancel" => Some(TurnAction::Cancel),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnAction::MoveLeft => "moveLeft",
            TurnAction::MoveRight => "moveRight",
            TurnAction::MoveUp => "moveUp",
            TurnAction::MoveDown => "moveDown",
            TurnAction::Rotate => "rotate",
            TurnAction::MirrorHorizontal => "mirrorH",
            TurnAction::MirrorVertical => "mirrorV",
            TurnAction::NextPiece => "nextPiece",
            TurnAction::PreviousPiece => "previousPiece",
            TurnAction::Confirm => "confirm",
            TurnAction::Cancel => "cancel",
        }
    }
}
