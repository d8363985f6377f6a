//! Session module - turn sequencing and the interactive placement flow
//!
//! A session owns the board and the players. Each turn goes:
//!
//! 1. The board is saved and the current player's first piece is selected.
//! 2. Any number of piece changes, rotations, mirrors and cursor moves; each one
//!    restores the saved grid and paints a fresh preview.
//! 3. A commit runs the placement rules. A rejected commit leaves the turn open
//!    with the reason in [`TurnStatus`]; an accepted one passes the turn on.
//!
//! Turns go round-robin. A player whose deck is empty is skipped, and the
//! session is finished once every deck is empty.

use std::fmt;

use crate::config::{ConfigError, GameConfig};
use crate::core::{Board, BoardSnapshot, Piece, PlacementError, Player};
use crate::rng::{deal_colors, SimpleRng};
use crate::types::{Color, TurnAction};

/// Outcome of the last thing the current player did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// Turn in progress, nothing rejected yet
    Ready,
    /// The last commit or selection was refused
    Rejected(PlacementError),
    /// The previous player placed a piece
    Placed(Color),
    /// Every deck is empty
    Finished,
}

/// What [`Session::apply_action`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Selection, orientation or cursor changed
    Updated,
    /// The piece was placed and the turn moved on
    Placed(Color),
    /// The commit was refused
    Rejected(PlacementError),
    /// The session is over; nothing happened
    Finished,
}

/// Why a session could not be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    Config(ConfigError),
    Deck(PlacementError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Config(err) => write!(f, "invalid game config: {}", err),
            SetupError::Deck(err) => write!(f, "cannot deal decks: {}", err),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Config(err)
    }
}

impl From<PlacementError> for SetupError {
    fn from(err: PlacementError) -> Self {
        SetupError::Deck(err)
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub color: Color,
    pub turn: u32,
    /// The current player's remaining pieces, in deck order
    pub deck: Vec<Piece>,
    /// 0-based index of the selected piece in `deck`
    pub selected: usize,
    pub cursor: (i32, i32),
    pub status: TurnStatus,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    players: Vec<Player>,
    current: usize,
    turn: u32,
    selected: usize,
    cursor: (i32, i32),
    status: TurnStatus,
}

impl Session {
    /// Validate the config, deal colors from `seed` and give every player a deck
    /// cut from `catalog`.
    pub fn new(config: &GameConfig, catalog: &[Piece], seed: u32) -> Result<Self, SetupError> {
        config.validate()?;
        let colors = deal_colors(&mut SimpleRng::new(seed), config.players as usize);
        let board = Board::new(config.board.width, config.board.height);
        Ok(Self::with_colors(board, &colors, catalog)?)
    }

    /// Set up a session with explicit player colors, in turn order
    pub fn with_colors(
        board: Board,
        colors: &[Color],
        catalog: &[Piece],
    ) -> Result<Self, PlacementError> {
        let players = colors
            .iter()
            .map(|&color| Player::new(color, catalog))
            .collect::<Result<Vec<_>, _>>()?;

        let mut session = Self {
            board,
            players,
            current: 0,
            turn: 0,
            selected: 0,
            cursor: (0, 0),
            status: TurnStatus::Ready,
        };
        session.begin_turn();
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn status(&self) -> TurnStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == TurnStatus::Finished
    }

    /// Selected piece of the current player
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.current_player().get_piece(self.selected).ok()
    }

    /// Select a piece by its 1-based position in the current deck. An empty
    /// slot is reported through the status like a rejected commit.
    pub fn select_piece(&mut self, position: usize) -> Result<(), PlacementError> {
        if self.is_finished() {
            return Err(PlacementError::PieceNotFound);
        }
        let found = position
            .checked_sub(1)
            .filter(|&index| index < self.current_player().deck().size());
        let Some(index) = found else {
            self.status = TurnStatus::Rejected(PlacementError::PieceNotFound);
            return Err(PlacementError::PieceNotFound);
        };
        self.selected = index;
        self.status = TurnStatus::Ready;
        self.refresh_preview();
        Ok(())
    }

    pub fn next_piece(&mut self) {
        let size = self.current_player().deck().size();
        if size > 0 {
            self.selected = (self.selected + 1) % size;
            self.refresh_preview();
        }
    }

    pub fn previous_piece(&mut self) {
        let size = self.current_player().deck().size();
        if size > 0 {
            self.selected = (self.selected + size - 1) % size;
            self.refresh_preview();
        }
    }

    pub fn rotate(&mut self) {
        let index = self.selected;
        if let Ok(piece) = self.players[self.current].deck_mut().get_mut(index) {
            piece.rotate();
            self.refresh_preview();
        }
    }

    pub fn mirror(&mut self, horizontal: bool, vertical: bool) {
        let index = self.selected;
        if let Ok(piece) = self.players[self.current].deck_mut().get_mut(index) {
            piece.mirror(horizontal, vertical);
            self.refresh_preview();
        }
    }

    /// Move the preview origin, keeping it on the board
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let max_x = self.board.width() as i32 - 1;
        let max_y = self.board.height() as i32 - 1;
        self.cursor = (
            (self.cursor.0 + dx).clamp(0, max_x),
            (self.cursor.1 + dy).clamp(0, max_y),
        );
        self.refresh_preview();
    }

    /// Drop the preview back to the board origin and clear any rejection
    pub fn cancel(&mut self) {
        self.cursor = (0, 0);
        if !self.is_finished() {
            self.status = TurnStatus::Ready;
        }
        self.refresh_preview();
    }

    /// Place the selected piece at the cursor.
    ///
    /// On success the turn passes to the next player holding pieces.
    pub fn commit(&mut self) -> Result<Color, PlacementError> {
        if self.is_finished() {
            return Err(PlacementError::PieceNotFound);
        }

        let (x, y) = self.cursor;
        let index = self.selected;
        let player = &mut self.players[self.current];
        let color = player.color();

        match player.place_piece(&mut self.board, index, x, y) {
            Ok(()) => {
                tracing::info!(
                    turn = self.turn,
                    color = color.as_str(),
                    x,
                    y,
                    remaining = player.deck().size(),
                    "piece placed"
                );
                self.advance();
                if !self.is_finished() {
                    self.status = TurnStatus::Placed(color);
                }
                Ok(color)
            }
            Err(err) => {
                tracing::debug!(
                    turn = self.turn,
                    color = color.as_str(),
                    x,
                    y,
                    code = err.code(),
                    "placement rejected"
                );
                self.status = TurnStatus::Rejected(err);
                Err(err)
            }
        }
    }

    /// Apply a controller action to the turn in progress
    pub fn apply_action(&mut self, action: TurnAction) -> ActionOutcome {
        if self.is_finished() {
            return ActionOutcome::Finished;
        }

        match action {
            TurnAction::MoveLeft => self.move_cursor(-1, 0),
            TurnAction::MoveRight => self.move_cursor(1, 0),
            TurnAction::MoveUp => self.move_cursor(0, -1),
            TurnAction::MoveDown => self.move_cursor(0, 1),
            TurnAction::Rotate => self.rotate(),
            TurnAction::MirrorHorizontal => self.mirror(true, false),
            TurnAction::MirrorVertical => self.mirror(false, true),
            TurnAction::NextPiece => self.next_piece(),
            TurnAction::PreviousPiece => self.previous_piece(),
            TurnAction::Cancel => self.cancel(),
            TurnAction::Confirm => {
                return match self.commit() {
                    Ok(color) => ActionOutcome::Placed(color),
                    Err(err) => ActionOutcome::Rejected(err),
                };
            }
        }
        ActionOutcome::Updated
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.snapshot(),
            color: self.current_player().color(),
            turn: self.turn,
            deck: self.current_player().deck().pieces().to_vec(),
            selected: self.selected,
            cursor: self.cursor,
            status: self.status,
        }
    }

    fn advance(&mut self) {
        self.turn += 1;
        let count = self.players.len();
        let next = (1..=count)
            .map(|step| (self.current + step) % count)
            .find(|&i| !self.players[i].deck().is_empty());

        match next {
            Some(i) => {
                self.current = i;
                self.begin_turn();
            }
            None => {
                tracing::info!(turn = self.turn, "every deck is empty");
                self.status = TurnStatus::Finished;
            }
        }
    }

    fn begin_turn(&mut self) {
        self.selected = 0;
        self.cursor = (0, 0);
        self.status = TurnStatus::Ready;
        self.board.save();
        tracing::debug!(
            turn = self.turn,
            color = self.current_player().color().as_str(),
            "turn started"
        );
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        // The saved grid predates the final placement once the game is over.
        if self.is_finished() {
            return;
        }
        self.board.restore();
        if let Ok(piece) = self.players[self.current].get_piece(self.selected) {
            self.board.preview(piece, self.cursor.0, self.cursor.1);
        }
    }
}
