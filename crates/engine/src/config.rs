//! Game setup: player count and board dimensions.

use std::fmt;
use std::str::FromStr;

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_PLAYERS, MIN_PLAYERS};

/// Board dimensions, written `<width>x<height>` on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: u16,
    pub height: u16,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

impl FromStr for BoardSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::BoardFormat(s.to_string());
        let (w, h) = s.trim().split_once(|c: char| c == 'x' || c == 'X').ok_or_else(bad)?;
        let width: u16 = w.trim().parse().map_err(|_| bad())?;
        let height: u16 = h.trim().parse().map_err(|_| bad())?;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub players: u8,
    pub board: BoardSize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: MAX_PLAYERS,
            board: BoardSize::default(),
        }
    }
}

impl GameConfig {
    pub fn new(players: u8, board: BoardSize) -> Result<Self, ConfigError> {
        let config = Self { players, board };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        if self.board.width == 0 || self.board.height == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    PlayerCount(u8),
    BoardFormat(String),
    EmptyBoard,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PlayerCount(n) => write!(
                f,
                "{} players requested, the game takes {} to {}",
                n, MIN_PLAYERS, MAX_PLAYERS
            ),
            ConfigError::BoardFormat(s) => {
                write!(f, "board size {:?} is not <width>x<height>", s)
            }
            ConfigError::EmptyBoard => f.write_str("board dimensions must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}
