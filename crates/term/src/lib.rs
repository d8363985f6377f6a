//! Terminal front end for the board.
//!
//! A small, game-oriented rendering layer: views draw a session snapshot into
//! a framebuffer and the renderer flushes it through crossterm. There is no
//! widget or layout library involved.
//!
//! - [`fb`]: framebuffer of styled glyphs
//! - [`palette`]: how cells and player colors look
//! - [`board_view`]: board grid, deck panel and status line
//! - [`renderer`]: raw mode, alternate screen and diffed output

pub mod board_view;
pub mod fb;
pub mod palette;
pub mod renderer;

pub use blokus_core as core;
pub use blokus_engine as engine;
pub use blokus_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{changed_spans, encode_changes, encode_full, Span, TerminalRenderer};
