//! Blokus (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so callers can write
//! `blokus::{core,engine,input,term,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use blokus_core as core;
pub use blokus_engine as engine;
pub use blokus_input as input;
pub use blokus_term as term;
pub use blokus_types as types;
