//! Game engine - piece catalogs, setup and the turn loop
//!
//! Sits between the pure rules in `blokus-core` and the terminal front end.
//! Nothing here touches the terminal; the binary feeds [`TurnAction`]s in and
//! draws [`SessionSnapshot`]s out.
//!
//! [`TurnAction`]: crate::types::TurnAction

pub mod catalog;
pub mod config;
pub mod rng;
pub mod session;

pub use blokus_core as core;
pub use blokus_types as types;

pub use catalog::{load_catalog_dir, parse_catalog, standard_pieces, CatalogError};
pub use config::{BoardSize, ConfigError, GameConfig};
pub use rng::{deal_colors, SimpleRng};
pub use session::{ActionOutcome, Session, SessionSnapshot, SetupError, TurnStatus};
