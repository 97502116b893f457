//! # hamburger — read-only accessors over Hamburger swap and mining state.
//!
//! Composes the core table types with the reward engine into the three
//! caller-facing lookups:
//! - [`get_fee`] — total swap fee from the config singleton
//! - [`get_reserves`] — a pair's reserves, ordered by a sort symbol
//! - [`Hamburger::get_rewards`] — projected trade-mining payout
//!
//! State comes from any [`StateReader`]; [`ChainSnapshot`] loads one from a
//! JSON dump of the contract tables.

pub mod config;
pub mod error;
pub mod fee;
pub mod library;
pub mod reserves;
pub mod snapshot;

pub use crate::config::LibraryConfig;
pub use error::{ConfigError, SnapshotError};
pub use fee::get_fee;
pub use hamburger_core::error::LibraryError;
pub use hamburger_core::traits::StateReader;
pub use library::Hamburger;
pub use reserves::get_reserves;
pub use snapshot::ChainSnapshot;
