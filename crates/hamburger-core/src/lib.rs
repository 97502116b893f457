//! # hamburger-core
//! Foundation types and traits for the Hamburger swap and trade-mining accessors.

pub mod asset;
pub mod clock;
pub mod constants;
pub mod error;
pub mod state;
pub mod traits;
pub mod types;
