//! Error types for the Hamburger accessors.
use thiserror::Error;

use crate::asset::Symbol;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("invalid account name: {0:?}")] InvalidName(String),
    #[error("invalid symbol code: {0:?}")] InvalidSymbolCode(String),
    #[error("invalid symbol: {0:?}")] InvalidSymbol(String),
    #[error("invalid precision: {0}")] InvalidPrecision(String),
    #[error("invalid asset: {0:?}")] InvalidAsset(String),
    #[error("amount out of range: {0}")] AmountOutOfRange(String),
}

/// Failures surfaced by the reserve lookup. Fee and reward lookups are total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("HamburgerLibrary: INVALID_PAIR_ID {0}")] PairNotFound(u64),
    #[error("sort symbol does not match: pair {pair_id} has no {sort} reserve")] SymbolMismatch { pair_id: u64, sort: Symbol },
}
