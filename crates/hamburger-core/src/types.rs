//! Table rows owned by the swap and trade-mining contracts.
//!
//! These are read-only snapshots. Field names match the on-chain table
//! schemas so a JSON dump of a table deserializes directly into these rows.
//! Timestamps are Unix seconds.

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, ExtendedSymbol, Name, Symbol, SymbolCode};
use crate::constants::{
    DEFAULT_CONTRACT_STATUS, DEFAULT_MINE_STATUS, DEFAULT_PROTOCOL_FEE, DEFAULT_TRADE_FEE,
};

/// A row of the swap contract's `pairs` table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PairRow {
    pub id: u64,
    /// Liquidity token code for the pair.
    pub code: SymbolCode,
    pub token0: ExtendedSymbol,
    pub token1: ExtendedSymbol,
    /// Always denominated in `token0`.
    pub reserve0: Asset,
    /// Always denominated in `token1`.
    pub reserve1: Asset,
    pub total_liquidity: u64,
    pub last_update_time: u32,
    pub created_time: u32,
}

impl PairRow {
    pub const TABLE: &'static str = "pairs";

    pub fn primary_key(&self) -> u64 {
        self.id
    }

    /// Reserves ordered so the one denominated in `sort` comes first.
    ///
    /// Returns `None` when neither reserve carries `sort`.
    pub fn reserves_sorted_by(&self, sort: &Symbol) -> Option<(Asset, Asset)> {
        if self.reserve0.symbol == *sort {
            Some((self.reserve0.clone(), self.reserve1.clone()))
        } else if self.reserve1.symbol == *sort {
            Some((self.reserve1.clone(), self.reserve0.clone()))
        } else {
            None
        }
    }
}

/// The swap contract's `config` singleton.
///
/// Fee rates are in basis points of a trade (20 = 0.20%).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalRow {
    pub contract_status: u8,
    pub mine_status: u8,
    pub trade_fee: u8,
    pub protocol_fee: u8,
}

impl GlobalRow {
    pub const TABLE: &'static str = "config";
}

impl Default for GlobalRow {
    fn default() -> Self {
        Self {
            contract_status: DEFAULT_CONTRACT_STATUS,
            mine_status: DEFAULT_MINE_STATUS,
            trade_fee: DEFAULT_TRADE_FEE,
            protocol_fee: DEFAULT_PROTOCOL_FEE,
        }
    }
}

/// A row of the swap contract's `deposits` table. Not read by any accessor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DepositRow {
    pub owner: Name,
    pub quantity0: Asset,
    pub quantity1: Asset,
}

impl DepositRow {
    pub const TABLE: &'static str = "deposits";

    pub fn primary_key(&self) -> &Name {
        &self.owner
    }
}

/// A row of the trade-mining contract's `pools` table.
///
/// `balance` grows by emission and shrinks by allocation to traders; the
/// mining contract persists both, this crate only projects them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PoolRow {
    pub pair_id: u64,
    /// Emission weight; HBG emitted per second is `weight * 0.005`.
    pub weight: f64,
    pub balance: Asset,
    pub issued: Asset,
    pub last_issue_time: u32,
    pub start_time: u32,
    pub end_time: u32,
}

impl PoolRow {
    pub const TABLE: &'static str = "pools";

    pub fn primary_key(&self) -> u64 {
        self.pair_id
    }
}
