//! Shared row builders for integration tests.

use hamburger_core::asset::{Asset, ExtendedSymbol, Name, Symbol, SymbolCode};
use hamburger_core::types::{GlobalRow, PairRow, PoolRow};

/// Fixed block time used across tests.
pub const NOW: u32 = 1_600_000_000;

/// A precision-4 symbol.
pub fn sym(code: &str) -> Symbol {
    Symbol::new(code, 4).unwrap()
}

/// An amount of a precision-4 token, in minor units.
pub fn amount(units: i64, code: &str) -> Asset {
    Asset::new(units, sym(code)).unwrap()
}

pub fn eos(units: i64) -> Asset {
    amount(units, "EOS")
}

/// HBG minor units.
pub fn hbg(units: i64) -> Asset {
    Asset::new(units, Symbol::reward()).unwrap()
}

/// A pair holding `reserve0` and `reserve1`, issued by `eosio.token`.
pub fn make_pair(id: u64, reserve0: Asset, reserve1: Asset) -> PairRow {
    let contract = Name::new("eosio.token").unwrap();
    PairRow {
        id,
        code: SymbolCode::new("HBGLP").unwrap(),
        token0: ExtendedSymbol { sym: reserve0.symbol.clone(), contract: contract.clone() },
        token1: ExtendedSymbol { sym: reserve1.symbol.clone(), contract },
        reserve0,
        reserve1,
        total_liquidity: 1_000,
        last_update_time: NOW,
        created_time: NOW - 86_400,
    }
}

/// A mining pool for `pair_id` last issued at `last_issue_time`.
pub fn make_pool(pair_id: u64, weight: f64, balance: i64, last_issue_time: u32) -> PoolRow {
    PoolRow {
        pair_id,
        weight,
        balance: hbg(balance),
        issued: hbg(0),
        last_issue_time,
        start_time: NOW - 86_400,
        end_time: NOW + 86_400,
    }
}

pub fn make_config(trade_fee: u8, protocol_fee: u8) -> GlobalRow {
    GlobalRow { trade_fee, protocol_fee, ..GlobalRow::default() }
}
