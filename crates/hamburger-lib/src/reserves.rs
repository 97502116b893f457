//! Reserve lookup for a pair, ordered by a caller-chosen symbol.

use hamburger_core::asset::{Asset, Symbol};
use hamburger_core::error::LibraryError;
use hamburger_core::traits::StateReader;
use tracing::debug;

/// Reserves of `pair_id` with the one denominated in `sort` first.
///
/// Fails with [`LibraryError::PairNotFound`] if the pair does not exist and
/// [`LibraryError::SymbolMismatch`] if neither reserve is in `sort`.
pub fn get_reserves<S: StateReader + ?Sized>(
    state: &S,
    pair_id: u64,
    sort: &Symbol,
) -> Result<(Asset, Asset), LibraryError> {
    let pair = state
        .get_pair(pair_id)
        .ok_or(LibraryError::PairNotFound(pair_id))?;
    let (first, second) = pair
        .reserves_sorted_by(sort)
        .ok_or_else(|| LibraryError::SymbolMismatch {
            pair_id,
            sort: sort.clone(),
        })?;
    debug!(pair_id, %sort, %first, %second, "reserves");
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamburger_core::asset::{ExtendedSymbol, Name, SymbolCode};
    use hamburger_core::state::MemoryState;
    use hamburger_core::types::PairRow;

    fn sym(code: &str) -> Symbol {
        Symbol::new(code, 4).unwrap()
    }

    fn state() -> MemoryState {
        let contract = Name::new("eosio.token").unwrap();
        MemoryState::new().with_pair(PairRow {
            id: 3,
            code: SymbolCode::new("HBGAAB").unwrap(),
            token0: ExtendedSymbol { sym: sym("TOKA"), contract: contract.clone() },
            token1: ExtendedSymbol { sym: sym("TOKB"), contract },
            reserve0: Asset::new(1_000_000, sym("TOKA")).unwrap(),
            reserve1: Asset::new(2_000_000, sym("TOKB")).unwrap(),
            total_liquidity: 0,
            last_update_time: 0,
            created_time: 0,
        })
    }

    #[test]
    fn sorted_by_second_reserve() {
        let (a, b) = get_reserves(&state(), 3, &sym("TOKB")).unwrap();
        assert_eq!(a.to_string(), "200.0000 TOKB");
        assert_eq!(b.to_string(), "100.0000 TOKA");
    }

    #[test]
    fn sorted_by_first_reserve() {
        let (a, b) = get_reserves(&state(), 3, &sym("TOKA")).unwrap();
        assert_eq!(a.amount, 1_000_000);
        assert_eq!(b.amount, 2_000_000);
    }

    #[test]
    fn missing_pair() {
        let err = get_reserves(&state(), 4, &sym("TOKA")).unwrap_err();
        assert_eq!(err, LibraryError::PairNotFound(4));
    }

    #[test]
    fn symbol_mismatch() {
        let err = get_reserves(&state(), 3, &sym("EOS")).unwrap_err();
        assert_eq!(err, LibraryError::SymbolMismatch { pair_id: 3, sort: sym("EOS") });
        assert!(err.to_string().contains("sort symbol does not match"));
    }

    #[test]
    fn repeated_reads_agree() {
        let s = state();
        assert_eq!(get_reserves(&s, 3, &sym("TOKB")), get_reserves(&s, 3, &sym("TOKB")));
    }
}
