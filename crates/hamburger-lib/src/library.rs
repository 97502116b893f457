//! The [`Hamburger`] facade: one state reader, one clock, three lookups.

use hamburger_core::asset::{Asset, Symbol};
use hamburger_core::clock::SystemClock;
use hamburger_core::error::LibraryError;
use hamburger_core::traits::{Clock, StateReader};
use hamburger_mining::RewardEngine;

use crate::{fee, reserves};

/// Read-only accessors over swap and mining state.
///
/// Every method is a pure read of the current snapshot; calling one twice
/// against unchanged state returns the same result.
#[derive(Debug, Clone)]
pub struct Hamburger<S, C = SystemClock> {
    state: S,
    clock: C,
    engine: RewardEngine,
}

impl<S: StateReader> Hamburger<S> {
    /// Accessors timed by the wall clock.
    pub fn new(state: S) -> Self {
        Self::with_clock(state, SystemClock)
    }
}

impl<S: StateReader, C: Clock> Hamburger<S, C> {
    pub fn with_clock(state: S, clock: C) -> Self {
        Self {
            state,
            clock,
            engine: RewardEngine::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Total swap fee, `trade_fee + protocol_fee`. See [`fee::get_fee`].
    pub fn get_fee(&self) -> u8 {
        fee::get_fee(&self.state)
    }

    /// Reserves of `pair_id`, the one in `sort` first. See [`reserves::get_reserves`].
    pub fn get_reserves(&self, pair_id: u64, sort: &Symbol) -> Result<(Asset, Asset), LibraryError> {
        reserves::get_reserves(&self.state, pair_id, sort)
    }

    /// Projected HBG reward for trading `from` into `to` on `pair_id`, now.
    pub fn get_rewards(&self, pair_id: u64, from: &Asset, to: &Asset) -> Asset {
        self.engine
            .get_rewards(&self.state, self.clock.now_sec(), pair_id, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamburger_core::clock::FixedClock;
    use hamburger_core::state::MemoryState;
    use hamburger_core::types::PoolRow;

    const NOW: u32 = 1_600_000_000;

    fn eos(amount: i64) -> Asset {
        Asset::new(amount, Symbol::new("EOS", 4).unwrap()).unwrap()
    }

    fn usdt(amount: i64) -> Asset {
        Asset::new(amount, Symbol::new("USDT", 4).unwrap()).unwrap()
    }

    fn state() -> MemoryState {
        MemoryState::new().with_pool(PoolRow {
            pair_id: 1,
            weight: 1.0,
            balance: Asset::new(1_000_000, Symbol::reward()).unwrap(),
            issued: Asset::zero(Symbol::reward()),
            last_issue_time: NOW,
            start_time: 0,
            end_time: u32::MAX,
        })
    }

    #[test]
    fn fee_through_facade() {
        assert_eq!(Hamburger::new(MemoryState::new()).get_fee(), 30);
    }

    #[test]
    fn reserves_through_facade() {
        let lib = Hamburger::new(MemoryState::new());
        let sort = Symbol::new("EOS", 4).unwrap();
        assert_eq!(lib.get_reserves(1, &sort), Err(LibraryError::PairNotFound(1)));
    }

    #[test]
    fn rewards_use_injected_clock() {
        let at_issue = Hamburger::with_clock(state(), FixedClock(NOW));
        assert_eq!(at_issue.get_rewards(1, &eos(10_000), &usdt(1)).amount, 100);

        // 100 s later: 1_000_000 + 500_000 emitted -> 150 for one unit.
        let later = Hamburger::with_clock(state(), FixedClock(NOW + 100));
        assert_eq!(later.get_rewards(1, &eos(10_000), &usdt(1)).amount, 150);
    }

    #[test]
    fn facade_accepts_trait_objects() {
        let boxed: Box<dyn StateReader> = Box::new(state());
        let lib = Hamburger::with_clock(boxed.as_ref(), FixedClock(NOW));
        assert_eq!(lib.get_rewards(1, &eos(20_000), &usdt(1)).amount, 199);
        assert_eq!(lib.clock().now_sec(), NOW);
    }
}
