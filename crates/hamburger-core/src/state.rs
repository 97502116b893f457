//! In-memory [`StateReader`] over owned table rows.
//!
//! [`MemoryState`] holds one snapshot of the `pairs`, `config`, `pools` and
//! `deposits` tables. It is what snapshot files load into, and what tests
//! build by hand.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::asset::Name;
use crate::traits::StateReader;
use crate::types::{DepositRow, GlobalRow, PairRow, PoolRow};

#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    pairs: HashMap<u64, PairRow>,
    config: Option<GlobalRow>,
    pools: HashMap<u64, PoolRow>,
    deposits: BTreeMap<Name, DepositRow>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a pair, returning the row it replaced.
    pub fn insert_pair(&mut self, pair: PairRow) -> Option<PairRow> {
        self.pairs.insert(pair.primary_key(), pair)
    }

    /// Insert or replace a pool, returning the row it replaced.
    pub fn insert_pool(&mut self, pool: PoolRow) -> Option<PoolRow> {
        self.pools.insert(pool.primary_key(), pool)
    }

    /// Insert or replace a deposit, returning the row it replaced.
    pub fn insert_deposit(&mut self, deposit: DepositRow) -> Option<DepositRow> {
        self.deposits.insert(deposit.primary_key().clone(), deposit)
    }

    pub fn set_config(&mut self, config: GlobalRow) {
        self.config = Some(config);
    }

    pub fn with_pair(mut self, pair: PairRow) -> Self {
        self.insert_pair(pair);
        self
    }

    pub fn with_pool(mut self, pool: PoolRow) -> Self {
        self.insert_pool(pool);
        self
    }

    pub fn with_config(mut self, config: GlobalRow) -> Self {
        self.set_config(config);
        self
    }

    pub fn deposit(&self, owner: &Name) -> Option<&DepositRow> {
        self.deposits.get(owner)
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    pub fn deposit_count(&self) -> usize {
        self.deposits.len()
    }
}

impl StateReader for MemoryState {
    fn get_pair(&self, pair_id: u64) -> Option<PairRow> {
        let pair = self.pairs.get(&pair_id).cloned();
        trace!(pair_id, found = pair.is_some(), "pairs lookup");
        pair
    }

    fn get_config(&self) -> Option<GlobalRow> {
        self.config
    }

    fn get_pool(&self, pair_id: u64) -> Option<PoolRow> {
        let pool = self.pools.get(&pair_id).cloned();
        trace!(pair_id, found = pool.is_some(), "pools lookup");
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Asset, Symbol};

    fn pool(pair_id: u64, balance: i64) -> PoolRow {
        PoolRow {
            pair_id,
            weight: 1.0,
            balance: Asset::new(balance, Symbol::reward()).unwrap(),
            issued: Asset::zero(Symbol::reward()),
            last_issue_time: 0,
            start_time: 0,
            end_time: 0,
        }
    }

    #[test]
    fn empty_state_misses_everything() {
        let state = MemoryState::new();
        assert!(state.get_pair(1).is_none());
        assert!(state.get_pool(1).is_none());
        assert!(state.get_config().is_none());
        assert_eq!(state.get_config_or_default(), GlobalRow::default());
    }

    #[test]
    fn insert_pool_replaces_by_key() {
        let mut state = MemoryState::new();
        assert!(state.insert_pool(pool(7, 10)).is_none());
        let replaced = state.insert_pool(pool(7, 20)).unwrap();
        assert_eq!(replaced.balance.amount, 10);
        assert_eq!(state.get_pool(7).unwrap().balance.amount, 20);
        assert_eq!(state.pool_count(), 1);
    }

    #[test]
    fn config_is_returned_once_set() {
        let cfg = GlobalRow { trade_fee: 30, ..GlobalRow::default() };
        let state = MemoryState::new().with_config(cfg);
        assert_eq!(state.get_config(), Some(cfg));
    }

    #[test]
    fn deposits_keyed_by_owner() {
        let mut state = MemoryState::new();
        let owner = Name::new("alice").unwrap();
        let sym = Symbol::new("EOS", 4).unwrap();
        state.insert_deposit(DepositRow {
            owner: owner.clone(),
            quantity0: Asset::new(1, sym.clone()).unwrap(),
            quantity1: Asset::new(2, sym).unwrap(),
        });
        assert_eq!(state.deposit(&owner).unwrap().quantity1.amount, 2);
        assert!(state.deposit(&Name::new("bob").unwrap()).is_none());
        assert_eq!(state.deposit_count(), 1);
    }
}
