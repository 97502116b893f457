//! Trait interfaces for the Hamburger accessors.
//!
//! - [`StateReader`] — read-only view of the swap and mining tables
//! - [`Clock`] — source of the current block time
//! - [`RewardCalculator`] — trade-mining math (hamburger-mining implements)

use crate::types::{GlobalRow, PairRow, PoolRow};

/// Read-only view of table state owned by the swap and mining contracts.
///
/// Every lookup may miss; a miss is a valid state, not an error. Readers
/// return snapshots and are never asked to write.
pub trait StateReader: Send + Sync {
    /// Look up a pair by id in the swap contract's `pairs` table.
    fn get_pair(&self, pair_id: u64) -> Option<PairRow>;

    /// The swap contract's `config` singleton, `None` if never written.
    fn get_config(&self) -> Option<GlobalRow>;

    /// Look up a pool by pair id in the mining contract's `pools` table.
    fn get_pool(&self, pair_id: u64) -> Option<PoolRow>;

    /// The config singleton, falling back to [`GlobalRow::default`].
    fn get_config_or_default(&self) -> GlobalRow {
        self.get_config().unwrap_or_default()
    }
}

impl<T: StateReader + ?Sized> StateReader for &T {
    fn get_pair(&self, pair_id: u64) -> Option<PairRow> {
        (**self).get_pair(pair_id)
    }

    fn get_config(&self) -> Option<GlobalRow> {
        (**self).get_config()
    }

    fn get_pool(&self, pair_id: u64) -> Option<PoolRow> {
        (**self).get_pool(pair_id)
    }
}

/// Source of the current time in Unix seconds.
pub trait Clock: Send + Sync {
    fn now_sec(&self) -> u32;
}

/// Trade-mining reward math.
///
/// Reward amounts are HBG minor units. Emission uses floating point with
/// truncating conversion; allocation is integer-only.
pub trait RewardCalculator: Send + Sync {
    /// Minor units emitted by a pool of `weight` over `elapsed_secs`.
    fn emission(&self, weight: f64, elapsed_secs: u32) -> u64;

    /// Reward mined by `units` sequential trade units against `pool_total`.
    fn allocate(&self, pool_total: u64, units: u64) -> u64;

    /// Pool balance plus emission since the last issue, as seen at `now`.
    ///
    /// Default implementation clamps a negative balance and a clock that is
    /// behind `last_issue_time` to zero.
    fn project_pool(&self, pool: &PoolRow, now: u32) -> u64 {
        let elapsed = now.saturating_sub(pool.last_issue_time);
        let balance = u64::try_from(pool.balance.amount).unwrap_or(0);
        balance.saturating_add(self.emission(pool.weight, elapsed))
    }
}
