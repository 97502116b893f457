//! Reward engine implementing the [`RewardCalculator`] trait.
//!
//! Emission is computed in floating point and truncated to an integer, the
//! same conversion the mining contract uses when it issues, so projected and
//! issued amounts agree to the minor unit. Allocation is integer-only and
//! strictly sequential: each unit is priced against the pool left over by
//! the previous one.

use hamburger_core::asset::{Asset, Symbol};
use hamburger_core::constants::{
    BASE_SYMBOL_CODE, EMISSION_RATE_PER_SEC, MAX_ALLOCATION_STEPS, MAX_ASSET_AMOUNT, MINE_DIVISOR,
    REWARD_SCALE, TRADE_UNIT,
};
use hamburger_core::traits::{RewardCalculator, StateReader};
use tracing::{debug, warn};

/// The production trade-mining calculator.
#[derive(Debug, Clone, Default)]
pub struct RewardEngine;

impl RewardEngine {
    /// Create a new RewardEngine.
    pub fn new() -> Self {
        Self
    }

    /// Project the HBG reward for trading `from` into `to` on `pair_id` at `now`.
    ///
    /// Returns `0.000000 HBG` when neither leg is EOS, when the pair has no
    /// mining pool, or when the EOS leg is smaller than one trade unit.
    pub fn get_rewards<S: StateReader + ?Sized>(
        &self,
        state: &S,
        now: u32,
        pair_id: u64,
        from: &Asset,
        to: &Asset,
    ) -> Asset {
        let mut reward = Asset::zero(Symbol::reward());

        let Some(base) = base_leg(from, to) else {
            debug!(pair_id, %from, %to, "no EOS leg, trade is not mined");
            return reward;
        };
        let Some(pool) = state.get_pool(pair_id) else {
            debug!(pair_id, "no mining pool for pair");
            return reward;
        };

        if now < pool.last_issue_time {
            warn!(
                pair_id,
                now,
                last_issue_time = pool.last_issue_time,
                "clock behind last issue time, emission clamped to zero"
            );
        }

        let total = self.project_pool(&pool, now);
        let units = allocation_units(base.amount);
        let mined = self.allocate(total, units);

        reward.amount = i64::try_from(mined)
            .unwrap_or(MAX_ASSET_AMOUNT)
            .min(MAX_ASSET_AMOUNT);
        debug!(pair_id, total, units, mined, "projected trade-mining reward");
        reward
    }
}

/// The EOS leg of a trade: `from` if it is EOS, otherwise `to` if that is.
pub fn base_leg<'a>(from: &'a Asset, to: &'a Asset) -> Option<&'a Asset> {
    let leg = if from.symbol.has_code(BASE_SYMBOL_CODE) { from } else { to };
    leg.symbol.has_code(BASE_SYMBOL_CODE).then_some(leg)
}

/// Whole trade units in `amount` minor units of EOS. Negative amounts have none.
pub fn allocation_units(amount: i64) -> u64 {
    u64::try_from(amount / TRADE_UNIT).unwrap_or(0)
}

impl RewardCalculator for RewardEngine {
    fn emission(&self, weight: f64, elapsed_secs: u32) -> u64 {
        // Elapsed seconds are narrowed to f32 before the product is widened.
        let elapsed = elapsed_secs as f32;
        // `as` truncates toward zero and saturates; negatives and NaN become 0.
        (weight * EMISSION_RATE_PER_SEC * f64::from(elapsed) * REWARD_SCALE) as u64
    }

    fn allocate(&self, pool_total: u64, units: u64) -> u64 {
        let mut total = pool_total;
        let mut reward: u64 = 0;

        for _ in 0..units.min(MAX_ALLOCATION_STEPS) {
            // Every remaining unit would mine zero.
            if total < MINE_DIVISOR {
                break;
            }
            let mined = total / MINE_DIVISOR;
            total -= mined;
            reward += mined;
        }

        // Invariant: reward + total == pool_total
        reward
    }
}
