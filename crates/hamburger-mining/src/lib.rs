//! # hamburger-mining — Trade-mining reward projection.
//!
//! Projects what the mining contract would pay for a trade without writing
//! anything back:
//! - **Emission**: a pool accrues `weight * 0.005` HBG per second since its
//!   last issue, truncated to minor units.
//! - **Allocation**: the EOS leg of the trade is cut into 1.0000 EOS units and
//!   each unit mines 0.01% of what is left in the pool, in order.
//!
//! Only pairs with an EOS leg are mined; everything else projects to zero.

pub mod engine;

pub use engine::{RewardEngine, allocation_units, base_leg};
