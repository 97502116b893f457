//! Protocol constants. Reward amounts are in HBG minor units (1 HBG = 10^6 units).

/// Account owning the `pairs` and `config` tables.
pub const SWAP_CONTRACT: &str = "hamburgerswp";

/// Account owning the `pools` table.
pub const MINE_CONTRACT: &str = "hbgtrademine";

/// Only trades with one leg in this currency earn mining rewards.
pub const BASE_SYMBOL_CODE: &str = "EOS";

/// Currency paid out by trade mining.
pub const REWARD_SYMBOL_CODE: &str = "HBG";

/// Decimal precision of [`REWARD_SYMBOL_CODE`].
pub const REWARD_PRECISION: u8 = 6;

/// Multiplier from whole HBG to minor units.
pub const REWARD_SCALE: f64 = 1_000_000.0;

/// Whole HBG emitted per second per unit of pool weight.
pub const EMISSION_RATE_PER_SEC: f64 = 0.005;

/// Size of one allocation unit, in base-currency minor units (1.0000 EOS).
pub const TRADE_UNIT: i64 = 10_000;

/// Each allocation unit mines `total / MINE_DIVISOR` (0.01%) of the pool.
pub const MINE_DIVISOR: u64 = 10_000;

/// Hard ceiling on allocation iterations.
///
/// Once the running pool total drops below [`MINE_DIVISOR`] every further unit
/// mines zero, and from `u64::MAX` that takes at most ~443,600 units
/// (`MINE_DIVISOR * ln(u64::MAX)`). The cap therefore never alters a result;
/// it only bounds the work done per call.
pub const MAX_ALLOCATION_STEPS: u64 = 500_000;

/// Largest representable asset amount, `2^62 - 1`.
pub const MAX_ASSET_AMOUNT: i64 = (1 << 62) - 1;

/// Largest supported symbol precision.
pub const MAX_PRECISION: u8 = 18;

/// Longest symbol code.
pub const MAX_SYMBOL_CODE_LEN: usize = 7;

/// Longest account name.
pub const MAX_NAME_LEN: usize = 12;

// Config singleton defaults, used when the table has never been written.
pub const DEFAULT_CONTRACT_STATUS: u8 = 1;
pub const DEFAULT_MINE_STATUS: u8 = 1;
pub const DEFAULT_TRADE_FEE: u8 = 20;
pub const DEFAULT_PROTOCOL_FEE: u8 = 10;
