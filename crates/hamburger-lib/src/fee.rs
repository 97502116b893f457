//! Swap fee lookup.

use hamburger_core::traits::StateReader;
use tracing::debug;

/// Total swap fee in basis points: `trade_fee + protocol_fee`.
///
/// Reads the config singleton, falling back to the defaults (20 + 10) when it
/// has never been written. The sum wraps at `u8` like the stored rates do.
pub fn get_fee<S: StateReader + ?Sized>(state: &S) -> u8 {
    let config = state.get_config_or_default();
    let fee = config.trade_fee.wrapping_add(config.protocol_fee);
    debug!(trade_fee = config.trade_fee, protocol_fee = config.protocol_fee, fee, "total fee");
    fee
}
