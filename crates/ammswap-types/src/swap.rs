//! Swap request, context snapshot, and outcome types.

use serde::{Deserialize, Serialize};

use crate::{AssetId, CallerId, FeeBps};

/// A caller's request to swap `amount_in` of `asset_in` for `asset_out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Who is swapping. Only used to resolve the fee rate.
    pub caller: CallerId,
    /// Asset paid into the pool.
    pub asset_in: AssetId,
    /// Asset taken out of the pool.
    pub asset_out: AssetId,
    /// Exact input amount.
    pub amount_in: u128,
    /// Smallest acceptable output (slippage floor).
    pub min_amount_out: u128,
}

impl SwapRequest {
    #[must_use]
    pub fn new(
        caller: CallerId,
        asset_in: impl Into<AssetId>,
        asset_out: impl Into<AssetId>,
        amount_in: u128,
        min_amount_out: u128,
    ) -> Self {
        Self {
            caller,
            asset_in: asset_in.into(),
            asset_out: asset_out.into(),
            amount_in,
            min_amount_out,
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl SwapRequest {
    /// A request from a fresh caller with no slippage floor.
    #[must_use]
    pub fn dummy(asset_in: &str, asset_out: &str, amount_in: u128) -> Self {
        Self::new(CallerId::new(), asset_in, asset_out, amount_in, 0)
    }
}

/// Configuration snapshot consulted by settlement.
///
/// Resolved once per call from the pause flag and the admin-fee table, so
/// settlement never reads global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapContext {
    /// Process-wide pause flag at the time of the call.
    pub paused: bool,
    /// Fee rate resolved for this caller.
    pub fee_bps: FeeBps,
}

impl SwapContext {
    /// An unpaused context charging `fee_bps`.
    #[must_use]
    pub fn open(fee_bps: FeeBps) -> Self {
        Self {
            paused: false,
            fee_bps,
        }
    }
}

/// Result of a committed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// Amount of `asset_out` delivered.
    pub amount_out: u128,
    /// Fee accrued to the pool, in `asset_in` units.
    pub fee: u128,
}
