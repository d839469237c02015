//! Reserve records attached to each canonical pair.
//!
//! Both reserves are strictly positive for any pair that exists, and
//! `total_fees_accrued` never decreases.

use serde::{Deserialize, Serialize};

use crate::SwapDirection;

/// Reserves held against one canonical [`TradingPair`](crate::TradingPair).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReserveRecord {
    /// Reserve of the pair's first (smaller) asset.
    pub reserve_first: u128,
    /// Reserve of the pair's second (larger) asset.
    pub reserve_second: u128,
    /// Lifetime fees taken from swap inputs, in input-asset units.
    pub total_fees_accrued: u128,
}

impl ReserveRecord {
    /// A freshly registered pool with no fees accrued.
    #[must_use]
    pub fn new(reserve_first: u128, reserve_second: u128) -> Self {
        Self {
            reserve_first,
            reserve_second,
            total_fees_accrued: 0,
        }
    }

    /// `(reserve_in, reserve_out)` for a swap in `direction`.
    #[must_use]
    pub fn oriented(&self, direction: SwapDirection) -> (u128, u128) {
        match direction {
            SwapDirection::FirstToSecond => (self.reserve_first, self.reserve_second),
            SwapDirection::SecondToFirst => (self.reserve_second, self.reserve_first),
        }
    }

    /// Whether both reserves are strictly positive.
    #[must_use]
    pub fn is_liquid(&self) -> bool {
        self.reserve_first > 0 && self.reserve_second > 0
    }

    /// The constant-product invariant `k = reserve_first * reserve_second`,
    /// or `None` if it does not fit in `u128`.
    #[must_use]
    pub fn invariant(&self) -> Option<u128> {
        self.reserve_first.checked_mul(self.reserve_second)
    }
}
