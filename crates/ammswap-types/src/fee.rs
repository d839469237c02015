//! Fee rates in basis points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BPS_DENOMINATOR, DEFAULT_FEE_BPS};
use crate::{AmmError, Result};

/// A fee rate in basis points, always in `0..10_000`.
///
/// A rate of 10 000 bps or more would leave nothing to trade after the fee,
/// so it is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FeeBps(u32);

impl FeeBps {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// The protocol default (30 bps).
    pub const DEFAULT: Self = Self(DEFAULT_FEE_BPS);

    /// # Errors
    /// Returns [`AmmError::InvalidFeeRate`] if `bps >= 10_000`.
    pub fn new(bps: u32) -> Result<Self> {
        if bps >= BPS_DENOMINATOR {
            return Err(AmmError::InvalidFeeRate(bps));
        }
        Ok(Self(bps))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Share of the input that survives the fee, in bps (`10_000 - fee`).
    /// Always positive.
    #[must_use]
    pub const fn retained(self) -> u32 {
        BPS_DENOMINATOR - self.0
    }
}

impl Default for FeeBps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for FeeBps {
    type Error = AmmError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::new(bps)
    }
}

impl From<FeeBps> for u32 {
    fn from(fee: FeeBps) -> Self {
        fee.0
    }
}

impl fmt::Display for FeeBps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bps", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_below_denominator() {
        assert_eq!(FeeBps::new(0).unwrap(), FeeBps::ZERO);
        assert_eq!(FeeBps::new(9_999).unwrap().retained(), 1);
    }

    #[test]
    fn rejects_full_fee() {
        assert_eq!(FeeBps::new(10_000), Err(AmmError::InvalidFeeRate(10_000)));
        assert!(FeeBps::new(u32::MAX).is_err());
    }

    #[test]
    fn default_is_thirty_bps() {
        assert_eq!(FeeBps::default().get(), 30);
        assert_eq!(FeeBps::default().retained(), 9_970);
    }

    #[test]
    fn serde_validates_range() {
        let fee: FeeBps = serde_json::from_str("25").unwrap();
        assert_eq!(fee.get(), 25);
        assert!(serde_json::from_str::<FeeBps>("10000").is_err());
    }
}
