//! Canonical trading pairs.
//!
//! `(A, B)` and `(B, A)` map to the same [`TradingPair`]: the smaller
//! identifier always occupies the `first` slot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AmmError, AssetId, Result};

/// An unordered pair of two distinct assets, stored in canonical order.
///
/// Construct only through [`TradingPair::new`], which guarantees
/// `first < second`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "(AssetId, AssetId)", into = "(AssetId, AssetId)")]
pub struct TradingPair {
    first: AssetId,
    second: AssetId,
}

impl TradingPair {
    /// Canonicalize `(x, y)` into a pair. Symmetric in its arguments.
    ///
    /// # Errors
    /// Returns [`AmmError::SamePair`] if `x == y`.
    pub fn new(x: AssetId, y: AssetId) -> Result<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Equal => Err(AmmError::SamePair),
            std::cmp::Ordering::Less => Ok(Self {
                first: x,
                second: y,
            }),
            std::cmp::Ordering::Greater => Ok(Self {
                first: y,
                second: x,
            }),
        }
    }

    /// The smaller asset.
    #[must_use]
    pub fn first(&self) -> &AssetId {
        &self.first
    }

    /// The larger asset.
    #[must_use]
    pub fn second(&self) -> &AssetId {
        &self.second
    }

    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.first == *asset || self.second == *asset
    }

    /// Direction of a swap that pays in `asset_in`.
    ///
    /// Anything that is not the first slot is treated as reversed; callers
    /// obtain the pair from the same two assets, so that is always `second`.
    #[must_use]
    pub fn direction_of(&self, asset_in: &AssetId) -> SwapDirection {
        if *asset_in == self.first {
            SwapDirection::FirstToSecond
        } else {
            SwapDirection::SecondToFirst
        }
    }
}

impl TryFrom<(AssetId, AssetId)> for TradingPair {
    type Error = AmmError;

    fn try_from((x, y): (AssetId, AssetId)) -> Result<Self> {
        Self::new(x, y)
    }
}

impl From<TradingPair> for (AssetId, AssetId) {
    fn from(pair: TradingPair) -> Self {
        (pair.first, pair.second)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}

/// Which reserve a swap pays into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Pays in the first asset, receives the second.
    FirstToSecond,
    /// Pays in the second asset, receives the first.
    SecondToFirst,
}

impl SwapDirection {
    #[must_use]
    pub fn is_forward(self) -> bool {
        matches!(self, Self::FirstToSecond)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstToSecond => write!(f, "FIRST_TO_SECOND"),
            Self::SecondToFirst => write!(f, "SECOND_TO_FIRST"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(s: &str) -> AssetId {
        AssetId::from(s)
    }

    #[test]
    fn canonicalize_is_symmetric() {
        let ab = TradingPair::new(asset("X"), asset("Y")).unwrap();
        let ba = TradingPair::new(asset("Y"), asset("X")).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.first(), &asset("X"));
        assert_eq!(ab.second(), &asset("Y"));
    }

    #[test]
    fn same_asset_rejected() {
        let err = TradingPair::new(asset("X"), asset("X")).unwrap_err();
        assert_eq!(err, AmmError::SamePair);
    }

    #[test]
    fn direction_follows_first_slot() {
        let pair = TradingPair::new(asset("B"), asset("A")).unwrap();
        assert_eq!(pair.direction_of(&asset("A")), SwapDirection::FirstToSecond);
        assert_eq!(pair.direction_of(&asset("B")), SwapDirection::SecondToFirst);
    }

    #[test]
    fn random_pairs_canonicalize_symmetrically() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let x = format!("T{}", rng.gen_range(0..50u32));
            let y = format!("T{}", rng.gen_range(0..50u32));
            let xy = TradingPair::new(asset(&x), asset(&y));
            let yx = TradingPair::new(asset(&y), asset(&x));
            if x == y {
                assert_eq!(xy, Err(AmmError::SamePair));
                assert_eq!(yx, Err(AmmError::SamePair));
            } else {
                let pair = xy.unwrap();
                assert_eq!(pair, yx.unwrap());
                assert!(pair.first() < pair.second());
            }
        }
    }

    #[test]
    fn deserialize_recanonicalizes() {
        let pair: TradingPair = serde_json::from_str(r#"["Y","X"]"#).unwrap();
        assert_eq!(pair.first(), &asset("X"));
        assert!(serde_json::from_str::<TradingPair>(r#"["X","X"]"#).is_err());
    }

    #[test]
    fn display_uses_canonical_order() {
        let pair = TradingPair::new(asset("USDC"), asset("STX")).unwrap();
        assert_eq!(pair.to_string(), "STX/USDC");
    }
}
