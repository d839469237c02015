//! Pair registry: canonical pair keys over a [`PairStore`].
//!
//! Lookups never create a record. Registration overwrites, with no merge
//! of the previous reserves or accrued fees.

use ammswap_types::{AmmError, AssetId, ReserveRecord, Result, TradingPair};

use crate::store::PairStore;

/// Canonicalizes pairs and reads/writes their reserve records.
pub struct PairRegistry<S> {
    store: S,
}

impl<S: PairStore> PairRegistry<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Canonical pair for `(x, y)`; same result for `(y, x)`.
    ///
    /// # Errors
    /// Returns [`AmmError::SamePair`] if `x == y`.
    pub fn canonicalize(x: &AssetId, y: &AssetId) -> Result<TradingPair> {
        TradingPair::new(x.clone(), y.clone())
    }

    /// Stored record for `pair`.
    ///
    /// # Errors
    /// Returns [`AmmError::UnsupportedPair`] if the pair is not registered.
    pub fn lookup(&self, pair: &TradingPair) -> Result<ReserveRecord> {
        self.store.get(pair)?.ok_or(AmmError::UnsupportedPair)
    }

    /// Store `record` for `pair`, replacing whatever was there.
    pub fn upsert(&self, pair: &TradingPair, record: ReserveRecord) -> Result<()> {
        self.store.put(pair, record)
    }

    /// Commit `new` for `pair` if the stored record is still `expected`.
    pub fn commit(
        &self,
        pair: &TradingPair,
        expected: &ReserveRecord,
        new: ReserveRecord,
    ) -> Result<bool> {
        self.store.compare_and_swap(pair, expected, new)
    }

    /// All registered pairs, in canonical order.
    pub fn pairs(&self) -> Result<Vec<TradingPair>> {
        self.store.pairs()
    }

    /// Access the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPairStore;

    fn asset(s: &str) -> AssetId {
        AssetId::from(s)
    }

    #[test]
    fn canonicalize_symmetric() {
        let xy = PairRegistry::<MemoryPairStore>::canonicalize(&asset("X"), &asset("Y")).unwrap();
        let yx = PairRegistry::<MemoryPairStore>::canonicalize(&asset("Y"), &asset("X")).unwrap();
        assert_eq!(xy, yx);
    }

    #[test]
    fn canonicalize_same_asset_fails() {
        let err =
            PairRegistry::<MemoryPairStore>::canonicalize(&asset("X"), &asset("X")).unwrap_err();
        assert_eq!(err, AmmError::SamePair);
    }

    #[test]
    fn lookup_unregistered_is_unsupported() {
        let registry = PairRegistry::new(MemoryPairStore::new());
        let pair = TradingPair::new(asset("X"), asset("Y")).unwrap();
        assert_eq!(registry.lookup(&pair), Err(AmmError::UnsupportedPair));
        assert!(registry.store().is_empty(), "lookup must not create a record");
    }

    #[test]
    fn upsert_then_lookup_either_order() {
        let registry = PairRegistry::new(MemoryPairStore::new());
        let pair = TradingPair::new(asset("Y"), asset("X")).unwrap();
        registry.upsert(&pair, ReserveRecord::new(5, 7)).unwrap();

        let same = TradingPair::new(asset("X"), asset("Y")).unwrap();
        assert_eq!(registry.lookup(&same).unwrap(), ReserveRecord::new(5, 7));
    }

    #[test]
    fn upsert_replaces_accrued_fees() {
        let registry = PairRegistry::new(MemoryPairStore::new());
        let pair = TradingPair::new(asset("X"), asset("Y")).unwrap();
        registry
            .upsert(
                &pair,
                ReserveRecord {
                    reserve_first: 10,
                    reserve_second: 10,
                    total_fees_accrued: 4,
                },
            )
            .unwrap();
        registry.upsert(&pair, ReserveRecord::new(20, 30)).unwrap();
        assert_eq!(registry.lookup(&pair).unwrap().total_fees_accrued, 0);
    }
}
