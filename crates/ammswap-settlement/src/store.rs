//! Reserve record storage.
//!
//! [`PairStore`] is the persistence boundary. Implementations must make a
//! committed record durable before returning and must never expose a
//! partially written record. Settlement only ever commits through
//! [`PairStore::compare_and_swap`], so a store that honours it gives every
//! swap a consistent snapshot of its pair.

use std::collections::HashMap;

use ammswap_types::{ReserveRecord, Result, TradingPair};
use parking_lot::RwLock;

/// Keyed storage for reserve records, one per canonical pair.
pub trait PairStore: Send + Sync {
    /// Current record for `pair`, if registered.
    fn get(&self, pair: &TradingPair) -> Result<Option<ReserveRecord>>;

    /// Unconditionally store `record` for `pair`, replacing any existing one.
    fn put(&self, pair: &TradingPair, record: ReserveRecord) -> Result<()>;

    /// Replace the record for `pair` with `new` only if it currently equals
    /// `expected`. Returns whether the replace happened.
    fn compare_and_swap(
        &self,
        pair: &TradingPair,
        expected: &ReserveRecord,
        new: ReserveRecord,
    ) -> Result<bool>;

    /// All registered pairs, in canonical order.
    fn pairs(&self) -> Result<Vec<TradingPair>>;
}

/// In-memory [`PairStore`] backed by a `HashMap` behind a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryPairStore {
    records: RwLock<HashMap<TradingPair, ReserveRecord>>,
}

impl MemoryPairStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl PairStore for MemoryPairStore {
    fn get(&self, pair: &TradingPair) -> Result<Option<ReserveRecord>> {
        Ok(self.records.read().get(pair).copied())
    }

    fn put(&self, pair: &TradingPair, record: ReserveRecord) -> Result<()> {
        self.records.write().insert(pair.clone(), record);
        Ok(())
    }

    fn compare_and_swap(
        &self,
        pair: &TradingPair,
        expected: &ReserveRecord,
        new: ReserveRecord,
    ) -> Result<bool> {
        let mut records = self.records.write();
        match records.get_mut(pair) {
            Some(current) if current == expected => {
                *current = new;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn pairs(&self) -> Result<Vec<TradingPair>> {
        let mut pairs: Vec<TradingPair> = self.records.read().keys().cloned().collect();
        pairs.sort();
        Ok(pairs)
    }
}
