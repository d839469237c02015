//! Settlement receipts for the AmmSwap audit trail.
//!
//! Every committed swap produces a [`SwapReceipt`]. The digest covers the
//! deterministic fields only (not `settled_at`), so two replicas that settle
//! the same request against the same reserves produce the same digest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::RECEIPT_DIGEST_DOMAIN;
use crate::{CallerId, FeeBps, ReserveRecord, SwapDirection, SwapOutcome, TradingPair};

/// Proof that a swap was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReceipt {
    pub pair: TradingPair,
    pub caller: CallerId,
    pub direction: SwapDirection,
    pub amount_in: u128,
    pub amount_out: u128,
    pub fee: u128,
    pub fee_bps: FeeBps,
    /// Reserve record as committed.
    pub reserves_after: ReserveRecord,
    /// SHA-256 over the fields above.
    pub digest: [u8; 32],
    pub settled_at: DateTime<Utc>,
}

impl SwapReceipt {
    #[must_use]
    pub fn new(
        pair: TradingPair,
        caller: CallerId,
        direction: SwapDirection,
        amount_in: u128,
        outcome: SwapOutcome,
        fee_bps: FeeBps,
        reserves_after: ReserveRecord,
    ) -> Self {
        let mut receipt = Self {
            pair,
            caller,
            direction,
            amount_in,
            amount_out: outcome.amount_out,
            fee: outcome.fee,
            fee_bps,
            reserves_after,
            digest: [0u8; 32],
            settled_at: Utc::now(),
        };
        receipt.digest = receipt.compute_digest();
        receipt
    }

    fn compute_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(RECEIPT_DIGEST_DOMAIN);
        for asset in [self.pair.first(), self.pair.second()] {
            hasher.update((asset.as_str().len() as u64).to_le_bytes());
            hasher.update(asset.as_str().as_bytes());
        }
        hasher.update(self.caller.as_bytes());
        hasher.update([u8::from(self.direction.is_forward())]);
        hasher.update(self.amount_in.to_le_bytes());
        hasher.update(self.amount_out.to_le_bytes());
        hasher.update(self.fee.to_le_bytes());
        hasher.update(self.fee_bps.get().to_le_bytes());
        hasher.update(self.reserves_after.reserve_first.to_le_bytes());
        hasher.update(self.reserves_after.reserve_second.to_le_bytes());
        hasher.update(self.reserves_after.total_fees_accrued.to_le_bytes());
        hasher.finalize().into()
    }

    /// Whether `digest` still matches the receipt's contents.
    #[must_use]
    pub fn verify_digest(&self) -> bool {
        self.digest == self.compute_digest()
    }

    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    #[must_use]
    pub fn outcome(&self) -> SwapOutcome {
        SwapOutcome {
            amount_out: self.amount_out,
            fee: self.fee,
        }
    }
}
