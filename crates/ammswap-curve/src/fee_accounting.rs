//! Fee accrued by a swap.
//!
//! The fee is not measured directly. It is recovered by inverting the
//! after-fee computation:
//!
//! ```text
//! fee = amount_in - floor(amount_after_fee * 10_000 / (10_000 - fee_bps))
//! ```
//!
//! Both steps truncate, so the figure is the rounding residue of the
//! round-trip rather than `amount_in * fee_bps / 10_000`. Ledgers that
//! already hold values produced this way must stay comparable, so the
//! formula is kept as is. A negative result is clamped to zero.

use ammswap_types::constants::BPS_DENOMINATOR;
use ammswap_types::{AmmError, FeeBps, Result};

use crate::constant_product::amount_after_fee;

/// Fee to accrue for a swap of `amount_in` at `fee_bps`.
///
/// # Errors
/// Returns [`AmmError::ArithmeticOverflow`] if `amount_in * (10_000 - fee)`
/// does not fit in `u128`.
pub fn fee_collected(amount_in: u128, fee_bps: FeeBps) -> Result<u128> {
    let after_fee = amount_after_fee(amount_in, fee_bps)?;
    let restored = after_fee
        .checked_mul(u128::from(BPS_DENOMINATOR))
        .ok_or(AmmError::ArithmeticOverflow)?
        / u128::from(fee_bps.retained());
    Ok(amount_in.saturating_sub(restored))
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn bps(n: u32) -> FeeBps {
        FeeBps::new(n).unwrap()
    }

    #[test]
    fn exact_round_trip_accrues_nothing() {
        // 10_000 -> 9_970 -> 10_000
        assert_eq!(fee_collected(10_000, bps(30)).unwrap(), 0);
        // 1_000 -> 500 -> 1_000
        assert_eq!(fee_collected(1_000, bps(5_000)).unwrap(), 0);
    }

    #[test]
    fn truncation_residue_is_accrued() {
        // 100 -> 99 -> floor(990_000 / 9_970) = 99
        assert_eq!(fee_collected(100, bps(30)).unwrap(), 1);
        // 1_234 -> 1_230 -> floor(12_300_000 / 9_970) = 1_233
        assert_eq!(fee_collected(1_234, bps(30)).unwrap(), 1);
        // 3 -> 2 -> floor(20_000 / 6_667) = 2
        assert_eq!(fee_collected(3, bps(3_333)).unwrap(), 1);
    }

    #[test]
    fn dust_input_is_all_fee() {
        assert_eq!(fee_collected(1, bps(30)).unwrap(), 1);
    }

    #[test]
    fn zero_fee_rate_accrues_nothing() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let amount = rng.gen_range(1..=u128::from(u64::MAX));
            assert_eq!(fee_collected(amount, FeeBps::ZERO).unwrap(), 0);
        }
    }

    #[test]
    fn residue_is_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let amount = rng.gen_range(1..=1_000_000_000_000u128);
            let fee = bps(rng.gen_range(0..10_000));
            let collected = fee_collected(amount, fee).unwrap();
            assert!(collected <= amount);
            assert!(
                collected <= u128::from(BPS_DENOMINATOR / fee.retained()) + 1,
                "residue {collected} too large for {amount} at {fee}"
            );
        }
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            fee_collected(u128::MAX, bps(30)),
            Err(AmmError::ArithmeticOverflow)
        );
    }
}
