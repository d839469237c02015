//! Constant-product (`x * y = k`) swap output.
//!
//! The fee is deducted from the input before the curve is applied:
//!
//! ```text
//! amount_after_fee = floor(amount_in * (10_000 - fee_bps) / 10_000)
//! amount_out       = floor(amount_after_fee * reserve_out / (reserve_in + amount_after_fee))
//! ```
//!
//! Because `reserve_in > 0`, `amount_out < reserve_out` for every input, so
//! subtracting it never drains the out-reserve.

use ammswap_types::constants::BPS_DENOMINATOR;
use ammswap_types::{AmmError, FeeBps, Result};

/// Input remaining after the fee is taken, truncated.
///
/// # Errors
/// Returns [`AmmError::ArithmeticOverflow`] if `amount_in * (10_000 - fee)`
/// does not fit in `u128`.
pub fn amount_after_fee(amount_in: u128, fee_bps: FeeBps) -> Result<u128> {
    amount_in
        .checked_mul(u128::from(fee_bps.retained()))
        .map(|scaled| scaled / u128::from(BPS_DENOMINATOR))
        .ok_or(AmmError::ArithmeticOverflow)
}

/// Output of swapping `amount_in` against `(reserve_in, reserve_out)`.
///
/// # Errors
/// - [`AmmError::InsufficientLiquidity`] if `amount_in`, `reserve_in` or
///   `reserve_out` is zero
/// - [`AmmError::ArithmeticOverflow`] if an intermediate does not fit in `u128`
pub fn quote(amount_in: u128, reserve_in: u128, reserve_out: u128, fee_bps: FeeBps) -> Result<u128> {
    if amount_in == 0 || reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let after_fee = amount_after_fee(amount_in, fee_bps)?;
    let numerator = after_fee
        .checked_mul(reserve_out)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let denominator = reserve_in
        .checked_add(after_fee)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let amount_out = numerator / denominator;

    tracing::trace!(
        amount_in,
        reserve_in,
        reserve_out,
        fee_bps = fee_bps.get(),
        after_fee,
        amount_out,
        "Quoted constant-product swap"
    );

    Ok(amount_out)
}
