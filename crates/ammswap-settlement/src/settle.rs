//! Pure swap settlement.
//!
//! [`settle`] is a function of `(request, reserve record, context)` only:
//! it reads no store, no pause flag and no admin table, and it writes
//! nothing. The caller commits [`Settlement::after`] atomically.
//!
//! Checks run in order, each short-circuiting:
//! 1. `amount_in == 0` → `ZeroAmount`
//! 2. paused → `Paused`
//! 3. assets not distinct → `UnsupportedPair`
//! 4. quote on the curve (`InsufficientLiquidity`, `ArithmeticOverflow`)
//! 5. output below `min_amount_out` → `SlippageExceeded`

use ammswap_curve::{fee_collected, quote};
use ammswap_types::{
    AmmError, FeeBps, ReserveRecord, Result, SwapContext, SwapDirection, SwapOutcome, SwapRequest,
    TradingPair,
};

/// A priced, validated swap ready to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub pair: TradingPair,
    pub direction: SwapDirection,
    pub fee_bps: FeeBps,
    pub outcome: SwapOutcome,
    /// Record the swap was priced against.
    pub before: ReserveRecord,
    /// Record to commit.
    pub after: ReserveRecord,
}

/// Checks that need neither the pair nor its reserves.
///
/// Runs before any store access. A zero amount is reported even while
/// swaps are paused.
///
/// # Errors
/// [`AmmError::ZeroAmount`] or [`AmmError::Paused`].
pub fn admit(request: &SwapRequest, ctx: &SwapContext) -> Result<()> {
    if request.amount_in == 0 {
        return Err(AmmError::ZeroAmount);
    }
    if ctx.paused {
        return Err(AmmError::Paused);
    }
    Ok(())
}

/// Price `request` against `record` and derive the record to commit.
///
/// `record` must be the stored record of the canonical pair of
/// `(request.asset_in, request.asset_out)`.
///
/// # Errors
/// Any of the rejections listed in the module docs. On error nothing has
/// been computed that needs undoing.
pub fn settle(request: &SwapRequest, record: &ReserveRecord, ctx: &SwapContext) -> Result<Settlement> {
    admit(request, ctx)?;

    let pair = TradingPair::new(request.asset_in.clone(), request.asset_out.clone())
        .map_err(|_| AmmError::UnsupportedPair)?;
    let direction = pair.direction_of(&request.asset_in);
    let (reserve_in, reserve_out) = record.oriented(direction);

    let amount_out = quote(request.amount_in, reserve_in, reserve_out, ctx.fee_bps)?;
    if amount_out < request.min_amount_out {
        return Err(AmmError::SlippageExceeded);
    }
    let fee = fee_collected(request.amount_in, ctx.fee_bps)?;

    let new_in = reserve_in
        .checked_add(request.amount_in)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let new_out = reserve_out
        .checked_sub(amount_out)
        .ok_or(AmmError::InsufficientLiquidity)?;
    let total_fees_accrued = record
        .total_fees_accrued
        .checked_add(fee)
        .ok_or(AmmError::ArithmeticOverflow)?;

    let (reserve_first, reserve_second) = match direction {
        SwapDirection::FirstToSecond => (new_in, new_out),
        SwapDirection::SecondToFirst => (new_out, new_in),
    };

    Ok(Settlement {
        pair,
        direction,
        fee_bps: ctx.fee_bps,
        outcome: SwapOutcome { amount_out, fee },
        before: *record,
        after: ReserveRecord {
            reserve_first,
            reserve_second,
            total_fees_accrued,
        },
    })
}
