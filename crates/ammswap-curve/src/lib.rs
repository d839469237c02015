//! # ammswap-curve
//!
//! **Pure constant-product pricing for AmmSwap.**
//!
//! The curve is the compute plane: given an input amount, the two reserves
//! and a fee rate, it returns the output. It has:
//!
//! - **Zero side effects**: no store access, no admin lookups, no clocks
//! - **Integer-only arithmetic**: truncating division at each step, bit-exact
//!   with on-chain settlement
//! - **Checked math**: overflow is an error, never a wrap

pub mod constant_product;
pub mod fee_accounting;

pub use constant_product::{amount_after_fee, quote};
pub use fee_accounting::fee_collected;
