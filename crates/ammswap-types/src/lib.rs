//! # ammswap-types
//!
//! Shared types, errors, and configuration for the **AmmSwap** settlement engine.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AssetId`], [`CallerId`]
//! - **Pair model**: [`TradingPair`], [`SwapDirection`]
//! - **Reserve model**: [`ReserveRecord`]
//! - **Fees**: [`FeeBps`]
//! - **Swap model**: [`SwapRequest`], [`SwapContext`], [`SwapOutcome`], [`SwapReceipt`]
//! - **Configuration**: [`EngineConfig`], [`PairConfig`]
//! - **Errors**: [`AmmError`] with `AMM_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod fee;
pub mod ids;
pub mod pair;
pub mod receipt;
pub mod reserve;
pub mod swap;

// Re-export all primary types at crate root for ergonomic imports:
//   use ammswap_types::{TradingPair, ReserveRecord, FeeBps, ...};

pub use config::*;
pub use error::*;
pub use fee::*;
pub use ids::*;
pub use pair::*;
pub use receipt::*;
pub use reserve::*;
pub use swap::*;

// Constants are accessed via `ammswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
