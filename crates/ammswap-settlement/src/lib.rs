//! # ammswap-settlement
//!
//! **Settlement plane**: pair registry, admin gate, swap settlement and
//! atomic reserve commits.
//!
//! ## Architecture
//!
//! A swap flows through:
//! 1. [`AdminRegistry`] resolves a [`SwapContext`](ammswap_types::SwapContext)
//!    snapshot (pause flag + fee rate) for the caller
//! 2. [`PairRegistry`] canonicalizes the pair and loads its reserve record
//! 3. [`settle`] prices the swap on the curve, checks slippage and derives
//!    the new record (pure, no I/O)
//! 4. [`SwapEngine`] commits the new record with compare-and-swap, retrying
//!    from a fresh read if another swap committed first
//!
//! ## Atomicity
//!
//! Nothing is written until every check passes, and the commit is a single
//! record replace. A rejected swap leaves the store untouched.

pub mod admin;
pub mod engine;
pub mod registry;
pub mod settle;
pub mod store;

pub use admin::{AdminRegistry, PauseSwitch};
pub use engine::SwapEngine;
pub use registry::PairRegistry;
pub use settle::{Settlement, admit, settle};
pub use store::{MemoryPairStore, PairStore};
