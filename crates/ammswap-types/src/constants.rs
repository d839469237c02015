//! System-wide constants for the AmmSwap settlement engine.

/// Basis-point denominator (10 000 bps = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Protocol default fee rate applied to callers without an admin fee (0.30%).
pub const DEFAULT_FEE_BPS: u32 = 30;

/// Default number of compare-and-swap attempts before a swap gives up.
pub const DEFAULT_MAX_COMMIT_RETRIES: u32 = 16;

/// Domain separator mixed into every receipt digest.
pub const RECEIPT_DIGEST_DOMAIN: &[u8] = b"ammswap:swap_receipt:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "AmmSwap";
