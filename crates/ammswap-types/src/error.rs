//! Error types for the AmmSwap settlement engine.
//!
//! All errors use the `AMM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Pair / registry errors
//! - 2xx: Pricing errors
//! - 3xx: Settlement errors
//! - 4xx: Admin errors
//! - 9xx: General / internal errors
//!
//! No variant carries more than the caller needs to resubmit: a rejected
//! swap never mutates state, so there is nothing to roll back.

use thiserror::Error;

/// Central error enum for all AmmSwap operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    // =================================================================
    // Pair / Registry Errors (1xx)
    // =================================================================
    /// Both sides of the requested pair are the same asset.
    #[error("AMM_ERR_100: Pair assets must be distinct")]
    SamePair,

    /// No reserve record exists for the canonical pair.
    #[error("AMM_ERR_101: Unsupported pair")]
    UnsupportedPair,

    // =================================================================
    // Pricing Errors (2xx)
    // =================================================================
    /// A reserve or the input amount is zero at quote time.
    #[error("AMM_ERR_200: Insufficient liquidity")]
    InsufficientLiquidity,

    /// Fee rate at or above 10 000 bps.
    #[error("AMM_ERR_201: Invalid fee rate: {0} bps")]
    InvalidFeeRate(u32),

    /// An intermediate product or reserve sum does not fit in `u128`.
    #[error("AMM_ERR_202: Arithmetic overflow")]
    ArithmeticOverflow,

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// Quoted output is below the caller's minimum.
    #[error("AMM_ERR_300: Slippage exceeded")]
    SlippageExceeded,

    /// Input amount of zero.
    #[error("AMM_ERR_301: Zero amount")]
    ZeroAmount,

    /// Swaps are halted by the pause flag.
    #[error("AMM_ERR_302: Swaps are paused")]
    Paused,

    /// The commit lost the compare-and-swap race too many times.
    #[error("AMM_ERR_303: Store contention: gave up after {attempts} attempts")]
    StoreContention { attempts: u32 },

    // =================================================================
    // Admin Errors (4xx)
    // =================================================================
    /// The identity already holds admin rights.
    #[error("AMM_ERR_400: Already initialized")]
    AlreadyInitialized,

    /// Privileged operation attempted by a non-admin caller.
    #[error("AMM_ERR_401: Caller is not an admin")]
    NotAdmin,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("AMM_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("AMM_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, AmmError>;

impl From<serde_json::Error> for AmmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let msg = format!("{}", AmmError::SamePair);
        assert!(msg.starts_with("AMM_ERR_100"), "Got: {msg}");
    }

    #[test]
    fn invalid_fee_rate_display() {
        let msg = format!("{}", AmmError::InvalidFeeRate(10_000));
        assert!(msg.contains("AMM_ERR_201"));
        assert!(msg.contains("10000"));
    }

    #[test]
    fn store_contention_display() {
        let msg = format!("{}", AmmError::StoreContention { attempts: 16 });
        assert!(msg.contains("AMM_ERR_303"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn all_errors_have_amm_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(AmmError::UnsupportedPair),
            Box::new(AmmError::InsufficientLiquidity),
            Box::new(AmmError::SlippageExceeded),
            Box::new(AmmError::ZeroAmount),
            Box::new(AmmError::Paused),
            Box::new(AmmError::AlreadyInitialized),
            Box::new(AmmError::NotAdmin),
            Box::new(AmmError::Configuration("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("AMM_ERR_"),
                "Error missing AMM_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn json_error_converts_to_serialization() {
        let err: AmmError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, AmmError::Serialization(_)));
    }
}
