//! Identifiers used throughout AmmSwap.
//!
//! Asset identifiers are opaque strings (token contract addresses, tickers,
//! principals). Nothing is derived from them beyond identity and ordering.
//! Caller identities use UUIDv7.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// Opaque, totally-ordered asset identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// CallerId
// ---------------------------------------------------------------------------

/// Tamper-proof identity of the invoking party, supplied by the host per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CallerId(pub Uuid);

impl CallerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for CallerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "caller:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_id_uniqueness() {
        let a = CallerId::new();
        let b = CallerId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn asset_id_ordering_is_lexicographic() {
        assert!(AssetId::from("ABC") < AssetId::from("ABD"));
        assert!(AssetId::from("SP2") > AssetId::from("SP1ZZ"));
    }

    #[test]
    fn asset_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&AssetId::from("USDC")).unwrap();
        assert_eq!(json, "\"USDC\"");
    }

    #[test]
    fn caller_id_display_prefix() {
        let id = CallerId::from_bytes([7u8; 16]);
        assert!(id.to_string().starts_with("caller:"));
    }
}
