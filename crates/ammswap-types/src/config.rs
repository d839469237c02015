//! Configuration types for an AmmSwap engine.

use serde::{Deserialize, Serialize};

use crate::{AmmError, AssetId, CallerId, FeeBps, Result, constants};

/// Configuration for a single engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Fee rate charged to callers without an admin fee.
    #[serde(default)]
    pub default_fee_bps: FeeBps,
    /// Compare-and-swap attempts per swap before reporting contention.
    #[serde(default = "default_max_commit_retries")]
    pub max_commit_retries: u32,
    /// Identity granted admin rights at startup.
    #[serde(default)]
    pub genesis_admin: Option<CallerId>,
    /// Custom fee rate for the genesis admin.
    #[serde(default)]
    pub genesis_admin_fee_bps: Option<FeeBps>,
    /// Pools registered at startup.
    #[serde(default)]
    pub pairs: Vec<PairConfig>,
}

fn default_max_commit_retries() -> u32 {
    constants::DEFAULT_MAX_COMMIT_RETRIES
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_fee_bps: FeeBps::DEFAULT,
            max_commit_retries: constants::DEFAULT_MAX_COMMIT_RETRIES,
            genesis_admin: None,
            genesis_admin_fee_bps: None,
            pairs: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`AmmError::Configuration`] if the document is malformed or
    /// fails [`EngineConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AmmError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`AmmError::Configuration`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.max_commit_retries == 0 {
            return Err(AmmError::Configuration(
                "max_commit_retries must be > 0".to_string(),
            ));
        }
        if !self.pairs.is_empty() && self.genesis_admin.is_none() {
            return Err(AmmError::Configuration(
                "seed pairs require a genesis_admin to register them".to_string(),
            ));
        }
        if self.genesis_admin.is_none() && self.genesis_admin_fee_bps.is_some() {
            return Err(AmmError::Configuration(
                "genesis_admin_fee_bps set without genesis_admin".to_string(),
            ));
        }
        for pair in &self.pairs {
            pair.validate()?;
        }
        Ok(())
    }
}

/// A pool seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairConfig {
    pub asset_a: AssetId,
    pub asset_b: AssetId,
    /// Initial reserve of `asset_a`.
    pub reserve_a: u128,
    /// Initial reserve of `asset_b`.
    pub reserve_b: u128,
}

impl PairConfig {
    /// # Errors
    /// Returns [`AmmError::Configuration`] for identical assets or an empty reserve.
    pub fn validate(&self) -> Result<()> {
        if self.asset_a == self.asset_b {
            return Err(AmmError::Configuration(format!(
                "pair {}/{} lists the same asset twice",
                self.asset_a, self.asset_b
            )));
        }
        if self.reserve_a == 0 || self.reserve_b == 0 {
            return Err(AmmError::Configuration(format!(
                "pair {}/{} needs positive reserves",
                self.asset_a, self.asset_b
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.asset_a, self.asset_b)
    }
}
