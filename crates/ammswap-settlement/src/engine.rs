//! Swap engine: admin gate + pair registry + settlement + commit.
//!
//! The engine is `Sync`; share it behind an `Arc` and call it from as many
//! threads as needed. Each swap reads its pair's record, settles against
//! that snapshot and commits with compare-and-swap. If another swap on the
//! same pair committed in between, the swap is re-priced from the fresh
//! record, up to `max_commit_retries` attempts.

use ammswap_types::{
    AmmError, AssetId, CallerId, EngineConfig, FeeBps, ReserveRecord, Result, SwapContext,
    SwapReceipt, SwapRequest, TradingPair,
};

use crate::admin::AdminRegistry;
use crate::registry::PairRegistry;
use crate::settle::{admit, settle};
use crate::store::{MemoryPairStore, PairStore};

/// Settles swaps against a [`PairStore`].
pub struct SwapEngine<S = MemoryPairStore> {
    registry: PairRegistry<S>,
    admins: AdminRegistry,
    default_fee: FeeBps,
    max_commit_retries: u32,
}

impl SwapEngine<MemoryPairStore> {
    /// Engine over a fresh in-memory store.
    ///
    /// # Errors
    /// See [`SwapEngine::new`].
    pub fn in_memory(config: &EngineConfig) -> Result<Self> {
        Self::new(MemoryPairStore::new(), config)
    }
}

impl<S: PairStore> SwapEngine<S> {
    /// Build an engine from `config`, seeding the genesis admin and pairs.
    ///
    /// # Errors
    /// Returns [`AmmError::Configuration`] if `config` is invalid, or any
    /// error from registering a seed pair.
    pub fn new(store: S, config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let admins = match config.genesis_admin {
            Some(admin) => AdminRegistry::with_genesis(admin, config.genesis_admin_fee_bps),
            None => AdminRegistry::new(),
        };
        let engine = Self {
            registry: PairRegistry::new(store),
            admins,
            default_fee: config.default_fee_bps,
            max_commit_retries: config.max_commit_retries,
        };

        if let Some(admin) = config.genesis_admin {
            for seed in &config.pairs {
                engine.register_pair(
                    &admin,
                    &seed.asset_a,
                    &seed.asset_b,
                    seed.reserve_a,
                    seed.reserve_b,
                )?;
            }
        }

        tracing::info!(
            default_fee_bps = engine.default_fee.get(),
            max_commit_retries = engine.max_commit_retries,
            admins = engine.admins.len(),
            pairs = config.pairs.len(),
            "Swap engine ready"
        );
        Ok(engine)
    }

    // -----------------------------------------------------------------
    // Registration (admin-only)
    // -----------------------------------------------------------------

    /// Create or overwrite the pool for `(x, y)` with reserves `reserve_x`
    /// of `x` and `reserve_y` of `y`. Accrued fees restart at zero.
    ///
    /// # Errors
    /// - [`AmmError::NotAdmin`] if `caller` is not an admin
    /// - [`AmmError::SamePair`] if `x == y`
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero
    pub fn register_pair(
        &self,
        caller: &CallerId,
        x: &AssetId,
        y: &AssetId,
        reserve_x: u128,
        reserve_y: u128,
    ) -> Result<TradingPair> {
        self.admins.require_admin(caller)?;
        let pair = PairRegistry::<S>::canonicalize(x, y)?;
        if reserve_x == 0 || reserve_y == 0 {
            return Err(AmmError::InsufficientLiquidity);
        }

        let record = if pair.first() == x {
            ReserveRecord::new(reserve_x, reserve_y)
        } else {
            ReserveRecord::new(reserve_y, reserve_x)
        };
        self.registry.upsert(&pair, record)?;

        tracing::info!(
            by = %caller,
            pair = %pair,
            reserve_first = record.reserve_first,
            reserve_second = record.reserve_second,
            "Pair registered"
        );
        Ok(pair)
    }

    /// # Errors
    /// See [`AdminRegistry::register_admin`].
    pub fn register_admin(
        &self,
        caller: &CallerId,
        new_admin: CallerId,
        fee_bps: Option<FeeBps>,
    ) -> Result<()> {
        self.admins.register_admin(caller, new_admin, fee_bps)
    }

    /// # Errors
    /// Returns [`AmmError::NotAdmin`] unless `caller` is an admin.
    pub fn set_paused(&self, caller: &CallerId, paused: bool) -> Result<()> {
        self.admins.set_paused(caller, paused)
    }

    // -----------------------------------------------------------------
    // Swaps
    // -----------------------------------------------------------------

    /// Settle `request` and commit the new reserves.
    ///
    /// # Errors
    /// - [`AmmError::ZeroAmount`], [`AmmError::Paused`]
    /// - [`AmmError::UnsupportedPair`] for identical or unregistered assets
    /// - [`AmmError::InsufficientLiquidity`], [`AmmError::ArithmeticOverflow`]
    /// - [`AmmError::SlippageExceeded`]
    /// - [`AmmError::StoreContention`] if every commit attempt lost the race
    ///
    /// The store is untouched whenever an error is returned.
    pub fn swap(&self, request: &SwapRequest) -> Result<SwapReceipt> {
        let ctx = self.admins.context_for(&request.caller, self.default_fee);
        let result = self.try_swap(request, &ctx);
        if let Err(err) = &result {
            tracing::warn!(
                caller = %request.caller,
                asset_in = %request.asset_in,
                asset_out = %request.asset_out,
                amount_in = request.amount_in,
                min_amount_out = request.min_amount_out,
                error = %err,
                "Swap rejected"
            );
        }
        result
    }

    fn try_swap(&self, request: &SwapRequest, ctx: &SwapContext) -> Result<SwapReceipt> {
        admit(request, ctx)?;
        let pair = PairRegistry::<S>::canonicalize(&request.asset_in, &request.asset_out)
            .map_err(|_| AmmError::UnsupportedPair)?;

        for attempt in 1..=self.max_commit_retries {
            let record = self.registry.lookup(&pair)?;
            let settlement = settle(request, &record, ctx)?;

            if self
                .registry
                .commit(&pair, &settlement.before, settlement.after)?
            {
                tracing::info!(
                    caller = %request.caller,
                    pair = %pair,
                    direction = %settlement.direction,
                    amount_in = request.amount_in,
                    amount_out = settlement.outcome.amount_out,
                    fee = settlement.outcome.fee,
                    fee_bps = settlement.fee_bps.get(),
                    attempt,
                    "Swap settled"
                );
                return Ok(SwapReceipt::new(
                    settlement.pair,
                    request.caller,
                    settlement.direction,
                    request.amount_in,
                    settlement.outcome,
                    settlement.fee_bps,
                    settlement.after,
                ));
            }

            tracing::debug!(pair = %pair, attempt, "Reserve record changed under swap, retrying");
        }

        Err(AmmError::StoreContention {
            attempts: self.max_commit_retries,
        })
    }

    /// Output `caller` would receive for swapping `amount_in` right now.
    ///
    /// Read-only: applies the caller's fee rate but ignores the pause flag.
    ///
    /// # Errors
    /// [`AmmError::ZeroAmount`], [`AmmError::UnsupportedPair`] or any curve error.
    pub fn quote(
        &self,
        caller: &CallerId,
        asset_in: &AssetId,
        asset_out: &AssetId,
        amount_in: u128,
    ) -> Result<u128> {
        if amount_in == 0 {
            return Err(AmmError::ZeroAmount);
        }
        let pair = PairRegistry::<S>::canonicalize(asset_in, asset_out)
            .map_err(|_| AmmError::UnsupportedPair)?;
        let record = self.registry.lookup(&pair)?;
        let (reserve_in, reserve_out) = record.oriented(pair.direction_of(asset_in));
        let fee_bps = self.admins.context_for(caller, self.default_fee).fee_bps;
        ammswap_curve::quote(amount_in, reserve_in, reserve_out, fee_bps)
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// Reserves of `(x, y)` in that order.
    ///
    /// # Errors
    /// [`AmmError::SamePair`] or [`AmmError::UnsupportedPair`].
    pub fn reserves(&self, x: &AssetId, y: &AssetId) -> Result<(u128, u128)> {
        let pair = PairRegistry::<S>::canonicalize(x, y)?;
        let record = self.registry.lookup(&pair)?;
        Ok(record.oriented(pair.direction_of(x)))
    }

    /// Full reserve record of the canonical pair for `(x, y)`.
    ///
    /// # Errors
    /// [`AmmError::SamePair`] or [`AmmError::UnsupportedPair`].
    pub fn record(&self, x: &AssetId, y: &AssetId) -> Result<ReserveRecord> {
        let pair = PairRegistry::<S>::canonicalize(x, y)?;
        self.registry.lookup(&pair)
    }

    /// All registered pairs, in canonical order.
    pub fn pairs(&self) -> Result<Vec<TradingPair>> {
        self.registry.pairs()
    }

    #[must_use]
    pub fn admins(&self) -> &AdminRegistry {
        &self.admins
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.admins.is_paused()
    }

    #[must_use]
    pub fn default_fee(&self) -> FeeBps {
        self.default_fee
    }
}
