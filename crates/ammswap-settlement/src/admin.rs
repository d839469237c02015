//! Admin table and pause switch.
//!
//! Admins may register pairs, grant admin rights and toggle the pause flag.
//! An admin may also carry a custom fee rate that replaces the protocol
//! default on that admin's own swaps. Settlement only reads this state,
//! through the [`SwapContext`] snapshot returned by
//! [`AdminRegistry::context_for`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use ammswap_types::{AmmError, CallerId, FeeBps, Result, SwapContext};
use parking_lot::RwLock;

/// Process-wide switch that halts swaps while set.
#[derive(Debug, Default)]
pub struct PauseSwitch {
    paused: AtomicBool,
}

impl PauseSwitch {
    /// A switch that starts unpaused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Guard a swap attempt. Returns `Ok(())` if swaps are running,
    /// or [`AmmError::Paused`] if halted.
    pub fn check(&self) -> Result<()> {
        if self.is_paused() {
            Err(AmmError::Paused)
        } else {
            Ok(())
        }
    }
}

/// Admin identities, their optional fee overrides, and the pause switch.
#[derive(Debug, Default)]
pub struct AdminRegistry {
    /// Admin -> custom fee rate (`None` = protocol default).
    admins: RwLock<HashMap<CallerId, Option<FeeBps>>>,
    pause: PauseSwitch,
}

impl AdminRegistry {
    /// An empty registry. Nobody can perform privileged operations until an
    /// admin is seeded with [`AdminRegistry::with_genesis`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry whose only admin is `admin`.
    #[must_use]
    pub fn with_genesis(admin: CallerId, fee_bps: Option<FeeBps>) -> Self {
        let registry = Self::new();
        registry.admins.write().insert(admin, fee_bps);
        registry
    }

    #[must_use]
    pub fn is_admin(&self, caller: &CallerId) -> bool {
        self.admins.read().contains_key(caller)
    }

    /// The caller's custom fee rate, if it is an admin that has one.
    #[must_use]
    pub fn admin_fee(&self, caller: &CallerId) -> Option<FeeBps> {
        self.admins.read().get(caller).copied().flatten()
    }

    /// # Errors
    /// Returns [`AmmError::NotAdmin`] unless `caller` is an admin.
    pub fn require_admin(&self, caller: &CallerId) -> Result<()> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(AmmError::NotAdmin)
        }
    }

    /// Grant admin rights to `new_admin`, optionally with a custom fee rate.
    ///
    /// # Errors
    /// - [`AmmError::NotAdmin`] if `caller` is not an admin
    /// - [`AmmError::AlreadyInitialized`] if `new_admin` already is one
    pub fn register_admin(
        &self,
        caller: &CallerId,
        new_admin: CallerId,
        fee_bps: Option<FeeBps>,
    ) -> Result<()> {
        let mut admins = self.admins.write();
        if !admins.contains_key(caller) {
            return Err(AmmError::NotAdmin);
        }
        if admins.contains_key(&new_admin) {
            return Err(AmmError::AlreadyInitialized);
        }
        admins.insert(new_admin, fee_bps);
        tracing::info!(
            by = %caller,
            admin = %new_admin,
            fee_bps = ?fee_bps.map(FeeBps::get),
            "Admin registered"
        );
        Ok(())
    }

    /// Set or clear the pause flag.
    ///
    /// # Errors
    /// Returns [`AmmError::NotAdmin`] unless `caller` is an admin.
    pub fn set_paused(&self, caller: &CallerId, paused: bool) -> Result<()> {
        self.require_admin(caller)?;
        self.pause.set(paused);
        tracing::info!(by = %caller, paused, "Pause flag updated");
        Ok(())
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Snapshot of the pause flag and the fee rate `caller` pays.
    #[must_use]
    pub fn context_for(&self, caller: &CallerId, default_fee: FeeBps) -> SwapContext {
        SwapContext {
            paused: self.pause.is_paused(),
            fee_bps: self.admin_fee(caller).unwrap_or(default_fee),
        }
    }

    /// Number of admins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.admins.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.admins.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bps(n: u32) -> FeeBps {
        FeeBps::new(n).unwrap()
    }

    #[test]
    fn pause_switch_starts_running() {
        let switch = PauseSwitch::new();
        assert!(!switch.is_paused());
        assert!(switch.check().is_ok());
    }

    #[test]
    fn pause_switch_blocks_when_set() {
        let switch = PauseSwitch::new();
        switch.set(true);
        assert_eq!(switch.check(), Err(AmmError::Paused));
        switch.set(false);
        assert!(switch.check().is_ok());
    }

    #[test]
    fn genesis_admin_is_admin() {
        let root = CallerId::new();
        let registry = AdminRegistry::with_genesis(root, None);
        assert!(registry.is_admin(&root));
        assert!(!registry.is_admin(&CallerId::new()));
        assert_eq!(registry.admin_fee(&root), None);
    }

    #[test]
    fn register_admin_requires_admin() {
        let registry = AdminRegistry::with_genesis(CallerId::new(), None);
        let outsider = CallerId::new();
        let err = registry
            .register_admin(&outsider, CallerId::new(), None)
            .unwrap_err();
        assert_eq!(err, AmmError::NotAdmin);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_admin_twice_is_already_initialized() {
        let root = CallerId::new();
        let registry = AdminRegistry::with_genesis(root, None);
        let ops = CallerId::new();
        registry.register_admin(&root, ops, Some(bps(5))).unwrap();

        let err = registry.register_admin(&root, ops, None).unwrap_err();
        assert_eq!(err, AmmError::AlreadyInitialized);
        assert_eq!(registry.admin_fee(&ops), Some(bps(5)), "fee must be unchanged");

        let err = registry.register_admin(&ops, root, None).unwrap_err();
        assert_eq!(err, AmmError::AlreadyInitialized);
    }

    #[test]
    fn set_paused_is_admin_only() {
        let root = CallerId::new();
        let registry = AdminRegistry::with_genesis(root, None);

        let err = registry.set_paused(&CallerId::new(), true).unwrap_err();
        assert_eq!(err, AmmError::NotAdmin);
        assert!(!registry.is_paused());

        registry.set_paused(&root, true).unwrap();
        assert!(registry.is_paused());
    }

    #[test]
    fn context_resolves_admin_fee_or_default() {
        let root = CallerId::new();
        let registry = AdminRegistry::with_genesis(root, Some(bps(0)));
        let user = CallerId::new();

        assert_eq!(registry.context_for(&root, FeeBps::DEFAULT).fee_bps, bps(0));
        assert_eq!(registry.context_for(&user, FeeBps::DEFAULT).fee_bps, FeeBps::DEFAULT);
    }

    #[test]
    fn admin_without_custom_fee_pays_default() {
        let root = CallerId::new();
        let registry = AdminRegistry::with_genesis(root, None);
        assert_eq!(registry.context_for(&root, bps(42)).fee_bps, bps(42));
    }

    #[test]
    fn context_carries_pause_flag() {
        let root = CallerId::new();
        let registry = AdminRegistry::with_genesis(root, None);
        registry.set_paused(&root, true).unwrap();
        assert!(registry.context_for(&root, FeeBps::DEFAULT).paused);
    }
}
