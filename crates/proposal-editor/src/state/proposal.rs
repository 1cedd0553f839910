//! # Proposal State
//!
//! Holds the pricing snapshot of one open proposal.
//!
//! ## Thread Safety
//! The snapshot is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command reads or replaces it
//! 2. Only one command should replace it at a time
//! 3. The host may dispatch commands concurrently
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Proposal State Operations                            │
//! │                                                                         │
//! │  Editor Action          Command                 Snapshot Change         │
//! │  ─────────────          ───────                 ───────────────         │
//! │                                                                         │
//! │  Add Package ─────────► add_package() ────────► packages.push(pkg)     │
//! │                                                                         │
//! │  Click Tier Card ─────► select_tier() ────────► selectedTier = id      │
//! │                                                                         │
//! │  Delete Package ──────► delete_package() ─────► packages.remove(i)     │
//! │                                                 + selection cascade    │
//! │                                                                         │
//! │  View Section ────────► get_snapshot() ───────► (read only)            │
//! │                                                                         │
//! │  NOTE: writes run the operation on a copy and swap the result in      │
//! │        under a single lock.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use proposal_core::{AddOn, Package, PricingSnapshot, SnapshotParts, Totals};
use serde::Serialize;
use tracing::info;

use super::EditorConfig;

/// Snapshot response: the four values the host stores, plus totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub packages: Vec<Package>,
    pub add_ons: Vec<AddOn>,
    pub selected_tier_package_id: Option<String>,
    #[serde(rename = "selectedAddOnPackageIds")]
    pub selected_addon_package_ids: Vec<String>,
    pub totals: Totals,
}

impl From<&PricingSnapshot> for SnapshotResponse {
    fn from(snapshot: &PricingSnapshot) -> Self {
        SnapshotResponse {
            packages: snapshot.packages().to_vec(),
            add_ons: snapshot.add_ons().to_vec(),
            selected_tier_package_id: snapshot.selected_tier_package_id().map(str::to_string),
            selected_addon_package_ids: snapshot.selected_addon_package_ids().to_vec(),
            totals: snapshot.totals(),
        }
    }
}

/// Session-scoped proposal state.
///
/// Uses `Arc<Mutex<PricingSnapshot>>`. A poisoned lock is recovered rather
/// than propagated; a write that panics leaves the previous snapshot.
#[derive(Debug, Default)]
pub struct ProposalState {
    snapshot: Arc<Mutex<PricingSnapshot>>,
}

impl ProposalState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session, seeded with the default tiers when the
    /// configuration asks for it.
    pub fn from_config(config: &EditorConfig) -> Self {
        let snapshot = if config.seed_default_tiers {
            info!("Seeding new proposal with default tiers");
            PricingSnapshot::new().load_default_tier_template()
        } else {
            PricingSnapshot::new()
        };
        Self::with_initial(snapshot)
    }

    /// Reopens a session from the four values the host stored.
    pub fn restore(parts: SnapshotParts) -> Self {
        let (packages, add_ons, selected_tier_package_id, selected_addon_package_ids) = parts;
        info!(
            packages = packages.len(),
            add_ons = add_ons.len(),
            "Restoring proposal session"
        );
        Self::with_initial(PricingSnapshot::from_parts(
            packages,
            add_ons,
            selected_tier_package_id,
            selected_addon_package_ids,
        ))
    }

    fn with_initial(snapshot: PricingSnapshot) -> Self {
        ProposalState {
            snapshot: Arc::new(Mutex::new(snapshot)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PricingSnapshot> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the snapshot.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = state.with_snapshot(|s| s.grand_total());
    /// ```
    pub fn with_snapshot<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PricingSnapshot) -> R,
    {
        let snapshot = self.lock();
        f(&snapshot)
    }

    /// Replaces the snapshot with `op(snapshot)` and returns the response
    /// for the new one.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.apply(|s| s.select_tier(&package_id));
    /// ```
    pub fn apply<F>(&self, op: F) -> SnapshotResponse
    where
        F: FnOnce(PricingSnapshot) -> PricingSnapshot,
    {
        let mut snapshot = self.lock();
        // The stored snapshot stays intact until `op` returns.
        *snapshot = op(snapshot.clone());
        SnapshotResponse::from(&*snapshot)
    }

    /// The current snapshot, split into the host's four values.
    pub fn parts(&self) -> SnapshotParts {
        self.with_snapshot(|s| s.clone().into_parts())
    }
}
