//! # Pricing Snapshot
//!
//! The complete state of a proposal's packaged pricing section.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   snapshot ──► op(snapshot, args) ──► snapshot'  ──► host re-renders    │
//! │                 (consumes)             (replaces the old one wholesale) │
//! │                                                                         │
//! │   Every mutating operation takes the snapshot by value and returns the  │
//! │   updated one. There is no ambient or global state, so any number of    │
//! │   proposals can be edited side by side and every test is deterministic. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The operations live next to the component they belong to:
//! [`crate::repository`] (packages and items), [`crate::registry`] (global
//! add-ons), [`crate::selection`] (tier and add-on package selection),
//! [`crate::template`] (default tiers) and [`crate::totals`].
//!
//! ## Invariants
//! - `selected_tier_package_id` is absent or names a `tier` package present
//!   in `packages`.
//! - `selected_addon_package_ids` holds distinct ids of `addon` packages
//!   present in `packages`, in the order they were selected.
//! - Every item's total equals quantity × unit price.

use serde::Serialize;
use ts_rs::TS;

use crate::addon::AddOn;
use crate::package::{Package, PackageType};

/// The four values handed to the host after every mutation, in order.
pub type SnapshotParts = (Vec<Package>, Vec<AddOn>, Option<String>, Vec<String>);

/// Packages, global add-ons and selection state of one proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingSnapshot {
    pub(crate) packages: Vec<Package>,
    pub(crate) add_ons: Vec<AddOn>,
    pub(crate) selected_tier_package_id: Option<String>,
    #[serde(rename = "selectedAddOnPackageIds")]
    pub(crate) selected_addon_package_ids: Vec<String>,
}

impl PricingSnapshot {
    /// An empty snapshot: no packages, no add-ons, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts state handed back by the host.
    ///
    /// Item totals are re-derived and selection ids that no longer resolve
    /// to a package of the right pool are dropped, so a snapshot built here
    /// satisfies every invariant no matter what it was given.
    pub fn from_parts(
        mut packages: Vec<Package>,
        add_ons: Vec<AddOn>,
        selected_tier_package_id: Option<String>,
        selected_addon_package_ids: Vec<String>,
    ) -> Self {
        for item in packages.iter_mut().flat_map(|pkg| pkg.items.iter_mut()) {
            item.recompute_total();
        }

        let mut snapshot = PricingSnapshot {
            packages,
            add_ons,
            selected_tier_package_id: None,
            selected_addon_package_ids: Vec::new(),
        };

        snapshot.selected_tier_package_id = selected_tier_package_id
            .filter(|id| snapshot.has_package_of_type(id, PackageType::Tier));

        for id in selected_addon_package_ids {
            if snapshot.has_package_of_type(&id, PackageType::Addon)
                && !snapshot.selected_addon_package_ids.contains(&id)
            {
                snapshot.selected_addon_package_ids.push(id);
            }
        }

        snapshot
    }

    /// Splits the snapshot into the host's four values, in order.
    pub fn into_parts(self) -> SnapshotParts {
        (
            self.packages,
            self.add_ons,
            self.selected_tier_package_id,
            self.selected_addon_package_ids,
        )
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn selected_tier_package_id(&self) -> Option<&str> {
        self.selected_tier_package_id.as_deref()
    }

    pub fn selected_addon_package_ids(&self) -> &[String] {
        &self.selected_addon_package_ids
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|pkg| pkg.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|add_on| add_on.id == id)
    }

    /// Packages in the tier pool, in display order.
    pub fn tier_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().filter(|pkg| pkg.is_tier())
    }

    /// Packages in the add-on pool, in display order.
    pub fn addon_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().filter(|pkg| pkg.is_addon())
    }

    pub fn selected_tier(&self) -> Option<&Package> {
        self.selected_tier_package_id
            .as_deref()
            .and_then(|id| self.package(id))
    }

    /// Selected add-on packages, in the order they were selected.
    pub fn selected_addon_packages(&self) -> impl Iterator<Item = &Package> {
        self.selected_addon_package_ids
            .iter()
            .filter_map(|id| self.package(id))
    }

    pub fn selected_add_ons(&self) -> impl Iterator<Item = &AddOn> {
        self.add_ons.iter().filter(|add_on| add_on.is_selected)
    }

    pub fn is_tier_selected(&self, id: &str) -> bool {
        self.selected_tier_package_id.as_deref() == Some(id)
    }

    pub fn is_addon_package_selected(&self, id: &str) -> bool {
        self.selected_addon_package_ids.iter().any(|selected| selected == id)
    }

    pub(crate) fn has_package_of_type(&self, id: &str, package_type: PackageType) -> bool {
        self.package(id)
            .is_some_and(|pkg| pkg.package_type() == package_type)
    }

    pub(crate) fn package_mut(&mut self, id: &str) -> Option<&mut Package> {
        self.packages.iter_mut().find(|pkg| pkg.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
