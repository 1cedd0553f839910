//! # Selection Controller
//!
//! Two independent selection machines over the package pools.
//!
//! ## Tier Selection (radio)
//! ```text
//!                    select_tier(a)
//!   ┌──────────────┐ ─────────────► ┌──────────────────┐
//!   │NoTierSelected│                │ TierSelected(a)  │──┐ select_tier(b)
//!   └──────────────┘ ◄───────────── └──────────────────┘◄─┘ (a replaced by b)
//!          ▲          select_tier(a)
//!          │          delete_package(a)
//! ```
//!
//! ## Add-On Package Selection (checkbox)
//! ```text
//!   toggle_addon_package(x):  x ∈ set → remove,  x ∉ set → insert
//!   delete_package(x):        remove x if present
//! ```
//!
//! Global add-ons are not part of either machine; see [`crate::registry`].
//!
//! Ids that do not resolve to a package of the right pool are ignored, so
//! the selection never points at something that is not there.

use crate::package::PackageType;
use crate::snapshot::PricingSnapshot;

impl PricingSnapshot {
    /// Selects a tier, replacing any previous tier.
    ///
    /// Selecting the currently selected tier again clears the selection.
    #[must_use]
    pub fn select_tier(mut self, package_id: &str) -> Self {
        if self.is_tier_selected(package_id) {
            self.selected_tier_package_id = None;
        } else if self.has_package_of_type(package_id, PackageType::Tier) {
            self.selected_tier_package_id = Some(package_id.to_string());
        }
        self
    }

    /// Adds an add-on package to the selection, or removes it if it is
    /// already selected.
    #[must_use]
    pub fn toggle_addon_package(mut self, package_id: &str) -> Self {
        if self.is_addon_package_selected(package_id) {
            self.selected_addon_package_ids.retain(|id| id != package_id);
        } else if self.has_package_of_type(package_id, PackageType::Addon) {
            self.selected_addon_package_ids.push(package_id.to_string());
        }
        self
    }

    /// Deletion cascade: drops `package_id` from both selections.
    pub(crate) fn forget_package_selection(&mut self, package_id: &str) {
        if self.is_tier_selected(package_id) {
            self.selected_tier_package_id = None;
        }
        self.selected_addon_package_ids.retain(|id| id != package_id);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
