//! # Grand Total Aggregation
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tier_total              = selected tier's package total, or 0          │
//! │  addon_packages_total    = Σ package totals of selected add-on packages │
//! │  add_ons_total           = Σ price of add-ons with is_selected          │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  grand_total             = tier + add-on packages + add-ons             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Computed on demand from the snapshot and never stored: editing an item,
//! toggling a selection or deleting a package all change it.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::compute_package_total;
use crate::snapshot::PricingSnapshot;

/// Breakdown of what the customer owes for the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Totals {
    pub tier_total: Money,
    #[serde(rename = "addOnPackagesTotal")]
    pub addon_packages_total: Money,
    pub add_ons_total: Money,
    pub grand_total: Money,
}

impl From<&PricingSnapshot> for Totals {
    fn from(snapshot: &PricingSnapshot) -> Self {
        let tier_total = snapshot
            .selected_tier()
            .map(compute_package_total)
            .unwrap_or_default();
        let addon_packages_total: Money = snapshot
            .selected_addon_packages()
            .map(compute_package_total)
            .sum();
        let add_ons_total: Money = snapshot.selected_add_ons().map(|add_on| add_on.price).sum();

        Totals {
            tier_total,
            addon_packages_total,
            add_ons_total,
            grand_total: tier_total + addon_packages_total + add_ons_total,
        }
    }
}

/// What the customer owes for the current selection.
pub fn compute_grand_total(snapshot: &PricingSnapshot) -> Money {
    Totals::from(snapshot).grand_total
}

impl PricingSnapshot {
    pub fn totals(&self) -> Totals {
        Totals::from(self)
    }

    pub fn grand_total(&self) -> Money {
        compute_grand_total(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
