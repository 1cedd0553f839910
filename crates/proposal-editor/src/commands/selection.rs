//! # Selection Commands
//!
//! Clicking a tier card or an add-on package checkbox, and reading what the
//! customer owes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PACKAGE SUMMARY                                                        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Silver (tier)                                         $300.00          │
//! │  Extended Service                                      $150.00          │
//! │  Warranty                                               $99.00          │
//! │  ───────────────────────────────────────────────────────────────        │
//! │  TOTAL                                                 $549.00          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use proposal_core::Totals;
use serde::Serialize;
use tracing::debug;

use crate::state::{EditorConfig, ProposalState, SnapshotResponse};

/// Totals breakdown formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDisplay {
    pub tier_total: String,
    #[serde(rename = "addOnPackagesTotal")]
    pub addon_packages_total: String,
    pub add_ons_total: String,
    pub grand_total: String,
}

impl TotalsDisplay {
    fn new(totals: &Totals, config: &EditorConfig) -> Self {
        TotalsDisplay {
            tier_total: config.format_currency(totals.tier_total),
            addon_packages_total: config.format_currency(totals.addon_packages_total),
            add_ons_total: config.format_currency(totals.add_ons_total),
            grand_total: config.format_currency(totals.grand_total),
        }
    }
}

/// Selects a tier card. Clicking the selected card again deselects it.
pub fn select_tier(state: &ProposalState, package_id: &str) -> SnapshotResponse {
    debug!(package_id = %package_id, "select_tier command");
    state.apply(|s| s.select_tier(package_id))
}

/// Checks or unchecks an add-on package.
pub fn toggle_addon_package(state: &ProposalState, package_id: &str) -> SnapshotResponse {
    debug!(package_id = %package_id, "toggle_addon_package command");
    state.apply(|s| s.toggle_addon_package(package_id))
}

pub fn get_totals(state: &ProposalState) -> Totals {
    debug!("get_totals command");
    state.with_snapshot(|s| s.totals())
}

/// Gets the totals breakdown as currency strings.
pub fn get_totals_display(state: &ProposalState, config: &EditorConfig) -> TotalsDisplay {
    debug!("get_totals_display command");
    TotalsDisplay::new(&get_totals(state), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_core::{Money, NewAddOn, NewPackage, NewPackageItem, PackageType, PricingModel};

    /// Silver ($300 itemized tier), Extended Service ($150 add-on package)
    /// and a $99 Warranty add-on.
    fn proposal() -> (ProposalState, String, String, String) {
        let state = ProposalState::new();
        let response = state.apply(|s| {
            s.add_package(NewPackage {
                pricing_model: PricingModel::Itemized,
                ..NewPackage::new("Silver", PackageType::Tier)
            })
            .add_package(NewPackage {
                price: Money::from_cents(15000),
                ..NewPackage::new("Extended Service", PackageType::Addon)
            })
            .add_add_on(NewAddOn {
                name: "Warranty".to_string(),
                price: Money::from_cents(9900),
                ..Default::default()
            })
        });
        let silver = response.packages[0].id.clone();
        let service = response.packages[1].id.clone();
        let warranty = response.add_ons[0].id.clone();

        state.apply(|s| {
            s.add_item_to_package(
                &silver,
                NewPackageItem {
                    name: "Painting".to_string(),
                    quantity: Some(2.0),
                    unit_price: Money::from_cents(15000),
                    ..Default::default()
                },
            )
        });
        (state, silver, service, warranty)
    }

    #[test]
    fn test_select_tier_toggles() {
        let (state, silver, ..) = proposal();

        let response = select_tier(&state, &silver);
        assert_eq!(response.selected_tier_package_id.as_deref(), Some(silver.as_str()));
        assert_eq!(response.totals.tier_total.cents(), 30000);

        let response = select_tier(&state, &silver);
        assert_eq!(response.selected_tier_package_id, None);
    }

    #[test]
    fn test_toggle_addon_package() {
        let (state, _, service, _) = proposal();

        let response = toggle_addon_package(&state, &service);
        assert_eq!(response.selected_addon_package_ids, [service.clone()]);

        let response = toggle_addon_package(&state, &service);
        assert!(response.selected_addon_package_ids.is_empty());
    }

    #[test]
    fn test_totals_display() {
        let (state, silver, service, warranty) = proposal();
        select_tier(&state, &silver);
        toggle_addon_package(&state, &service);
        state.apply(|s| s.toggle_add_on(&warranty));

        assert_eq!(get_totals(&state).grand_total.cents(), 54900);

        let display = get_totals_display(&state, &EditorConfig::default());
        assert_eq!(display.tier_total, "$300.00");
        assert_eq!(display.addon_packages_total, "$150.00");
        assert_eq!(display.add_ons_total, "$99.00");
        assert_eq!(display.grand_total, "$549.00");
    }
}
