//! # Default Tier Template
//!
//! One-click Good/Better/Best seeding for an empty tier pool.
//!
//! ```text
//! ┌────────────┬────────────────────────────────────────┬─────────────┐
//! │ Tier       │ Features                               │ Recommended │
//! ├────────────┼────────────────────────────────────────┼─────────────┤
//! │ Bronze     │ Basic service, standard materials, 1yr │             │
//! │ Silver     │ Enhanced service, premium, 2yr, support│      ★      │
//! │ Gold       │ Premium service, top-tier, 5yr, ...    │             │
//! └────────────┴────────────────────────────────────────┴─────────────┘
//!   all: fixed pricing, price 0, no items
//! ```
//!
//! Loading is additive and not idempotent: loading twice yields six tiers.

use crate::money::Money;
use crate::package::{NewPackage, Package, PackageType, PricingModel};
use crate::snapshot::PricingSnapshot;

struct TierTemplate {
    name: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    color: &'static str,
    is_recommended: bool,
}

const DEFAULT_TIERS: [TierTemplate; 3] = [
    TierTemplate {
        name: "Bronze",
        description: "Essential services for basic needs",
        features: &["Basic service", "Standard materials", "1-year warranty"],
        color: "#CD7F32",
        is_recommended: false,
    },
    TierTemplate {
        name: "Silver",
        description: "Enhanced services with premium features",
        features: &[
            "Enhanced service",
            "Premium materials",
            "2-year warranty",
            "Priority support",
        ],
        color: "#C0C0C0",
        is_recommended: true,
    },
    TierTemplate {
        name: "Gold",
        description: "Premium services with all features included",
        features: &[
            "Premium service",
            "Top-tier materials",
            "5-year warranty",
            "Priority support",
            "Extended coverage",
        ],
        color: "#FFD700",
        is_recommended: false,
    },
];

impl TierTemplate {
    fn to_draft(&self) -> NewPackage {
        NewPackage {
            description: self.description.to_string(),
            price: Money::zero(),
            is_recommended: self.is_recommended,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            color: Some(self.color.to_string()),
            pricing_model: PricingModel::Fixed,
            show_line_item_prices: false,
            ..NewPackage::new(self.name, PackageType::Tier)
        }
    }
}

/// Drafts for the three default tiers, in display order.
pub fn default_tier_drafts() -> Vec<NewPackage> {
    DEFAULT_TIERS.iter().map(TierTemplate::to_draft).collect()
}

impl PricingSnapshot {
    /// Appends Bronze, Silver and Gold tier packages after any existing
    /// packages. Existing packages and selections are untouched.
    #[must_use]
    pub fn load_default_tier_template(mut self) -> Self {
        self.packages.extend(
            default_tier_drafts()
                .into_iter()
                .map(|draft| Package::from_draft_with_prefix(draft, "tier")),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_on_empty_snapshot() {
        let snapshot = PricingSnapshot::new().load_default_tier_template();
        let packages = snapshot.packages();

        assert_eq!(packages.len(), 3);
        for pkg in packages {
            assert_eq!(pkg.package_type(), PackageType::Tier);
            assert_eq!(pkg.pricing_model, PricingModel::Fixed);
            assert!(pkg.price.is_zero());
            assert!(pkg.items.is_empty());
            assert!(pkg.images.is_empty());
            assert!(pkg.id.starts_with("tier-"));
        }

        let names: Vec<_> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bronze", "Silver", "Gold"]);
        assert_eq!(packages.iter().filter(|p| p.is_recommended).count(), 1);
        assert!(packages[1].is_recommended);
    }

    #[test]
    fn test_load_is_additive() {
        let snapshot = PricingSnapshot::new()
            .add_package(NewPackage::new("Custom", PackageType::Tier))
            .load_default_tier_template();

        assert_eq!(snapshot.packages().len(), 4);
        assert_eq!(snapshot.packages()[0].name, "Custom");
    }

    #[test]
    fn test_load_twice_yields_six_distinct_tiers() {
        let snapshot = PricingSnapshot::new()
            .load_default_tier_template()
            .load_default_tier_template();

        let mut ids: Vec<_> = snapshot.packages().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_load_keeps_selection() {
        let snapshot = PricingSnapshot::new().load_default_tier_template();
        let silver = snapshot.packages()[1].id.clone();

        let snapshot = snapshot.select_tier(&silver).load_default_tier_template();
        assert_eq!(snapshot.selected_tier_package_id(), Some(silver.as_str()));
    }
}
