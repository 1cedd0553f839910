//! # Packages
//!
//! Sellable bundles inside a proposal.
//!
//! ## Two Pools
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PackageType::Tier                    PackageType::Addon                │
//! │  ─────────────────                    ──────────────────                │
//! │  Good / Better / Best                 Extended Service, Gutter Guards   │
//! │  customer picks AT MOST ONE           customer picks ANY NUMBER         │
//! │  (radio)                              (checkbox)                        │
//! │                                                                         │
//! │  The type is fixed when the package is created.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::item::{NewPackageItem, PackageItem};
use crate::money::Money;
use crate::pricing::compute_package_total;
use crate::{fresh_id, or_default, DEFAULT_PACKAGE_NAME};

// =============================================================================
// Package Type
// =============================================================================

/// Which selection pool a package belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// Mutually exclusive tier.
    Tier,
    /// Optional extra; any number may be selected.
    Addon,
}

impl PackageType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PackageType::Tier => "tier",
            PackageType::Addon => "addon",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tier" => Ok(PackageType::Tier),
            "addon" => Ok(PackageType::Addon),
            other => Err(CoreError::UnknownPackageType(other.to_string())),
        }
    }
}

// =============================================================================
// Pricing Model
// =============================================================================

/// How a package's total is derived. See [`crate::pricing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    /// Flat `price`; items are descriptive only.
    #[default]
    Fixed,
    /// Sum of item totals.
    Itemized,
    /// Sum of item totals plus `package_adjustment`.
    ItemizedWithAdjustment,
}

impl PricingModel {
    /// Wire spelling, as serialized.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "fixed",
            PricingModel::Itemized => "itemized",
            PricingModel::ItemizedWithAdjustment => "itemized-with-adjustment",
        }
    }

    /// Short badge text shown on a package card.
    pub const fn label(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "Fixed",
            PricingModel::Itemized => "Itemized",
            PricingModel::ItemizedWithAdjustment => "Adjusted",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fixed" => Ok(PricingModel::Fixed),
            "itemized" => Ok(PricingModel::Itemized),
            "itemized-with-adjustment" => Ok(PricingModel::ItemizedWithAdjustment),
            other => Err(CoreError::UnknownPricingModel(other.to_string())),
        }
    }
}

// =============================================================================
// Package
// =============================================================================

/// A sellable bundle of items, features and display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Only meaningful under [`PricingModel::Fixed`].
    pub price: Money,
    /// Display hint. Several packages may carry it at once.
    pub is_recommended: bool,
    /// Insertion order is display order.
    pub items: Vec<PackageItem>,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub warranty: Option<String>,
    pub scope: Option<String>,
    pub color: Option<String>,
    package_type: PackageType,
    pub pricing_model: PricingModel,
    /// Only meaningful under [`PricingModel::ItemizedWithAdjustment`].
    /// Negative is a discount, positive a premium.
    pub package_adjustment: Money,
    pub show_line_item_prices: bool,
}

impl Package {
    /// Builds a package from a draft, assigning a fresh id.
    pub fn from_draft(draft: NewPackage) -> Self {
        Self::from_draft_with_prefix(draft, "package")
    }

    pub(crate) fn from_draft_with_prefix(draft: NewPackage, id_prefix: &str) -> Self {
        Package {
            id: fresh_id(id_prefix),
            name: or_default(draft.name, DEFAULT_PACKAGE_NAME),
            description: draft.description,
            price: draft.price,
            is_recommended: draft.is_recommended,
            items: draft.items.into_iter().map(PackageItem::from_draft).collect(),
            features: draft.features,
            images: draft.images,
            warranty: non_empty(draft.warranty),
            scope: non_empty(draft.scope),
            color: non_empty(draft.color),
            package_type: draft.package_type,
            pricing_model: draft.pricing_model,
            package_adjustment: draft.package_adjustment,
            show_line_item_prices: draft.show_line_item_prices,
        }
    }

    /// The pool this package belongs to. Immutable after creation.
    #[inline]
    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    #[inline]
    pub fn is_tier(&self) -> bool {
        self.package_type == PackageType::Tier
    }

    #[inline]
    pub fn is_addon(&self) -> bool {
        self.package_type == PackageType::Addon
    }

    /// Current total under the package's pricing model.
    #[inline]
    pub fn total(&self) -> Money {
        compute_package_total(self)
    }

    /// Whether line items are listed with prices on the package card.
    ///
    /// Itemized models always show them; fixed packages only on request.
    pub fn shows_line_items(&self) -> bool {
        self.pricing_model != PricingModel::Fixed || self.show_line_item_prices
    }

    pub fn item(&self, item_id: &str) -> Option<&PackageItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Applies a partial edit. Fields left as `None` are unchanged; the
    /// package type cannot be changed.
    pub fn apply(&mut self, update: PackageUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(is_recommended) = update.is_recommended {
            self.is_recommended = is_recommended;
        }
        if let Some(features) = update.features {
            self.features = features;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(warranty) = update.warranty {
            self.warranty = non_empty(Some(warranty));
        }
        if let Some(scope) = update.scope {
            self.scope = non_empty(Some(scope));
        }
        if let Some(color) = update.color {
            self.color = non_empty(Some(color));
        }
        if let Some(pricing_model) = update.pricing_model {
            self.pricing_model = pricing_model;
        }
        if let Some(package_adjustment) = update.package_adjustment {
            self.package_adjustment = package_adjustment;
        }
        if let Some(show_line_item_prices) = update.show_line_item_prices {
            self.show_line_item_prices = show_line_item_prices;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Drafts
// =============================================================================

/// Package data as entered in the "Add Package" form.
///
/// There is no `Default`: the caller must choose the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewPackage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub items: Vec<NewPackageItem>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub package_type: PackageType,
    #[serde(default)]
    pub pricing_model: PricingModel,
    #[serde(default)]
    pub package_adjustment: Money,
    #[serde(default)]
    pub show_line_item_prices: bool,
}

impl NewPackage {
    /// An empty fixed-price draft in the given pool.
    pub fn new(name: impl Into<String>, package_type: PackageType) -> Self {
        NewPackage {
            name: name.into(),
            description: String::new(),
            price: Money::zero(),
            is_recommended: false,
            items: Vec::new(),
            features: Vec::new(),
            images: Vec::new(),
            warranty: None,
            scope: None,
            color: None,
            package_type,
            pricing_model: PricingModel::Fixed,
            package_adjustment: Money::zero(),
            show_line_item_prices: false,
        }
    }
}

/// Partial edit of an existing package, as saved from the edit form.
///
/// Items are edited through the snapshot's item operations, and there is
/// deliberately no `package_type` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PackageUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub is_recommended: Option<bool>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    /// An empty string clears the field.
    pub warranty: Option<String>,
    /// An empty string clears the field.
    pub scope: Option<String>,
    /// An empty string clears the field.
    pub color: Option<String>,
    pub pricing_model: Option<PricingModel>,
    pub package_adjustment: Option<Money>,
    pub show_line_item_prices: Option<bool>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults() {
        let pkg = Package::from_draft(NewPackage::new("", PackageType::Addon));

        assert!(pkg.id.starts_with("package-"));
        assert_eq!(pkg.name, DEFAULT_PACKAGE_NAME);
        assert_eq!(pkg.pricing_model, PricingModel::Fixed);
        assert!(pkg.items.is_empty());
        assert!(pkg.features.is_empty());
        assert!(pkg.images.is_empty());
        assert!(pkg.is_addon());
        assert!(!pkg.is_recommended);
    }

    #[test]
    fn test_from_draft_converts_items() {
        let pkg = Package::from_draft(NewPackage {
            items: vec![NewPackageItem {
                name: "Gutter Guards".to_string(),
                quantity: Some(4.0),
                unit_price: Money::from_cents(2500),
                ..Default::default()
            }],
            pricing_model: PricingModel::Itemized,
            ..NewPackage::new("Gutters", PackageType::Addon)
        });

        assert_eq!(pkg.items.len(), 1);
        assert_eq!(pkg.total().cents(), 10000);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut pkg = Package::from_draft(NewPackage {
            warranty: Some("1-year".to_string()),
            ..NewPackage::new("Bronze", PackageType::Tier)
        });

        pkg.apply(PackageUpdate {
            price: Some(Money::from_cents(150000)),
            pricing_model: Some(PricingModel::ItemizedWithAdjustment),
            warranty: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(pkg.name, "Bronze");
        assert_eq!(pkg.price.cents(), 150000);
        assert_eq!(pkg.pricing_model, PricingModel::ItemizedWithAdjustment);
        assert_eq!(pkg.warranty, None);
        assert_eq!(pkg.package_type(), PackageType::Tier);
    }

    #[test]
    fn test_shows_line_items() {
        let mut pkg = Package::from_draft(NewPackage::new("Gold", PackageType::Tier));
        assert!(!pkg.shows_line_items());

        pkg.show_line_item_prices = true;
        assert!(pkg.shows_line_items());

        pkg.show_line_item_prices = false;
        pkg.pricing_model = PricingModel::Itemized;
        assert!(pkg.shows_line_items());
    }

    #[test]
    fn test_pricing_model_spellings() {
        for model in [
            PricingModel::Fixed,
            PricingModel::Itemized,
            PricingModel::ItemizedWithAdjustment,
        ] {
            assert_eq!(model.as_str().parse::<PricingModel>().unwrap(), model);
            assert_eq!(
                serde_json::to_value(model).unwrap(),
                serde_json::Value::String(model.as_str().to_string())
            );
        }
        assert_eq!(PricingModel::ItemizedWithAdjustment.label(), "Adjusted");
        assert!(matches!(
            "tiered".parse::<PricingModel>(),
            Err(CoreError::UnknownPricingModel(s)) if s == "tiered"
        ));
    }

    #[test]
    fn test_package_type_spellings() {
        assert_eq!("tier".parse::<PackageType>().unwrap(), PackageType::Tier);
        assert_eq!("addon".parse::<PackageType>().unwrap(), PackageType::Addon);
        assert_eq!(PackageType::Addon.to_string(), "addon");
        assert!("add-on".parse::<PackageType>().is_err());
    }

    #[test]
    fn test_new_package_deserializes_with_defaults() {
        let draft: NewPackage =
            serde_json::from_str(r#"{"name":"Silver","packageType":"tier"}"#).unwrap();

        assert_eq!(draft.package_type, PackageType::Tier);
        assert_eq!(draft.pricing_model, PricingModel::Fixed);
        assert!(draft.price.is_zero());
    }

    #[test]
    fn test_new_package_requires_package_type() {
        let result: Result<NewPackage, _> = serde_json::from_str(r#"{"name":"Silver"}"#);
        assert!(result.is_err());
    }
}
