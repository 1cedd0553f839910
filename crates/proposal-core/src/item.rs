//! # Package Items
//!
//! Priced lines inside a package, and the drafts they are built from.
//!
//! ## Where Items Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Direct entry ──────────► NewPackageItem ─┐                             │
//! │  CatalogProduct ──From──► NewPackageItem ─┼─► PackageItem::from_draft   │
//! │  OverviewLineItem ─From─► NewPackageItem ─┘        (fresh id,           │
//! │                                                     total computed)     │
//! │  NewArea ───────────────────────────────────► PackageItem::from_area    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! `total_price == quantity × unit_price` at all times. The three fields are
//! private; the only ways to change quantity or unit price go through
//! [`PackageItem::set_quantity`], [`PackageItem::set_unit_price`] and
//! [`PackageItem::apply`], which recompute the total.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::compute_item_total;
use crate::{
    fresh_id, or_default, AREA_ITEM_CATEGORY, DEFAULT_AREA_NAME, DEFAULT_ITEM_CATEGORY,
    DEFAULT_ITEM_NAME,
};

// =============================================================================
// Package Item
// =============================================================================

/// A priced line inside exactly one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PackageItem {
    pub id: String,
    pub name: String,
    /// Rich text from the description editor, stored untouched.
    pub description: String,
    quantity: f64,
    unit_price: Money,
    total_price: Money,
    pub category: String,
    /// Display label only; optional items still count toward totals.
    pub is_optional: bool,
}

impl PackageItem {
    /// Builds an item from a draft, assigning a fresh id and applying the
    /// editor defaults (name, quantity 1, category).
    pub fn from_draft(draft: NewPackageItem) -> Self {
        let quantity = draft.quantity.unwrap_or(1.0);
        PackageItem {
            id: fresh_id("package-item"),
            name: or_default(draft.name, DEFAULT_ITEM_NAME),
            description: draft.description,
            quantity,
            unit_price: draft.unit_price,
            total_price: compute_item_total(quantity, draft.unit_price),
            category: or_default(draft.category.unwrap_or_default(), DEFAULT_ITEM_CATEGORY),
            is_optional: draft.is_optional,
        }
    }

    /// Builds a single-quantity item priced at the area's total.
    pub fn from_area(area: NewArea) -> Self {
        PackageItem {
            id: fresh_id("package-area"),
            name: or_default(area.name, DEFAULT_AREA_NAME),
            description: area.description,
            quantity: 1.0,
            unit_price: area.total_price,
            total_price: area.total_price,
            category: AREA_ITEM_CATEGORY.to_string(),
            is_optional: false,
        }
    }

    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Line total, always `quantity × unit_price`.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.recompute_total();
    }

    pub fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price;
        self.recompute_total();
    }

    /// Applies a partial edit. Fields left as `None` are unchanged.
    pub fn apply(&mut self, update: ItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(unit_price) = update.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(is_optional) = update.is_optional {
            self.is_optional = is_optional;
        }
        self.recompute_total();
    }

    /// Re-derives the stored total. Used after edits and when adopting
    /// items handed back by the host, whose totals may be stale.
    pub(crate) fn recompute_total(&mut self) {
        self.total_price = compute_item_total(self.quantity, self.unit_price);
    }
}

// =============================================================================
// Drafts
// =============================================================================

/// Item data as entered in the "Add Item" form.
///
/// `quantity: None` means the field was never filled in and becomes 1.
/// A filled-in but non-numeric quantity was already coerced to 0 by
/// [`crate::input::coerce_quantity`] and stays 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct NewPackageItem {
    pub name: String,
    pub description: String,
    pub quantity: Option<f64>,
    pub unit_price: Money,
    pub category: Option<String>,
    pub is_optional: bool,
}

/// Area data as entered in the "Add Area" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct NewArea {
    pub name: String,
    pub description: String,
    pub total_price: Money,
}

/// Partial edit of an existing item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<Money>,
    pub category: Option<String>,
    pub is_optional: Option<bool>,
}

// =============================================================================
// Inbound Collaborators
// =============================================================================

/// A line item from the proposal overview, offered for import.
///
/// Owned by the overview; the engine copies values out and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OverviewLineItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: Money,
    pub total_price: Money,
    /// Percentage, e.g. 8.25. Shown in the form but never priced.
    pub tax_rate: Option<f64>,
}

impl From<&OverviewLineItem> for NewPackageItem {
    fn from(line: &OverviewLineItem) -> Self {
        NewPackageItem {
            name: line.name.clone(),
            description: line.description.clone(),
            quantity: Some(line.quantity),
            unit_price: line.unit_price,
            category: None,
            is_optional: false,
        }
    }
}

/// A product or service from the catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogProduct {
    pub name: String,
    pub price: Money,
    pub description: String,
    pub category: String,
}

impl From<&CatalogProduct> for NewPackageItem {
    fn from(product: &CatalogProduct) -> Self {
        NewPackageItem {
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: None,
            unit_price: product.price,
            category: Some(product.category.clone()),
            is_optional: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: f64, unit_cents: i64) -> NewPackageItem {
        NewPackageItem {
            name: name.to_string(),
            quantity: Some(quantity),
            unit_price: Money::from_cents(unit_cents),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_draft_computes_total() {
        let item = PackageItem::from_draft(draft("Trim Work", 2.0, 5000));

        assert!(item.id.starts_with("package-item-"));
        assert_eq!(item.total_price().cents(), 10000);
        assert_eq!(item.category, DEFAULT_ITEM_CATEGORY);
        assert!(!item.is_optional);
    }

    #[test]
    fn test_from_draft_defaults() {
        let item = PackageItem::from_draft(NewPackageItem {
            unit_price: Money::from_cents(1200),
            ..Default::default()
        });

        assert_eq!(item.name, DEFAULT_ITEM_NAME);
        assert_eq!(item.quantity(), 1.0);
        assert_eq!(item.total_price().cents(), 1200);
    }

    #[test]
    fn test_zero_quantity_is_kept() {
        let item = PackageItem::from_draft(draft("Nothing", 0.0, 5000));
        assert_eq!(item.quantity(), 0.0);
        assert!(item.total_price().is_zero());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = PackageItem::from_draft(draft("A", 1.0, 100));
        let b = PackageItem::from_draft(draft("A", 1.0, 100));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_setters_recompute_total() {
        let mut item = PackageItem::from_draft(draft("Deck Staining", 1.0, 120000));

        item.set_quantity(3.0);
        assert_eq!(item.total_price().cents(), 360000);

        item.set_unit_price(Money::from_cents(100000));
        assert_eq!(item.total_price().cents(), 300000);
    }

    #[test]
    fn test_apply_recomputes_total() {
        let mut item = PackageItem::from_draft(draft("Drywall Repair", 1.0, 30000));

        item.apply(ItemUpdate {
            quantity: Some(2.0),
            unit_price: Some(Money::from_cents(25000)),
            is_optional: Some(true),
            ..Default::default()
        });

        assert_eq!(item.name, "Drywall Repair");
        assert_eq!(item.total_price().cents(), 50000);
        assert!(item.is_optional);
    }

    #[test]
    fn test_from_area() {
        let item = PackageItem::from_area(NewArea {
            name: "Master Bedroom".to_string(),
            description: String::new(),
            total_price: Money::from_cents(75000),
        });

        assert!(item.id.starts_with("package-area-"));
        assert_eq!(item.quantity(), 1.0);
        assert_eq!(item.unit_price().cents(), 75000);
        assert_eq!(item.total_price().cents(), 75000);
        assert_eq!(item.category, AREA_ITEM_CATEGORY);
    }

    #[test]
    fn test_import_overview_line_item_copies_values() {
        let line = OverviewLineItem {
            id: "li-7".to_string(),
            name: "Pressure Washing".to_string(),
            description: "<p>Siding and decks</p>".to_string(),
            quantity: 2.0,
            unit_price: Money::from_cents(35000),
            total_price: Money::from_cents(70000),
            tax_rate: Some(8.25),
        };

        let item = PackageItem::from_draft(NewPackageItem::from(&line));

        assert_ne!(item.id, line.id);
        assert_eq!(item.name, line.name);
        assert_eq!(item.description, line.description);
        assert_eq!(item.quantity(), 2.0);
        assert_eq!(item.total_price(), line.total_price);
    }

    #[test]
    fn test_catalog_product_becomes_single_quantity_draft() {
        let product = CatalogProduct {
            name: "Fence Staining".to_string(),
            price: Money::from_cents(65000),
            description: "<p>Posts and pickets</p>".to_string(),
            category: "Staining".to_string(),
        };

        let item = PackageItem::from_draft(NewPackageItem::from(&product));

        assert_eq!(item.quantity(), 1.0);
        assert_eq!(item.category, "Staining");
        assert_eq!(item.total_price().cents(), 65000);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let item = PackageItem::from_draft(draft("Trim Work", 1.0, 80000));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["unitPrice"], 80000);
        assert_eq!(json["totalPrice"], 80000);
        assert_eq!(json["isOptional"], false);
    }
}
