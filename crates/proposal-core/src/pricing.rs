//! # Pricing Calculators
//!
//! The two pure calculators every total in the engine is built from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_item_total(qty, unit)  =  qty × unit                           │
//! │                                                                         │
//! │  compute_package_total(pkg):                                            │
//! │    Fixed                   →  pkg.price            (items ignored)      │
//! │    Itemized                →  Σ item.total_price   (optional included)  │
//! │    ItemizedWithAdjustment  →  Σ item.total_price + pkg.adjustment       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither result is ever cached on a record: items can be added or removed
//! independently, so package totals are re-derived on every read.

use crate::money::Money;
use crate::package::{Package, PricingModel};

/// Line total for a quantity at a unit price.
///
/// No validation: zero or negative inputs produce zero or negative totals.
#[inline]
pub fn compute_item_total(quantity: f64, unit_price: Money) -> Money {
    unit_price.multiply_quantity(quantity)
}

/// Sum of every item's stored total, optional items included.
pub fn items_subtotal(package: &Package) -> Money {
    package.items.iter().map(|item| item.total_price()).sum()
}

/// The amount a package contributes when selected.
pub fn compute_package_total(package: &Package) -> Money {
    match package.pricing_model {
        PricingModel::Fixed => package.price,
        PricingModel::Itemized => items_subtotal(package),
        PricingModel::ItemizedWithAdjustment => {
            items_subtotal(package) + package.package_adjustment
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
