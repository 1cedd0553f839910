//! # proposal-core: Package Pricing for Sales Proposals
//!
//! This crate is the pricing engine behind a proposal's "packaged pricing"
//! section: Good/Better/Best tiers, optional add-on packages, standalone
//! add-ons, and the total the customer owes for whatever they picked.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Proposal Editor (host app)                          │
//! │     Package cards ──► Edit forms ──► Selection ──► Grand total          │
//! └─────────────────────────────────┬───────────────────────────────────────┘
//!                                   │ commands (proposal-editor crate)
//! ┌─────────────────────────────────▼───────────────────────────────────────┐
//! │               ★ proposal-core (THIS CRATE) ★                            │
//! │                                                                         │
//! │   ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐           │
//! │   │ repository │ │  registry  │ │ selection  │ │  template  │           │
//! │   │ packages,  │ │ global     │ │ tier radio,│ │ Bronze /   │           │
//! │   │ items      │ │ add-ons    │ │ add-on set │ │ Silver/Gold│           │
//! │   └─────┬──────┘ └─────┬──────┘ └─────┬──────┘ └─────┬──────┘           │
//! │         └──────────────┴──────┬───────┴──────────────┘                  │
//! │                               ▼                                         │
//! │                      PricingSnapshot ──► pricing ──► totals             │
//! │                                                                         │
//! │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents
//! - [`item`], [`package`], [`addon`] - Domain types and their drafts
//! - [`pricing`] - Item and package total calculators
//! - [`snapshot`] - The four-part state handed to the host
//! - [`repository`], [`registry`], [`selection`], [`template`] - Snapshot operations
//! - [`totals`] - Grand total aggregation
//! - [`input`] - Lenient parsing of form text
//! - [`validation`] - Host-side form gating
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use proposal_core::{Money, NewAddOn, NewPackage, NewPackageItem, PackageType, PricingModel, PricingSnapshot};
//!
//! let snapshot = PricingSnapshot::new().add_package(NewPackage {
//!     pricing_model: PricingModel::Itemized,
//!     ..NewPackage::new("Silver", PackageType::Tier)
//! });
//! let silver = snapshot.packages()[0].id.clone();
//!
//! let snapshot = snapshot
//!     .add_item_to_package(&silver, NewPackageItem {
//!         name: "Exterior Painting".to_string(),
//!         quantity: Some(1.0),
//!         unit_price: Money::from_cents(250_000),
//!         ..Default::default()
//!     })
//!     .add_add_on(NewAddOn {
//!         name: "Warranty".to_string(),
//!         price: Money::from_cents(9_900),
//!         ..Default::default()
//!     });
//! let warranty = snapshot.add_ons()[0].id.clone();
//!
//! let snapshot = snapshot.select_tier(&silver).toggle_add_on(&warranty);
//! assert_eq!(snapshot.grand_total().cents(), 259_900);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod addon;
pub mod error;
pub mod input;
pub mod item;
pub mod money;
pub mod package;
pub mod pricing;
pub mod registry;
pub mod repository;
pub mod selection;
pub mod snapshot;
pub mod template;
pub mod totals;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use addon::{AddOn, NewAddOn};
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{CatalogProduct, ItemUpdate, NewArea, NewPackageItem, OverviewLineItem, PackageItem};
pub use money::Money;
pub use package::{NewPackage, Package, PackageType, PackageUpdate, PricingModel};
pub use pricing::{compute_item_total, compute_package_total};
pub use snapshot::{PricingSnapshot, SnapshotParts};
pub use totals::{compute_grand_total, Totals};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category given to items whose form left the category blank.
pub const DEFAULT_ITEM_CATEGORY: &str = "General";

/// Category of items created through "Add Area".
pub const AREA_ITEM_CATEGORY: &str = "Area";

pub const DEFAULT_PACKAGE_NAME: &str = "New Package";
pub const DEFAULT_ITEM_NAME: &str = "New Item";
pub const DEFAULT_AREA_NAME: &str = "New Area";
pub const DEFAULT_ADD_ON_NAME: &str = "New Add-On";

/// Maximum length of package, item and add-on names, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a single feature bullet, in characters.
pub const MAX_FEATURE_LEN: usize = 200;

// =============================================================================
// Crate-Internal Helpers
// =============================================================================

/// A new opaque id such as `package-6f1c…`.
pub(crate) fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// `value`, or `default` when `value` is blank.
pub(crate) fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}
