//! # Item Commands
//!
//! Commands for the line items inside a package.
//!
//! ## Where Items Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "Add Item" form ──────────► add_item_to_package()  ─┐                  │
//! │  Overview line item ───────► import_line_item()     ─┤                  │
//! │  Catalog search result ────► add_catalog_product()  ─┼──► package.items │
//! │  "Add Area" form ──────────► add_area_to_package()  ─┘                  │
//! │                                                                         │
//! │  Every item's total is quantity × unit price, recomputed on each edit. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use proposal_core::input::{coerce_amount, coerce_quantity};
use proposal_core::validation::validate_item_name;
use proposal_core::{CatalogProduct, ItemUpdate, NewArea, NewPackageItem, OverviewLineItem};
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{EditorConfig, ProposalState, SnapshotResponse};

/// The "Add Item" form as typed, before any parsing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    /// Blank means the field was left alone and the quantity is 1.
    pub quantity: String,
    pub unit_price: String,
    pub category: String,
    pub is_optional: bool,
}

impl ItemForm {
    fn into_draft(self, config: &EditorConfig) -> NewPackageItem {
        let quantity = if self.quantity.trim().is_empty() {
            None
        } else {
            Some(coerce_quantity(&self.quantity))
        };
        let category = if self.category.trim().is_empty() {
            config.default_item_category.clone()
        } else {
            self.category
        };

        NewPackageItem {
            name: self.name,
            description: self.description,
            quantity,
            unit_price: coerce_amount(&self.unit_price),
            category: Some(category),
            is_optional: self.is_optional,
        }
    }
}

/// The "Add Area" form as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AreaForm {
    pub name: String,
    pub description: String,
    pub total_price: String,
}

/// Adds a line item to a package from the "Add Item" form.
///
/// ## Errors
/// `VALIDATION_ERROR` when the item name is blank
pub fn add_item_to_package(
    state: &ProposalState,
    config: &EditorConfig,
    package_id: &str,
    form: ItemForm,
) -> Result<SnapshotResponse, ApiError> {
    debug!(
        package_id = %package_id,
        name = %form.name,
        quantity = %form.quantity,
        unit_price = %form.unit_price,
        "add_item_to_package command"
    );
    validate_item_name(&form.name)?;
    let draft = form.into_draft(config);

    Ok(state.apply(|s| s.add_item_to_package(package_id, draft)))
}

/// Copies a line item from the proposal overview into a package.
///
/// Name, description, quantity and unit price are copied as they are; the
/// overview's tax rate is not part of the package price.
pub fn import_line_item(
    state: &ProposalState,
    config: &EditorConfig,
    package_id: &str,
    line: &OverviewLineItem,
) -> SnapshotResponse {
    debug!(package_id = %package_id, line_item_id = %line.id, "import_line_item command");
    let draft = NewPackageItem {
        category: Some(config.default_item_category.clone()),
        ..NewPackageItem::from(line)
    };

    state.apply(|s| s.add_item_to_package(package_id, draft))
}

/// Adds a catalog product as a single-quantity item in its own category.
pub fn add_catalog_product(
    state: &ProposalState,
    package_id: &str,
    product: &CatalogProduct,
) -> SnapshotResponse {
    debug!(package_id = %package_id, product = %product.name, "add_catalog_product command");
    let draft = NewPackageItem::from(product);

    state.apply(|s| s.add_item_to_package(package_id, draft))
}

/// Adds a measured area as one item priced at the area's total.
///
/// ## Errors
/// `VALIDATION_ERROR` when the area name is blank
pub fn add_area_to_package(
    state: &ProposalState,
    package_id: &str,
    form: AreaForm,
) -> Result<SnapshotResponse, ApiError> {
    debug!(package_id = %package_id, name = %form.name, "add_area_to_package command");
    validate_item_name(&form.name)?;
    let area = NewArea {
        total_price: coerce_amount(&form.total_price),
        name: form.name,
        description: form.description,
    };

    Ok(state.apply(|s| s.add_area_to_package(package_id, area)))
}

/// Saves an item edit. The item total is recomputed.
///
/// ## Errors
/// `VALIDATION_ERROR` when a new name is given and it is blank
pub fn update_package_item(
    state: &ProposalState,
    package_id: &str,
    item_id: &str,
    update: ItemUpdate,
) -> Result<SnapshotResponse, ApiError> {
    debug!(package_id = %package_id, item_id = %item_id, "update_package_item command");
    if let Some(name) = &update.name {
        validate_item_name(name)?;
    }

    Ok(state.apply(|s| s.update_package_item(package_id, item_id, update)))
}

/// Sets an item's quantity from the inline quantity field.
pub fn set_item_quantity(
    state: &ProposalState,
    package_id: &str,
    item_id: &str,
    raw: &str,
) -> SnapshotResponse {
    debug!(package_id = %package_id, item_id = %item_id, raw = %raw, "set_item_quantity command");
    let update = ItemUpdate {
        quantity: Some(coerce_quantity(raw)),
        ..Default::default()
    };

    state.apply(|s| s.update_package_item(package_id, item_id, update))
}

/// Sets an item's unit price from the inline price field.
pub fn set_item_unit_price(
    state: &ProposalState,
    package_id: &str,
    item_id: &str,
    raw: &str,
) -> SnapshotResponse {
    debug!(package_id = %package_id, item_id = %item_id, raw = %raw, "set_item_unit_price command");
    let update = ItemUpdate {
        unit_price: Some(coerce_amount(raw)),
        ..Default::default()
    };

    state.apply(|s| s.update_package_item(package_id, item_id, update))
}

pub fn remove_item_from_package(
    state: &ProposalState,
    package_id: &str,
    item_id: &str,
) -> SnapshotResponse {
    debug!(package_id = %package_id, item_id = %item_id, "remove_item_from_package command");
    state.apply(|s| s.remove_item_from_package(package_id, item_id))
}
