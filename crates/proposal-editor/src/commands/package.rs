//! # Package Commands
//!
//! Commands for creating, editing and deleting tier and add-on packages.
//!
//! ## Package Card Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Add     │────►│  Card    │────►│ Deleted  │                         │
//! │  │  Form    │     │          │     │          │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │   add_package          │         delete_package                         │
//! │   load_default_        │         (clears its selection)                 │
//! │   tier_template        ▼                                                │
//! │                   update_package, set_pricing_model,                    │
//! │                   set_package_price, set_package_adjustment,            │
//! │                   add_feature, remove_feature                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use proposal_core::input::coerce_amount;
use proposal_core::validation::{validate_feature, validate_package_name};
use proposal_core::{Money, NewPackage, PackageUpdate, PricingModel};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ProposalState, SnapshotResponse};

/// Gets the current pricing section.
///
/// ## Returns
/// Packages, add-ons, both selections and the totals breakdown
pub fn get_snapshot(state: &ProposalState) -> SnapshotResponse {
    debug!("get_snapshot command");
    state.with_snapshot(|s| SnapshotResponse::from(s))
}

/// Adds a tier or add-on package.
///
/// ## Errors
/// `VALIDATION_ERROR` when the name is blank or too long
pub fn add_package(state: &ProposalState, draft: NewPackage) -> Result<SnapshotResponse, ApiError> {
    debug!(
        name = %draft.name,
        package_type = %draft.package_type,
        pricing_model = %draft.pricing_model,
        "add_package command"
    );
    validate_package_name(&draft.name)?;

    Ok(state.apply(|s| s.add_package(draft)))
}

/// Saves the package edit form.
///
/// ## Errors
/// `VALIDATION_ERROR` when a new name is given and it is blank
pub fn update_package(
    state: &ProposalState,
    package_id: &str,
    update: PackageUpdate,
) -> Result<SnapshotResponse, ApiError> {
    debug!(package_id = %package_id, "update_package command");
    if let Some(name) = &update.name {
        validate_package_name(name)?;
    }

    Ok(state.apply(|s| s.update_package(package_id, update)))
}

/// Switches a package's pricing model from the model dropdown.
///
/// ## Arguments
/// * `pricing_model` - `fixed`, `itemized` or `itemized-with-adjustment`
///
/// ## Errors
/// `INVALID_INPUT` for any other spelling
pub fn set_pricing_model(
    state: &ProposalState,
    package_id: &str,
    pricing_model: &str,
) -> Result<SnapshotResponse, ApiError> {
    debug!(package_id = %package_id, pricing_model = %pricing_model, "set_pricing_model command");
    let pricing_model: PricingModel = pricing_model.parse()?;

    Ok(state.apply(|s| {
        s.update_package(
            package_id,
            PackageUpdate {
                pricing_model: Some(pricing_model),
                ..Default::default()
            },
        )
    }))
}

/// Sets the fixed price from the price field. Non-numeric text is zero.
pub fn set_package_price(state: &ProposalState, package_id: &str, raw: &str) -> SnapshotResponse {
    debug!(package_id = %package_id, raw = %raw, "set_package_price command");
    let price = coerce_amount(raw);

    state.apply(|s| {
        s.update_package(
            package_id,
            PackageUpdate {
                price: Some(price),
                ..Default::default()
            },
        )
    })
}

/// Sets the adjustment from the adjustment field. Negative values are
/// discounts; non-numeric text is zero.
pub fn set_package_adjustment(
    state: &ProposalState,
    package_id: &str,
    raw: &str,
) -> SnapshotResponse {
    debug!(package_id = %package_id, raw = %raw, "set_package_adjustment command");
    let adjustment = coerce_amount(raw);

    state.apply(|s| {
        s.update_package(
            package_id,
            PackageUpdate {
                package_adjustment: Some(adjustment),
                ..Default::default()
            },
        )
    })
}

/// Deletes a package and drops it from whichever selection held it.
pub fn delete_package(state: &ProposalState, package_id: &str) -> SnapshotResponse {
    debug!(package_id = %package_id, "delete_package command");
    state.apply(|s| s.delete_package(package_id))
}

/// Appends a feature bullet.
///
/// ## Errors
/// `VALIDATION_ERROR` when the text is blank or too long
pub fn add_feature(
    state: &ProposalState,
    package_id: &str,
    feature: &str,
) -> Result<SnapshotResponse, ApiError> {
    debug!(package_id = %package_id, feature = %feature, "add_feature command");
    validate_feature(feature)?;

    Ok(state.apply(|s| s.add_feature(package_id, feature)))
}

pub fn remove_feature(state: &ProposalState, package_id: &str, index: usize) -> SnapshotResponse {
    debug!(package_id = %package_id, index = index, "remove_feature command");
    state.apply(|s| s.remove_feature(package_id, index))
}

/// Gets one package's total under its pricing model.
///
/// ## Errors
/// `NOT_FOUND` when no package has this id
pub fn get_package_total(state: &ProposalState, package_id: &str) -> Result<Money, ApiError> {
    debug!(package_id = %package_id, "get_package_total command");
    state
        .with_snapshot(|s| s.package(package_id).map(|pkg| pkg.total()))
        .ok_or_else(|| ApiError::not_found("Package", package_id))
}

/// Appends the Bronze, Silver and Gold tiers.
///
/// The editor only offers this while the tier pool is empty, but calling
/// it again simply appends three more.
pub fn load_default_tier_template(state: &ProposalState) -> SnapshotResponse {
    debug!("load_default_tier_template command");
    let response = state.apply(|s| s.load_default_tier_template());
    info!(packages = response.packages.len(), "Default tiers loaded");
    response
}
