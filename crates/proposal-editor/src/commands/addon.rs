//! # Add-On Commands
//!
//! Global add-ons: single-price extras that carry their own selected flag,
//! independent of the tier and add-on package selections.

use proposal_core::input::coerce_amount;
use proposal_core::validation::validate_add_on_name;
use proposal_core::NewAddOn;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ProposalState, SnapshotResponse};

/// The "Add Add-On" form as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOnForm {
    pub name: String,
    pub description: String,
    pub price: String,
    /// Blank means no category.
    pub category: String,
}

impl From<AddOnForm> for NewAddOn {
    fn from(form: AddOnForm) -> Self {
        let category = Some(form.category).filter(|c| !c.trim().is_empty());
        NewAddOn {
            price: coerce_amount(&form.price),
            name: form.name,
            description: form.description,
            category,
        }
    }
}

/// Adds an unselected global add-on.
///
/// ## Errors
/// `VALIDATION_ERROR` when the name is blank
pub fn add_add_on(state: &ProposalState, form: AddOnForm) -> Result<SnapshotResponse, ApiError> {
    debug!(name = %form.name, price = %form.price, "add_add_on command");
    validate_add_on_name(&form.name)?;
    let draft = NewAddOn::from(form);

    Ok(state.apply(|s| s.add_add_on(draft)))
}

/// Flips an add-on's selected flag.
pub fn toggle_add_on(state: &ProposalState, add_on_id: &str) -> SnapshotResponse {
    debug!(add_on_id = %add_on_id, "toggle_add_on command");
    state.apply(|s| s.toggle_add_on(add_on_id))
}

pub fn remove_add_on(state: &ProposalState, add_on_id: &str) -> SnapshotResponse {
    debug!(add_on_id = %add_on_id, "remove_add_on command");
    state.apply(|s| s.remove_add_on(add_on_id))
}
