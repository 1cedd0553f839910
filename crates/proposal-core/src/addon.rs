//! # Global Add-Ons
//!
//! Standalone optional extras that sit outside the package pools. Each one
//! carries its own `is_selected` flag instead of appearing in a selection
//! id list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{fresh_id, or_default, DEFAULT_ADD_ON_NAME};

/// A global add-on such as a warranty or a disposal fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Option<String>,
    pub is_selected: bool,
}

impl AddOn {
    /// Builds an unselected add-on from a draft, assigning a fresh id.
    pub fn from_draft(draft: NewAddOn) -> Self {
        AddOn {
            id: fresh_id("addon"),
            name: or_default(draft.name, DEFAULT_ADD_ON_NAME),
            description: draft.description,
            price: draft.price,
            category: draft.category.filter(|c| !c.trim().is_empty()),
            is_selected: false,
        }
    }
}

/// Add-on data as entered in the "Add Add-On" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct NewAddOn {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Option<String>,
}
