//! # Validation Module
//!
//! Form gating helpers for the hosting editor.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Editor view                                                  │
//! │  ├── Disables "Add" until a name is typed                              │
//! │  └── THIS MODULE: the rules that decision is based on                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Snapshot operations                                          │
//! │  └── Accept anything: blank names fall back to defaults,               │
//! │      bad numbers were already coerced to zero                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot never calls these itself; a proposal restored from the host
//! may legitimately hold values that would fail them.

use crate::error::ValidationError;
use crate::{MAX_FEATURE_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a package name before a tier or add-on package is created.
///
/// ## Example
/// ```rust
/// use proposal_core::validation::validate_package_name;
///
/// assert!(validate_package_name("Silver").is_ok());
/// assert!(validate_package_name("   ").is_err());
/// ```
pub fn validate_package_name(name: &str) -> ValidationResult<()> {
    validate_required_text("package name", name, MAX_NAME_LEN)
}

/// Validates a line item name before it is added to a package.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_required_text("item name", name, MAX_NAME_LEN)
}

/// Validates a global add-on name.
pub fn validate_add_on_name(name: &str) -> ValidationResult<()> {
    validate_required_text("add-on name", name, MAX_NAME_LEN)
}

/// Validates a single feature bullet.
pub fn validate_feature(feature: &str) -> ValidationResult<()> {
    validate_required_text("feature", feature, MAX_FEATURE_LEN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_package_name() {
        assert!(validate_package_name("Gold").is_ok());
        assert!(validate_package_name("  Extended Service  ").is_ok());

        assert!(validate_package_name("").is_err());
        assert!(validate_package_name("   ").is_err());
        assert!(validate_package_name(&"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Exterior Painting").is_ok());
        assert!(matches!(
            validate_item_name(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_add_on_name() {
        assert!(validate_add_on_name("Warranty").is_ok());
        assert!(validate_add_on_name("\t").is_err());
    }

    #[test]
    fn test_validate_feature_length_counts_chars() {
        // Multi-byte characters count once each.
        assert!(validate_feature(&"é".repeat(MAX_FEATURE_LEN)).is_ok());
        assert!(matches!(
            validate_feature(&"é".repeat(MAX_FEATURE_LEN + 1)),
            Err(ValidationError::TooLong { max, .. }) if max == MAX_FEATURE_LEN
        ));
    }
}
