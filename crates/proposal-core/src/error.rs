//! # Error Types
//!
//! Domain-specific error types for proposal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  proposal-core errors (this file)                                      │
//! │  ├── CoreError        - Parsing wire spellings of enums                │
//! │  └── ValidationError  - Host-side form gating                          │
//! │                                                                         │
//! │  proposal-editor errors (separate crate)                               │
//! │  └── ApiError         - What the editor view sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Editor view            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Snapshot operations never fail. An id that no longer resolves (the
//! package was deleted, the add-on was removed) makes the operation a no-op,
//! and non-numeric form input is coerced to zero in [`crate::input`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A pricing model spelling the engine does not know.
    ///
    /// ## When This Occurs
    /// - The host hands over a package serialized by a newer editor
    /// - A form submits a free-text model name
    #[error("Unknown pricing model: {0}")]
    UnknownPricingModel(String),

    /// A package type spelling other than `tier` or `addon`.
    #[error("Unknown package type: {0}")]
    UnknownPackageType(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The engine accepts anything; the host calls the validators in
/// [`crate::validation`] to decide whether a form may be submitted.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownPricingModel("tiered".to_string());
        assert_eq!(err.to_string(), "Unknown pricing model: tiered");

        let err = CoreError::UnknownPackageType("bundle".to_string());
        assert_eq!(err.to_string(), "Unknown package type: bundle");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "package name".to_string(),
        };
        assert_eq!(err.to_string(), "package name is required");

        let err = ValidationError::TooLong {
            field: "feature".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "feature must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
