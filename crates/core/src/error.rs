//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Which piece of user input was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationKind {
    MissingName,
    MissingExpiry,
    InvalidQuantity,
    MissingOutcome,
    InvalidOutcome,
}

impl ValidationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::MissingName => "missing-name",
            ValidationKind::MissingExpiry => "missing-expiry",
            ValidationKind::InvalidQuantity => "invalid-quantity",
            ValidationKind::MissingOutcome => "missing-outcome",
            ValidationKind::InvalidOutcome => "invalid-outcome",
        }
    }
}

impl core::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level error.
///
/// Every variant is recoverable: the rejected command leaves the store
/// untouched and the caller decides how to surface the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User input failed validation.
    #[error("validation failed: {0}")]
    Validation(ValidationKind),

    /// A date was malformed or does not exist on the calendar.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A state-machine or store invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind) -> Self {
        Self::Validation(kind)
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// The validation kind, if this is a validation failure.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind) => Some(*kind),
            _ => None,
        }
    }
}
