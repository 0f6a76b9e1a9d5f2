//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are informational outcomes, not fatal failures: callers decide how to
/// present them. Nothing in the domain layer prints or panics on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item is stored under the identifier.
    #[error("item with ID {0} not found")]
    NotFound(ItemId),

    /// An item is already stored under the identifier.
    #[error("item with ID {0} already exists")]
    AlreadyExists(ItemId),

    /// Raw operator input could not be coerced into the field's type.
    #[error("invalid {field} {input:?}: {reason}")]
    InputCoercion {
        field: &'static str,
        input: String,
        reason: String,
    },

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(id: impl Into<ItemId>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn already_exists(id: impl Into<ItemId>) -> Self {
        Self::AlreadyExists(id.into())
    }

    pub fn coercion(
        field: &'static str,
        input: impl Into<String>,
        reason: impl core::fmt::Display,
    ) -> Self {
        Self::InputCoercion {
            field,
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for lookup misses, the one outcome every keyed operation can report.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
