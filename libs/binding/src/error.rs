//! Binding-level errors.
//!
//! The error surface of `populate` is deliberately narrow: every failure is
//! one of exactly two shapes, each carrying the parameter or field name the
//! caller should surface to the client. Underlying cast and constraint
//! failures are never swallowed; they stay reachable through
//! `std::error::Error::source()` for diagnostics.

use thiserror::Error;

use crate::cast::CastError;
use crate::constraint::ConstraintError;

/// A header binding failure.
///
/// `MissingValue` covers a header that is absent (or explicitly empty)
/// where the signature does not permit that; `CastFailure` covers a header
/// that is present but not convertible or validatable to the declared type.
/// Both abort the enclosing `populate` call on first occurrence.
#[derive(Debug, Error)]
pub enum BindingError {
    /// Header absent or empty where not permitted
    #[error("no header value found for '{header}'")]
    MissingValue { header: String },

    /// Value present but not convertible/validatable to the declared type
    #[error("header binding failed for parameter: '{header}'")]
    CastFailure {
        header: String,
        #[source]
        cause: FailureCause,
    },
}

/// Underlying cause of a [`BindingError::CastFailure`].
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Cast(#[from] CastError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

impl BindingError {
    /// Create a MissingValue error for the named header.
    pub fn missing_value(header: impl Into<String>) -> Self {
        Self::MissingValue {
            header: header.into(),
        }
    }

    /// Create a CastFailure error wrapping the underlying cause.
    pub fn cast_failure(header: impl Into<String>, cause: impl Into<FailureCause>) -> Self {
        Self::CastFailure {
            header: header.into(),
            cause: cause.into(),
        }
    }

    /// The header or field name this failure reports on.
    pub fn header(&self) -> &str {
        match self {
            Self::MissingValue { header } => header,
            Self::CastFailure { header, .. } => header,
        }
    }
}

/// Result type for binding operations.
pub type BindingResult<T> = std::result::Result<T, BindingError>;
