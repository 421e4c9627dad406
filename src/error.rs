//! Crate-wide error type.
//!
//! Every failure the library can surface is detected synchronously at a call
//! boundary and handed straight back to the caller; nothing is retried or
//! recovered internally.

use std::fmt;

/// Result type alias for library operations.
pub type NetResult<T> = Result<T, NetError>;

#[derive(Debug, Clone, PartialEq)]
pub enum NetError {
    /// A vector handed to the network does not match the expected layer width.
    DimensionMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    /// A constructor was given a value it cannot build a valid object from.
    InvalidConfiguration {
        parameter: String,
        value: String,
        reason: String,
    },

    /// The training set contains no examples.
    EmptyDataset,
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::DimensionMismatch {
                expected,
                got,
                context,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {}: expected length {}, got {}",
                    context, expected, got
                )
            }
            NetError::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration for parameter '{}' with value '{}': {}",
                    parameter, value, reason
                )
            }
            NetError::EmptyDataset => {
                write!(f, "Empty dataset: training requires at least one example")
            }
        }
    }
}

impl std::error::Error for NetError {}

// Convenience constructors for common error patterns
impl NetError {
    pub fn dimension_mismatch(expected: usize, got: usize, context: impl Into<String>) -> Self {
        NetError::DimensionMismatch {
            expected,
            got,
            context: context.into(),
        }
    }

    pub fn invalid_config(
        parameter: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        NetError::InvalidConfiguration {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
