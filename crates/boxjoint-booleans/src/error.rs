//! Error types for boolean requests.

use thiserror::Error;

use crate::api::BooleanOp;

/// Errors reported by a boolean mesh combiner.
#[derive(Error, Debug)]
pub enum BooleanError {
    /// A modifier operand encloses no volume.
    #[error("modifier {0} has an operand with no volume")]
    EmptyOperand(String),

    /// The combiner does not implement this operation.
    #[error("unsupported boolean operation: {0:?}")]
    Unsupported(BooleanOp),

    /// The combiner failed.
    #[error("boolean failed: {0}")]
    Failed(String),
}

/// Result type for boolean operations.
pub type Result<T> = std::result::Result<T, BooleanError>;
