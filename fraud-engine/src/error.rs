//! Error types for fraud engine

use thiserror::Error;

/// Fraud engine error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A transaction field is outside the scorer's domain
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Wire name of the offending field
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
