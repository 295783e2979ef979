//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur outside of scoring.
///
/// Scoring itself never fails; malformed fields are reported in the
/// breakdown instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid receipt JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
