//! Error types for the service.

use receipt_points_core::CoreError;
use receipt_points_store::StoreError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum PointsError {
    /// The receipt body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, PointsError>;
