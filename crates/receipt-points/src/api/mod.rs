//! HTTP API

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use state::AppState;
