//! # Receipt Points
//!
//! The unified service: score receipts, assign ids, store scores, and serve
//! lookups and listings over HTTP.
//!
//! ## Overview
//!
//! - **Scoring**: a fixed pipeline of rules turns a receipt into points plus
//!   an explanation per rule outcome (see [`core::RuleEngine`])
//! - **Storage**: scores are kept in memory under generated ids
//!   (see [`store::MemoryStore`])
//! - **API**: `POST /receipts/process`, `GET /receipts/{id}/points`,
//!   `GET /receipts/all`, `GET /health`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use receipt_points::{PointsService, ServiceConfig};
//! use receipt_points::core::{Receipt, UuidGenerator};
//! use receipt_points::store::MemoryStore;
//!
//! async fn example() {
//!     let service = PointsService::new(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(UuidGenerator),
//!         ServiceConfig::default(),
//!     );
//!
//!     let receipt = Receipt::builder("Target").total("35.35").build();
//!     let processed = service.process(&receipt).await.unwrap();
//!
//!     let points = service.points(&processed.id).await.unwrap();
//!     assert_eq!(points, Some(processed.score.points()));
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Receipt model and rule engine
//! - `receipt_points::store` - Storage abstraction and in-memory store

pub mod api;
pub mod config;
pub mod error;
pub mod pagination;
pub mod server;
pub mod service;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

pub use config::{ServerConfig, ServiceConfig};
pub use error::{PointsError, Result};
pub use pagination::Pagination;
pub use service::{PointsService, ProcessedReceipt, ReceiptListing};
