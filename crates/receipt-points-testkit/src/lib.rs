//! # Receipt Points Testkit
//!
//! Testing utilities for receipt scoring.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Reference receipts with their expected points and breakdown
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Reference receipts, deterministic ids, a ready store
//!
//! ## Golden Vectors
//!
//! ```rust
//! use receipt_points_core::RuleEngine;
//! use receipt_points_testkit::vectors::all_vectors;
//!
//! let engine = RuleEngine::standard();
//! for vector in all_vectors() {
//!     let score = engine.score(&vector.receipt);
//!     assert_eq!(score.points(), vector.expected_points, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_core::RuleEngine;
//! use receipt_points_testkit::generators::{receipt_from_params, ReceiptParams};
//!
//! proptest! {
//!     #[test]
//!     fn scoring_is_deterministic(params: ReceiptParams) {
//!         let receipt = receipt_from_params(&params);
//!         let engine = RuleEngine::standard();
//!         prop_assert_eq!(engine.score(&receipt), engine.score(&receipt));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use receipt_points_testkit::fixtures::{target_receipt, SequentialIds};
//! use receipt_points_core::IdGenerator;
//!
//! let receipt = target_receipt();
//! let ids = SequentialIds::new("receipt");
//! assert_eq!(ids.next_id().as_str(), "receipt-1");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{corner_market_receipt, target_receipt, SequentialIds, TestFixture};
pub use generators::{receipt_from_params, ReceiptParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
