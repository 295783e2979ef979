//! # Receipt Points Core
//!
//! Pure primitives for receipt scoring: the receipt model, the rule engine,
//! and the structured breakdown it produces.
//!
//! This crate contains no storage and no networking. Scoring is pure
//! computation over an immutable [`Receipt`].
//!
//! ## Key Types
//!
//! - [`Receipt`] / [`Item`] - The scanned receipt as submitted by a client
//! - [`RuleEngine`] - Fixed pipeline of scoring rules
//! - [`Score`] - Total points plus an ordered breakdown
//! - [`BreakdownEntry`] - One `(rule, points, reason)` record
//! - [`ReceiptId`] / [`IdGenerator`] - Opaque identifiers and their source
//!
//! ## Breakdown Rendering
//!
//! Entries are structured. Turning them into human-readable lines lives in
//! the [`format`] module so point values can be tested independently of text.

pub mod breakdown;
pub mod engine;
pub mod error;
pub mod format;
pub mod id;
pub mod receipt;
pub mod rules;

pub use breakdown::{BreakdownEntry, Reason, RuleKind, Score};
pub use engine::RuleEngine;
pub use error::{CoreError, Result};
pub use format::{render_breakdown, render_entry};
pub use id::{IdGenerator, ReceiptId, UuidGenerator};
pub use receipt::{Item, Receipt};
pub use rules::ScoringRule;
