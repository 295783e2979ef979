//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use receipt_points_core::{IdGenerator, Receipt, ReceiptId, RuleEngine};
use receipt_points_store::MemoryStore;

/// The "Target" reference receipt. Scores 28.
pub fn target_receipt() -> Receipt {
    Receipt::builder("Target")
        .purchase_date("2022-01-01")
        .purchase_time("13:01")
        .total("35.35")
        .item("Mountain Dew 12PK", "6.49")
        .item("Emils Cheese Pizza", "12.25")
        .item("Knorr Creamy Chicken", "1.26")
        .item("Doritos Nacho Cheese", "3.35")
        .item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")
        .build()
}

/// The "M&M Corner Market" reference receipt. Scores 109.
pub fn corner_market_receipt() -> Receipt {
    Receipt::builder("M&M Corner Market")
        .purchase_date("2022-03-20")
        .purchase_time("14:33")
        .total("9.00")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .build()
}

/// The Target receipt as a JSON request body.
pub fn target_receipt_json() -> &'static str {
    r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    }"#
}

/// Deterministic ids: `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ReceiptId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ReceiptId::new(format!("{}-{}", self.prefix, n))
    }
}

/// A rule engine, an empty store and deterministic ids.
pub struct TestFixture {
    pub engine: RuleEngine,
    pub store: Arc<MemoryStore>,
    pub ids: Arc<SequentialIds>,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::standard(),
            store: Arc::new(MemoryStore::new()),
            ids: Arc::new(SequentialIds::new("receipt")),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
