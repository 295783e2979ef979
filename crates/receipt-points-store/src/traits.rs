//! Store trait: the abstract interface for score persistence.
//!
//! This trait allows the service to be storage-agnostic. The only
//! implementation today is in-memory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use receipt_points_core::ReceiptId;
use serde::Serialize;

use crate::error::Result;

/// A stored score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    /// The receipt id the score was stored under.
    pub id: ReceiptId,
    /// Points awarded.
    pub points: u64,
    /// When the record was (last) written.
    pub created_at: DateTime<Utc>,
}

/// One page of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records in `[offset, offset + limit)`, oldest first.
    pub records: Vec<StoreRecord>,
    /// Number of records in the whole store.
    pub total: usize,
}

/// The Store trait: async interface for score persistence.
///
/// # Design Notes
///
/// - **Serialized access**: every operation holds the store's lock for its
///   whole duration.
/// - **Last write wins**: `insert` with an existing id replaces the record,
///   including its creation time.
/// - **Pagination input**: callers normalize `limit`/`offset` first. A zero
///   `limit` yields an empty page.
#[async_trait]
pub trait Store: Send + Sync {
    /// Record `points` under `id`, stamped with the current time.
    async fn insert(&self, id: &ReceiptId, points: u64) -> Result<()>;

    /// Get the points stored under `id`.
    async fn lookup(&self, id: &ReceiptId) -> Result<Option<u64>>;

    /// List records oldest first, skipping `offset` and returning at most
    /// `limit`.
    async fn list_page(&self, limit: usize, offset: usize) -> Result<Page>;

    /// Number of stored records.
    async fn len(&self) -> Result<usize>;

    /// Whether the store holds no records.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Remove every record. Intended for test isolation.
    async fn reset(&self) -> Result<()>;
}
