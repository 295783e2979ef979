//! In-memory implementation of the Store trait.
//!
//! All data is lost when the store is dropped. Thread-safe via a single
//! `Mutex`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use receipt_points_core::ReceiptId;

use crate::error::{Result, StoreError};
use crate::traits::{Page, Store, StoreRecord};

/// In-memory store implementation.
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    /// Records indexed by receipt id.
    records: HashMap<ReceiptId, StoredScore>,

    /// Insertion counter, breaks timestamp ties.
    next_seq: u64,

    /// Latest timestamp handed out; keeps creation times non-decreasing
    /// even if the wall clock steps back.
    last_stamp: Option<DateTime<Utc>>,
}

struct StoredScore {
    points: u64,
    created_at: DateTime<Utc>,
    seq: u64,
}

impl MemoryStoreInner {
    fn stamp(&mut self) -> (DateTime<Utc>, u64) {
        let now = Utc::now();
        let created_at = match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_stamp = Some(created_at);

        let seq = self.next_seq;
        self.next_seq += 1;
        (created_at, seq)
    }
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryStoreInner::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryStoreInner>> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert(&self, id: &ReceiptId, points: u64) -> Result<()> {
        let mut inner = self.lock()?;

        let (created_at, seq) = inner.stamp();
        let replaced = inner
            .records
            .insert(
                id.clone(),
                StoredScore {
                    points,
                    created_at,
                    seq,
                },
            )
            .is_some();

        tracing::debug!(%id, points, replaced, "stored receipt score");
        Ok(())
    }

    async fn lookup(&self, id: &ReceiptId) -> Result<Option<u64>> {
        let inner = self.lock()?;
        Ok(inner.records.get(id).map(|s| s.points))
    }

    async fn list_page(&self, limit: usize, offset: usize) -> Result<Page> {
        let inner = self.lock()?;

        let mut ordered: Vec<(&ReceiptId, &StoredScore)> = inner.records.iter().collect();
        ordered.sort_by_key(|(_, s)| (s.created_at, s.seq));

        let records = ordered
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(id, s)| StoreRecord {
                id: id.clone(),
                points: s.points,
                created_at: s.created_at,
            })
            .collect();

        Ok(Page {
            records,
            total: inner.records.len(),
        })
    }

    async fn len(&self) -> Result<usize> {
        let inner = self.lock()?;
        Ok(inner.records.len())
    }

    async fn reset(&self) -> Result<()> {
        let mut inner = self.lock()?;
        *inner = MemoryStoreInner::default();
        tracing::debug!("store reset");
        Ok(())
    }
}
