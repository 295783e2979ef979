//! The points service: unified API over the rule engine and the store.
//!
//! Scoring, id assignment and storage happen here, so the HTTP layer only
//! decodes requests and encodes responses.

use std::sync::Arc;

use rand::Rng;
use receipt_points_core::{IdGenerator, Receipt, ReceiptId, RuleEngine, Score};
use receipt_points_store::{Store, StoreRecord};

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::pagination::Pagination;

/// Exclusive upper bound for randomly generated sample points.
const SAMPLE_POINTS_MAX: u64 = 100;

/// A receipt that has been scored and stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedReceipt {
    pub id: ReceiptId,
    pub score: Score,
}

/// One page of stored scores with its paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptListing {
    pub records: Vec<StoreRecord>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

/// The main service struct.
///
/// Provides:
/// - Scoring and storing receipts
/// - Point lookups
/// - Paginated listings
pub struct PointsService {
    /// The scoring pipeline.
    engine: RuleEngine,
    /// The storage backend.
    store: Arc<dyn Store>,
    /// Source of receipt ids.
    ids: Arc<dyn IdGenerator>,
    /// Configuration.
    config: ServiceConfig,
}

impl PointsService {
    /// Create a new service with the standard rule pipeline.
    pub fn new(store: Arc<dyn Store>, ids: Arc<dyn IdGenerator>, config: ServiceConfig) -> Self {
        Self::with_engine(RuleEngine::standard(), store, ids, config)
    }

    /// Create a service with a custom rule engine.
    pub fn with_engine(
        engine: RuleEngine,
        store: Arc<dyn Store>,
        ids: Arc<dyn IdGenerator>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            engine,
            store,
            ids,
            config,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scoring
    // ─────────────────────────────────────────────────────────────────────────

    /// Score a receipt without storing it.
    pub fn score(&self, receipt: &Receipt) -> Score {
        self.engine.score(receipt)
    }

    /// Score a receipt, assign it a fresh id, and store the points.
    pub async fn process(&self, receipt: &Receipt) -> Result<ProcessedReceipt> {
        let score = self.engine.score(receipt);
        let id = self.ids.next_id();

        self.store.insert(&id, score.points()).await?;

        tracing::info!(%id, points = score.points(), "processed receipt");
        Ok(ProcessedReceipt { id, score })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Points stored for a receipt id, if any.
    pub async fn points(&self, id: &ReceiptId) -> Result<Option<u64>> {
        Ok(self.store.lookup(id).await?)
    }

    /// One page of stored scores, oldest first.
    pub async fn list(&self, pagination: Pagination) -> Result<ReceiptListing> {
        let page = self
            .store
            .list_page(pagination.limit(), pagination.offset())
            .await?;

        Ok(ReceiptListing {
            records: page.records,
            total: page.total,
            limit: pagination.limit(),
            offset: pagination.offset(),
            current_page: pagination.current_page(),
            total_pages: pagination.total_pages(page.total),
        })
    }

    /// Normalize raw listing parameters using this service's default limit.
    pub fn pagination(&self, limit: Option<&str>, offset: Option<&str>) -> Pagination {
        Pagination::from_query(limit, offset, self.config.default_page_limit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Maintenance
    // ─────────────────────────────────────────────────────────────────────────

    /// Preload `count` sample records with ids `"0".."count-1"` and random
    /// points below 100.
    pub async fn seed_samples<R: Rng>(&self, count: usize, rng: &mut R) -> Result<()> {
        let samples: Vec<(ReceiptId, u64)> = (0..count)
            .map(|i| (ReceiptId::new(i.to_string()), rng.gen_range(0..SAMPLE_POINTS_MAX)))
            .collect();

        for (id, points) in &samples {
            self.store.insert(id, *points).await?;
        }

        if count > 0 {
            tracing::info!(count, "preloaded sample receipts");
        }
        Ok(())
    }

    /// Number of stored records.
    pub async fn receipt_count(&self) -> Result<usize> {
        Ok(self.store.len().await?)
    }
}
