//! Request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::service::{ProcessedReceipt, ReceiptListing};
use receipt_points_store::StoreRecord;

/// Response to `POST /receipts/process`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
    pub points: u64,
    pub breakdown: Vec<String>,
}

impl From<ProcessedReceipt> for ProcessResponse {
    fn from(processed: ProcessedReceipt) -> Self {
        Self {
            breakdown: processed.score.lines(),
            points: processed.score.points(),
            id: processed.id.into_string(),
        }
    }
}

/// Response to `GET /receipts/{id}/points`
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Query parameters for `GET /receipts/all`
///
/// Kept as raw strings: invalid values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// One stored score in a listing
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub id: String,
    pub points: u64,
    pub created_at: DateTime<Utc>,
}

impl From<StoreRecord> for ReceiptSummary {
    fn from(record: StoreRecord) -> Self {
        Self {
            id: record.id.into_string(),
            points: record.points,
            created_at: record.created_at,
        }
    }
}

/// Response to `GET /receipts/all`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptListResponse {
    pub receipts: Vec<ReceiptSummary>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl From<ReceiptListing> for ReceiptListResponse {
    fn from(listing: ReceiptListing) -> Self {
        Self {
            receipts: listing.records.into_iter().map(ReceiptSummary::from).collect(),
            total: listing.total,
            limit: listing.limit,
            offset: listing.offset,
            current_page: listing.current_page,
            total_pages: listing.total_pages,
        }
    }
}

/// Response to `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub receipts: usize,
}
