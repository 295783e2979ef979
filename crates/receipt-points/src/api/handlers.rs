//! HTTP request handlers

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use receipt_points_core::{Receipt, ReceiptId};

use crate::api::dto::{
    HealthResponse, ListQueryParams, PointsResponse, ProcessResponse, ReceiptListResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::error::PointsError;

/// POST /receipts/process
///
/// Score a receipt and store its points under a new id.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let receipt = Receipt::from_json_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected receipt body");
        PointsError::from(e)
    })?;

    let processed = state.service.process(&receipt).await?;
    Ok(Json(processed.into()))
}

/// GET /receipts/:id/points
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    tracing::debug!(%id, "points lookup");

    let points = state
        .service
        .points(&ReceiptId::new(id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Receipt not found".to_string()))?;

    Ok(Json(PointsResponse { points }))
}

/// GET /receipts/all?limit=&offset=
pub async fn list_receipts(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> ApiResult<Json<ReceiptListResponse>> {
    let pagination = state
        .service
        .pagination(params.limit.as_deref(), params.offset.as_deref());

    let listing = state.service.list(pagination).await?;
    Ok(Json(listing.into()))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let receipts = state.service.receipt_count().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        receipts,
    }))
}
