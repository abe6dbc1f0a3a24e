//! Decision endpoints: CRUD, list queries and the similarity lookup

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use decilog_core::model::Decision;
use decilog_core::rules::DecisionInput;
use decilog_core::similarity::{similar_decisions, weighted_similarity, ScoredDecision};
use decilog_core::DecilogError;
use decilog_store::repo::{DecisionQuery, DecisionRepo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

/// Query string for GET /api/decisions
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Wire shape for one list page
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionListResponse {
    pub decisions: Vec<Decision>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
}

/// Envelope for single-record responses
#[derive(Serialize)]
pub struct DecisionResponse {
    pub decision: Decision,
}

/// Wire shape for the similarity lookup
#[derive(Serialize)]
pub struct SimilarResponse {
    pub decisions: Vec<ScoredDecision>,
}

/// Reject path ids that are not well-formed UUIDs before touching the store
fn checked_id(id: &str) -> Result<(), DecilogError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| DecilogError::InvalidIdentifier { id: id.to_string() })
}

/// GET /api/decisions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<DecisionListResponse>> {
    let query = DecisionQuery {
        page: params.page.unwrap_or(1),
        page_size: params
            .limit
            .unwrap_or(decilog_store::repo::DEFAULT_PAGE_SIZE),
        search: params.search,
        category: params.category,
        status: params.status,
    };

    let conn = state.conn().await;
    let page = DecisionRepo::list(&conn, &query)?;
    Ok(Json(DecisionListResponse {
        decisions: page.decisions,
        total: page.total,
        pages: page.pages,
        current_page: page.current_page,
    }))
}

/// POST /api/decisions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DecisionInput>,
) -> ApiResult<(StatusCode, Json<DecisionResponse>)> {
    let conn = state.conn().await;
    let decision = DecisionRepo::create(&conn, &input)?;
    Ok((StatusCode::CREATED, Json(DecisionResponse { decision })))
}

/// GET /api/decisions/{id}
pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DecisionResponse>> {
    checked_id(&id)?;
    let conn = state.conn().await;
    let decision = DecisionRepo::get(&conn, &id)?;
    Ok(Json(DecisionResponse { decision }))
}

/// PATCH /api/decisions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<DecisionInput>,
) -> ApiResult<Json<DecisionResponse>> {
    checked_id(&id)?;
    let conn = state.conn().await;
    let decision = DecisionRepo::update(&conn, &id, &patch)?;
    Ok(Json(DecisionResponse { decision }))
}

/// DELETE /api/decisions/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    checked_id(&id)?;
    let conn = state.conn().await;
    DecisionRepo::delete(&conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/decisions/{id}/similar
pub async fn similar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SimilarResponse>> {
    checked_id(&id)?;
    let conn = state.conn().await;
    let reference = DecisionRepo::get(&conn, &id)?;
    let pool = DecisionRepo::list_all(&conn)?;
    let decisions = similar_decisions(&reference, &pool, weighted_similarity);
    Ok(Json(SimilarResponse { decisions }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_id() {
        assert!(checked_id("0190b7c4-6f7e-7d27-9b0a-123456789abc").is_ok());
        assert!(matches!(
            checked_id("not-a-uuid"),
            Err(DecilogError::InvalidIdentifier { .. })
        ));
    }
}
