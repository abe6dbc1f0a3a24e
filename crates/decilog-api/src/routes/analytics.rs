//! Analytics endpoint

use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use decilog_core::analytics::{calculate_decision_metrics, DecisionMetrics};
use decilog_store::repo::DecisionRepo;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/analytics
pub async fn summary(State(state): State<AppState>) -> ApiResult<Json<DecisionMetrics>> {
    let conn = state.conn().await;
    let decisions = DecisionRepo::list_all(&conn)?;
    Ok(Json(calculate_decision_metrics(&decisions, Utc::now())))
}
