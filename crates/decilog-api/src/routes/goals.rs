//! Goal endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use decilog_core::model::Goal;
use decilog_core::rules::GoalInput;
use decilog_store::repo::GoalRepo;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Envelope for single-record responses
#[derive(Serialize)]
pub struct GoalResponse {
    pub goal: Goal,
}

/// Envelope for the goal listing
#[derive(Serialize)]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
}

/// GET /api/goals
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<GoalListResponse>> {
    let conn = state.conn().await;
    let goals = GoalRepo::list(&conn)?;
    Ok(Json(GoalListResponse { goals }))
}

/// POST /api/goals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GoalInput>,
) -> ApiResult<(StatusCode, Json<GoalResponse>)> {
    let conn = state.conn().await;
    let goal = GoalRepo::create(&conn, &input)?;
    Ok((StatusCode::CREATED, Json(GoalResponse { goal })))
}
