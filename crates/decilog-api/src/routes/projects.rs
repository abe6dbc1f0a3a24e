//! Project endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use decilog_core::model::Project;
use decilog_core::rules::ProjectInput;
use decilog_store::repo::ProjectRepo;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Envelope for single-record responses
#[derive(Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

/// Envelope for the project listing
#[derive(Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let conn = state.conn().await;
    let projects = ProjectRepo::list(&conn)?;
    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let conn = state.conn().await;
    let project = ProjectRepo::create(&conn, &input)?;
    Ok((StatusCode::CREATED, Json(ProjectResponse { project })))
}
