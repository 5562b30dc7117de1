use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::{AppError, Envelope};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::application::{ExtractedRequirements, JobApplicationRow};
use crate::routes::UserIdQuery;
use crate::state::AppState;
use crate::store::NewApplication;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub user_id: Uuid,
    pub company: String,
    pub role: String,
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Envelope<JobApplicationRow>>), AppError> {
    let company = req.company.trim();
    let role = req.role.trim();
    if company.is_empty() || role.is_empty() {
        return Err(AppError::Validation(
            "company and role cannot be empty".to_string(),
        ));
    }

    let row = state
        .store
        .create_application(
            req.user_id,
            NewApplication {
                company: company.to_string(),
                role: role.to_string(),
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Envelope::ok(row)))
}

/// GET /api/v1/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(params): AppQuery<UserIdQuery>,
) -> Result<Json<Envelope<JobApplicationRow>>, AppError> {
    let row = state
        .store
        .get_application(params.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Envelope::ok(row))
}

/// PUT /api/v1/applications/:id/requirements
///
/// Stores extracted responsibilities/requirements. Lines are trimmed; blank lines dropped.
pub async fn handle_set_requirements(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(params): AppQuery<UserIdQuery>,
    AppJson(req): AppJson<ExtractedRequirements>,
) -> Result<Json<Envelope<JobApplicationRow>>, AppError> {
    let row = state
        .store
        .set_requirements(params.user_id, id, req.cleaned())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Envelope::ok(row))
}
