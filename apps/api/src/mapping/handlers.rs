//! Axum route handlers for the Mapping API.

use anyhow::Context;
use axum::{
    extract::State,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{AppError, Envelope};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::mapping::proposer::{
    propose_mapping, EvidenceBullet, MappingProposal, RequirementItem,
};
use crate::routes::UserIdQuery;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewMappingRequest {
    #[serde(default)]
    pub items: Vec<RequirementItem>,
    #[serde(default)]
    pub bullets: Vec<EvidenceBullet>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub proposal: Vec<MappingProposal>,
    /// ISO-8601 UTC, millisecond precision.
    pub generated_at: String,
}

impl MappingResponse {
    fn new(proposal: Vec<MappingProposal>) -> Self {
        Self {
            proposal,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/applications/:id/mapping/propose
///
/// Maps the application's extracted requirements onto the user's project bullets.
/// Requires both to be present; the proposer itself never fails.
pub async fn handle_propose_for_application(
    State(state): State<AppState>,
    AppPath(application_id): AppPath<Uuid>,
    AppQuery(params): AppQuery<UserIdQuery>,
) -> Result<Json<Envelope<MappingResponse>>, AppError> {
    let application = state
        .store
        .get_application(params.user_id, application_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;

    let requirements = application
        .requirements()
        .with_context(|| format!("Stored requirements for {application_id} are malformed"))?
        .filter(|r| !r.is_empty())
        .ok_or(AppError::RequirementsRequired)?;

    let mut bullets: Vec<EvidenceBullet> = state
        .store
        .list_bullets(params.user_id)
        .await?
        .into_iter()
        .map(EvidenceBullet::from)
        .collect();

    if bullets.is_empty() {
        return Err(AppError::BulletsRequired);
    }

    let cap = state.config.mapping_max_bullets;
    if bullets.len() > cap {
        warn!(
            "User {} has {} bullets; mapping only the first {cap}",
            params.user_id,
            bullets.len()
        );
        bullets.truncate(cap);
    }

    let items = requirements.to_items();
    let proposal = propose_mapping(&items, &bullets);

    let suggested: usize = proposal.iter().map(|p| p.suggested_bullet_ids.len()).sum();
    info!(
        "Proposed mapping for application {application_id}: {} items x {} bullets, {suggested} suggestions",
        items.len(),
        bullets.len()
    );

    Ok(Envelope::ok(MappingResponse::new(proposal)))
}

/// POST /api/v1/mapping/propose
///
/// Stateless preview: runs the proposer on caller-supplied items and bullets.
/// Empty inputs are valid and yield empty or suggestion-less proposals.
pub async fn handle_preview_mapping(
    State(state): State<AppState>,
    AppJson(request): AppJson<PreviewMappingRequest>,
) -> Result<Json<Envelope<MappingResponse>>, AppError> {
    let cap = state.config.mapping_max_bullets;
    if request.bullets.len() > cap {
        return Err(AppError::Validation(format!(
            "At most {cap} bullets can be mapped at once (got {})",
            request.bullets.len()
        )));
    }

    let proposal = propose_mapping(&request.items, &request.bullets);

    let suggested: usize = proposal.iter().map(|p| p.suggested_bullet_ids.len()).sum();
    info!(
        "Previewed mapping: {} items x {} bullets, {suggested} suggestions",
        request.items.len(),
        request.bullets.len()
    );

    Ok(Envelope::ok(MappingResponse::new(proposal)))
}
