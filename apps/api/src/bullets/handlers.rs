use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::{AppError, Envelope};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::bullet::ProjectBulletRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;
use crate::store::NewBullet;

#[derive(Debug, Deserialize)]
pub struct CreateBulletRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub bullet: NewBullet,
}

/// GET /api/v1/bullets
pub async fn handle_list_bullets(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserIdQuery>,
) -> Result<Json<Envelope<Vec<ProjectBulletRow>>>, AppError> {
    let bullets = state.store.list_bullets(params.user_id).await?;
    Ok(Envelope::ok(bullets))
}

/// POST /api/v1/bullets
pub async fn handle_create_bullet(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateBulletRequest>,
) -> Result<(StatusCode, Json<Envelope<ProjectBulletRow>>), AppError> {
    let bullet = sanitize_bullet(req.bullet)?;
    let row = state.store.create_bullet(req.user_id, bullet).await?;
    Ok((StatusCode::CREATED, Envelope::ok(row)))
}

/// DELETE /api/v1/bullets/:id
pub async fn handle_delete_bullet(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(params): AppQuery<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_bullet(params.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Bullet {id} not found")))
    }
}

/// Trims text fields, drops empty optionals, lowercases tags and removes blank
/// or repeated ones.
fn sanitize_bullet(bullet: NewBullet) -> Result<NewBullet, AppError> {
    let text = bullet.text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let non_blank = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let mut tags: Vec<String> = Vec::with_capacity(bullet.tags.len());
    for tag in bullet.tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(NewBullet {
        text,
        title: non_blank(bullet.title),
        tags,
        impact: non_blank(bullet.impact),
    })
}
