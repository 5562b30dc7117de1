pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::applications::handlers as applications;
use crate::bullets::handlers as bullets;
use crate::mapping::handlers as mapping;
use crate::state::AppState;

/// Caller identity. Authentication happens in front of this service.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Applications
        .route(
            "/api/v1/applications",
            post(applications::handle_create_application),
        )
        .route(
            "/api/v1/applications/:id",
            get(applications::handle_get_application),
        )
        .route(
            "/api/v1/applications/:id/requirements",
            put(applications::handle_set_requirements),
        )
        // Evidence bank
        .route(
            "/api/v1/bullets",
            get(bullets::handle_list_bullets).post(bullets::handle_create_bullet),
        )
        .route("/api/v1/bullets/:id", delete(bullets::handle_delete_bullet))
        // Mapping
        .route(
            "/api/v1/applications/:id/mapping/propose",
            post(mapping::handle_propose_for_application),
        )
        .route(
            "/api/v1/mapping/propose",
            post(mapping::handle_preview_mapping),
        )
        .with_state(state)
}
