//! Persistence seam for job applications and project bullets.
//!
//! `AppState` holds an `Arc<dyn TrackerStore>`; production uses `PgStore`,
//! handler tests use `MemoryStore`. Every call is scoped to one user.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ExtractedRequirements, JobApplicationRow};
use crate::models::bullet::ProjectBulletRow;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Fields supplied when tracking a new job application.
#[derive(Debug, Clone, Deserialize)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
}

/// Fields supplied when adding a project bullet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBullet {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub impact: Option<String>,
}

#[async_trait]
pub trait TrackerStore: Send + Sync {
    async fn create_application(
        &self,
        user_id: Uuid,
        new: NewApplication,
    ) -> Result<JobApplicationRow, AppError>;

    async fn get_application(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<JobApplicationRow>, AppError>;

    /// Replaces the extracted requirements. `None` when the application does not exist.
    async fn set_requirements(
        &self,
        user_id: Uuid,
        id: Uuid,
        requirements: ExtractedRequirements,
    ) -> Result<Option<JobApplicationRow>, AppError>;

    /// All bullets for the user, oldest first.
    async fn list_bullets(&self, user_id: Uuid) -> Result<Vec<ProjectBulletRow>, AppError>;

    async fn create_bullet(
        &self,
        user_id: Uuid,
        new: NewBullet,
    ) -> Result<ProjectBulletRow, AppError>;

    /// Returns `false` when no bullet with that id belongs to the user.
    async fn delete_bullet(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;
}
