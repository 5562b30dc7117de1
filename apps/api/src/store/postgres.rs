use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ExtractedRequirements, JobApplicationRow};
use crate::models::bullet::ProjectBulletRow;
use crate::store::{NewApplication, NewBullet, TrackerStore};

/// PostgreSQL-backed store. Schema: `migrations/0001_init.sql`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackerStore for PgStore {
    async fn create_application(
        &self,
        user_id: Uuid,
        new: NewApplication,
    ) -> Result<JobApplicationRow, AppError> {
        let row = sqlx::query_as::<_, JobApplicationRow>(
            r#"
            INSERT INTO job_applications (id, user_id, company, role, status)
            VALUES ($1, $2, $3, $4, 'saved')
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new.company)
        .bind(&new.role)
        .fetch_one(&self.pool)
        .await?;

        info!("Created job application {} for user {user_id}", row.id);
        Ok(row)
    }

    async fn get_application(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<JobApplicationRow>, AppError> {
        Ok(sqlx::query_as::<_, JobApplicationRow>(
            "SELECT * FROM job_applications WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn set_requirements(
        &self,
        user_id: Uuid,
        id: Uuid,
        requirements: ExtractedRequirements,
    ) -> Result<Option<JobApplicationRow>, AppError> {
        let payload =
            serde_json::to_value(&requirements).context("Failed to encode requirements")?;

        Ok(sqlx::query_as::<_, JobApplicationRow>(
            r#"
            UPDATE job_applications
            SET extracted_requirements = $1, updated_at = NOW()
            WHERE id = $2 AND user_id = $3
            RETURNING *
            "#,
        )
        .bind(payload)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_bullets(&self, user_id: Uuid) -> Result<Vec<ProjectBulletRow>, AppError> {
        Ok(sqlx::query_as::<_, ProjectBulletRow>(
            "SELECT * FROM project_bullets WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_bullet(
        &self,
        user_id: Uuid,
        new: NewBullet,
    ) -> Result<ProjectBulletRow, AppError> {
        let row = sqlx::query_as::<_, ProjectBulletRow>(
            r#"
            INSERT INTO project_bullets (id, user_id, text, title, tags, impact)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new.text)
        .bind(&new.title)
        .bind(&new.tags)
        .bind(&new.impact)
        .fetch_one(&self.pool)
        .await?;

        info!("Created project bullet {} for user {user_id}", row.id);
        Ok(row)
    }

    async fn delete_bullet(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM project_bullets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
