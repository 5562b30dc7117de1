//! In-memory `TrackerStore` for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ExtractedRequirements, JobApplicationRow};
use crate::models::bullet::ProjectBulletRow;
use crate::store::{NewApplication, NewBullet, TrackerStore};

#[derive(Default)]
pub struct MemoryStore {
    applications: Mutex<Vec<JobApplicationRow>>,
    bullets: Mutex<Vec<ProjectBulletRow>>,
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn create_application(
        &self,
        user_id: Uuid,
        new: NewApplication,
    ) -> Result<JobApplicationRow, AppError> {
        let now = Utc::now();
        let row = JobApplicationRow {
            id: Uuid::new_v4(),
            user_id,
            company: new.company,
            role: new.role,
            status: "saved".to_string(),
            extracted_requirements: None,
            created_at: now,
            updated_at: now,
        };
        self.applications.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get_application(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<JobApplicationRow>, AppError> {
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id && a.user_id == user_id)
            .cloned())
    }

    async fn set_requirements(
        &self,
        user_id: Uuid,
        id: Uuid,
        requirements: ExtractedRequirements,
    ) -> Result<Option<JobApplicationRow>, AppError> {
        let mut applications = self.applications.lock().unwrap();
        let Some(row) = applications
            .iter_mut()
            .find(|a| a.id == id && a.user_id == user_id)
        else {
            return Ok(None);
        };
        row.extracted_requirements = Some(serde_json::to_value(&requirements).unwrap());
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn list_bullets(&self, user_id: Uuid) -> Result<Vec<ProjectBulletRow>, AppError> {
        Ok(self
            .bullets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_bullet(
        &self,
        user_id: Uuid,
        new: NewBullet,
    ) -> Result<ProjectBulletRow, AppError> {
        let row = ProjectBulletRow {
            id: Uuid::new_v4(),
            user_id,
            text: new.text,
            title: new.title,
            tags: new.tags,
            impact: new.impact,
            created_at: Utc::now(),
        };
        self.bullets.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn delete_bullet(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut bullets = self.bullets.lock().unwrap();
        let before = bullets.len();
        bullets.retain(|b| !(b.id == id && b.user_id == user_id));
        Ok(bullets.len() < before)
    }
}
