use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::mapping::proposer::EvidenceBullet;

/// A project bullet from the user's evidence bank.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectBulletRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub impact: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectBulletRow> for EvidenceBullet {
    fn from(row: ProjectBulletRow) -> Self {
        EvidenceBullet {
            id: row.id.to_string(),
            text: row.text,
            title: row.title,
            tags: Some(row.tags),
            impact: row.impact,
        }
    }
}
