use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::mapping::proposer::{ItemKind, RequirementItem};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub role: String,
    pub status: String,
    /// `ExtractedRequirements` as JSON; `None` until extraction has run.
    pub extracted_requirements: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Responsibilities and requirements pulled out of a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRequirements {
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl ExtractedRequirements {
    /// Trims every line and drops blank ones.
    pub fn cleaned(self) -> Self {
        fn clean(lines: Vec<String>) -> Vec<String> {
            lines
                .into_iter()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect()
        }
        Self {
            responsibilities: clean(self.responsibilities),
            requirements: clean(self.requirements),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.responsibilities.is_empty() && self.requirements.is_empty()
    }

    /// All responsibilities, then all requirements, each in stored order.
    pub fn to_items(&self) -> Vec<RequirementItem> {
        let responsibilities = self.responsibilities.iter().map(|text| RequirementItem {
            kind: ItemKind::Responsibility,
            text: text.clone(),
        });
        let requirements = self.requirements.iter().map(|text| RequirementItem {
            kind: ItemKind::Requirement,
            text: text.clone(),
        });
        responsibilities.chain(requirements).collect()
    }
}

impl JobApplicationRow {
    /// Decodes the stored requirements; `Ok(None)` when extraction has not run.
    pub fn requirements(&self) -> serde_json::Result<Option<ExtractedRequirements>> {
        self.extracted_requirements
            .clone()
            .map(serde_json::from_value)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_row(extracted: Option<Value>) -> JobApplicationRow {
        JobApplicationRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            company: "Acme".to_string(),
            role: "Backend Engineer".to_string(),
            status: "saved".to_string(),
            extracted_requirements: extracted,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_items_list_responsibilities_first() {
        let reqs = ExtractedRequirements {
            responsibilities: vec!["Own billing".to_string()],
            requirements: vec!["Rust".to_string(), "SQL".to_string()],
        };
        let items = reqs.to_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].kind, ItemKind::Responsibility);
        assert_eq!(items[1].kind, ItemKind::Requirement);
        assert_eq!(items[2].text, "SQL");
    }

    #[test]
    fn test_cleaned_trims_and_drops_blank_lines() {
        let reqs = ExtractedRequirements {
            responsibilities: vec!["  Ship features ".to_string(), "   ".to_string()],
            requirements: vec![String::new()],
        }
        .cleaned();
        assert_eq!(reqs.responsibilities, vec!["Ship features"]);
        assert!(reqs.requirements.is_empty());
    }

    #[test]
    fn test_requirements_absent_is_none() {
        assert_eq!(make_row(None).requirements().unwrap(), None);
    }

    #[test]
    fn test_requirements_tolerates_missing_list() {
        let row = make_row(Some(json!({"requirements": ["Go"]})));
        let reqs = row.requirements().unwrap().unwrap();
        assert!(reqs.responsibilities.is_empty());
        assert_eq!(reqs.requirements, vec!["Go"]);
    }

    #[test]
    fn test_requirements_malformed_json_errors() {
        let row = make_row(Some(json!({"requirements": "Go"})));
        assert!(row.requirements().is_err());
    }
}
