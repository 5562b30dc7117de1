//! Proposal assembly: ranks a user's evidence bullets against each
//! responsibility/requirement extracted from a job posting.
//!
//! Pure, synchronous and stateless. Every call builds its own token sets and
//! ordinal counters, so concurrent requests never share anything.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::mapping::scoring::BulletProfile;
use crate::mapping::text::tokens_of;

/// Minimum score for a bullet to be suggested. Below this the overlap is noise.
pub const RELEVANCE_THRESHOLD: u32 = 2;
/// Maximum suggestions per item.
pub const MAX_SUGGESTIONS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Responsibility,
    Requirement,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Responsibility => "responsibility",
            ItemKind::Requirement => "requirement",
        }
    }
}

/// One responsibility or requirement line from a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementItem {
    pub kind: ItemKind,
    pub text: String,
}

/// One evidence statement from the user's bullet bank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvidenceBullet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub impact: Option<String>,
}

impl EvidenceBullet {
    /// `text`, `title` and `impact` joined by a space, skipping absent or empty parts.
    pub fn corpus(&self) -> String {
        [
            Some(self.text.as_str()),
            self.title.as_deref(),
            self.impact.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Ranked bullet suggestions for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingProposal {
    /// `"<kind>-<ordinal>"`, ordinal counted per kind from zero.
    pub item_key: String,
    pub kind: ItemKind,
    pub text: String,
    /// At most `MAX_SUGGESTIONS` ids, score descending, ties by ascending id.
    pub suggested_bullet_ids: Vec<String>,
    /// Scores of the suggested ids only.
    pub score_by_bullet_id: BTreeMap<String, u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

struct PreparedBullet<'a> {
    id: &'a str,
    profile: BulletProfile,
}

/// Proposes up to three evidence bullets for every item, preserving item order.
///
/// Never fails: empty collections, absent optional bullet fields and items that
/// tokenize to nothing all produce proposals with empty suggestions.
pub fn propose_mapping(
    items: &[RequirementItem],
    bullets: &[EvidenceBullet],
) -> Vec<MappingProposal> {
    if items.is_empty() {
        return Vec::new();
    }

    let prepared: Vec<PreparedBullet<'_>> = bullets
        .iter()
        .map(|bullet| PreparedBullet {
            id: bullet.id.as_str(),
            profile: BulletProfile::new(
                &tokens_of(&bullet.corpus()),
                bullet.tags.as_deref().unwrap_or_default(),
            ),
        })
        .collect();

    let mut ordinals: HashMap<ItemKind, usize> = HashMap::new();

    items
        .iter()
        .map(|item| {
            let ordinal = ordinals.entry(item.kind).or_insert(0);
            let item_key = format!("{}-{}", item.kind.as_str(), ordinal);
            *ordinal += 1;

            let (suggested_bullet_ids, score_by_bullet_id) = if prepared.is_empty() {
                (Vec::new(), BTreeMap::new())
            } else {
                rank_bullets(&tokens_of(&item.text), &prepared)
            };

            MappingProposal {
                item_key,
                kind: item.kind,
                text: item.text.clone(),
                suggested_bullet_ids,
                score_by_bullet_id,
            }
        })
        .collect()
}

/// Scores every bullet for one item and selects the top candidates.
fn rank_bullets(
    item_tokens: &[String],
    prepared: &[PreparedBullet<'_>],
) -> (Vec<String>, BTreeMap<String, u32>) {
    // A later bullet with the same id overwrites an earlier positive score.
    let mut scores: HashMap<&str, u32> = HashMap::new();
    for bullet in prepared {
        let score = bullet.profile.score(item_tokens);
        if score > 0 {
            scores.insert(bullet.id, score);
        }
    }

    let mut candidates: Vec<(&str, u32)> = scores
        .iter()
        .filter(|(_, score)| **score >= RELEVANCE_THRESHOLD)
        .map(|(&id, &score)| (id, score))
        .collect();
    candidates.sort_by_key(|&(id, score)| (Reverse(score), id));
    candidates.truncate(MAX_SUGGESTIONS);

    let suggested: Vec<String> = candidates.iter().map(|(id, _)| id.to_string()).collect();
    let score_by_id: BTreeMap<String, u32> = candidates
        .into_iter()
        .map(|(id, score)| (id.to_string(), score))
        .collect();

    (suggested, score_by_id)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
