//! Integer relevance score between one requirement item and one evidence bullet.
//!
//! Score = (item tokens present in the bullet's token set) + TAG_BONUS × (item
//! tokens equal to a lowercased tag). Repeated item tokens count every time.

use std::collections::HashSet;

/// Bonus added per item token that exactly equals one of the bullet's tags.
pub const TAG_BONUS: u32 = 3;

/// Token and tag sets for one bullet, built once and reused across items.
#[derive(Debug, Clone, Default)]
pub struct BulletProfile {
    tokens: HashSet<String>,
    tags: HashSet<String>,
}

impl BulletProfile {
    pub fn new(tokens: &[String], tags: &[String]) -> Self {
        Self {
            tokens: tokens.iter().cloned().collect(),
            tags: tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn score(&self, item_tokens: &[String]) -> u32 {
        let overlap = item_tokens
            .iter()
            .filter(|t| self.tokens.contains(t.as_str()))
            .count() as u32;
        let tag_hits = item_tokens
            .iter()
            .filter(|t| self.tags.contains(t.as_str()))
            .count() as u32;

        overlap + tag_hits * TAG_BONUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn score(item: &[String], bullet: &[String], tags: &[String]) -> u32 {
        BulletProfile::new(bullet, tags).score(item)
    }

    #[test]
    fn test_overlap_counts_each_matching_item_token() {
        let s = score(
            &toks(&["react", "typescript", "experience"]),
            &toks(&["built", "react", "app", "typescript"]),
            &[],
        );
        assert_eq!(s, 2);
    }

    #[test]
    fn test_repeated_item_token_counts_multiple_times() {
        let s = score(&toks(&["rust", "rust", "rust"]), &toks(&["rust"]), &[]);
        assert_eq!(s, 3);
    }

    #[test]
    fn test_repeated_bullet_token_counts_once() {
        let s = score(&toks(&["rust"]), &toks(&["rust", "rust", "rust"]), &[]);
        assert_eq!(s, 1);
    }

    #[test]
    fn test_tag_bonus_added_per_matching_token() {
        let s = score(
            &toks(&["react", "typescript"]),
            &toks(&["react", "typescript"]),
            &toks(&["react", "typescript"]),
        );
        assert_eq!(s, 2 + 2 * TAG_BONUS);
    }

    #[test]
    fn test_tags_are_lowercased_before_matching() {
        let s = score(&toks(&["kubernetes"]), &[], &toks(&["Kubernetes"]));
        assert_eq!(s, TAG_BONUS);
    }

    #[test]
    fn test_tag_must_match_whole_token() {
        // Tags are not normalized: "node.js" never equals a token.
        let s = score(&toks(&["node", "js"]), &[], &toks(&["node.js"]));
        assert_eq!(s, 0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(score(&[], &toks(&["rust"]), &toks(&["rust"])), 0);
        assert_eq!(score(&toks(&["rust"]), &[], &[]), 0);
    }

    #[test]
    fn test_profile_reused_across_items() {
        let profile = BulletProfile::new(
            &toks(&["led", "migration", "postgres"]),
            &toks(&["postgres"]),
        );
        assert_eq!(profile.score(&toks(&["postgres", "migration"])), 2 + TAG_BONUS);
        assert_eq!(profile.score(&toks(&["kafka"])), 0);
    }
}
