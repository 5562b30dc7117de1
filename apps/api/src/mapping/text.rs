//! Text normalization and stopword-filtered tokenization shared by every
//! mapping score.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "in", "is",
        "it", "of", "on", "or", "should", "the", "to", "was", "will", "with",
    ]
    .into_iter()
    .collect()
});

/// Lowercases `text`, turns every char outside `[a-z0-9_]` and whitespace into a
/// space, then collapses whitespace runs and trims.
///
/// Punctuation becomes a separator rather than being removed: `"Node.js"`
/// normalizes to `"node js"` and will not match `"nodejs"`.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalized text on spaces and drops empty tokens and stopwords.
/// Duplicates are kept in source order.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|t| !t.is_empty() && !STOPWORDS.contains(*t))
        .map(str::to_string)
        .collect()
}

/// `tokenize(normalize(text))`.
pub fn tokens_of(text: &str) -> Vec<String> {
    tokenize(&normalize(text))
}
