//! Related-article matching over a fixed candidate list.
//!
//! Matching is deliberately crude: case-insensitive substring containment
//! of the summary's leading words against candidate titles, favouring
//! recall over precision for a cosmetic "related articles" list.

/// Number of leading summary tokens considered for matching
const TOKEN_WINDOW: usize = 10;

/// Entries returned when nothing matches
const FALLBACK_COUNT: usize = 2;

/// Titles baked into the binary, in match-fallback order
const DEFAULT_TITLES: [&str; 4] = [
    "Global Trends in Electric Vehicles",
    "How Renewable Energy Impacts Economy",
    "AI Transforming the Future of Work",
    "Climate Change and Global Policy Shifts",
];

/// A candidate entry in the related-articles database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateArticle {
    pub title: String,
}

impl CandidateArticle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// The built-in candidate database
pub fn default_database() -> Vec<CandidateArticle> {
    DEFAULT_TITLES
        .iter()
        .copied()
        .map(CandidateArticle::new)
        .collect()
}

/// Select candidates whose titles share a word with the summary.
///
/// Only the first ten whitespace-separated tokens of the summary are
/// considered; a candidate matches when any of them occurs as a
/// case-insensitive substring of its title. Database order is preserved
/// and nothing is ranked. An empty match set falls back to the first two
/// entries, so callers should keep the database non-empty.
pub fn find_related(summary: &str, database: &[CandidateArticle]) -> Vec<CandidateArticle> {
    let tokens: Vec<String> = summary
        .split_whitespace()
        .take(TOKEN_WINDOW)
        .map(str::to_lowercase)
        .collect();

    let related: Vec<CandidateArticle> = database
        .iter()
        .filter(|candidate| {
            let title = candidate.title.to_lowercase();
            tokens.iter().any(|token| title.contains(token.as_str()))
        })
        .cloned()
        .collect();

    if related.is_empty() {
        database.iter().take(FALLBACK_COUNT).cloned().collect()
    } else {
        related
    }
}
