//! Tag filtering used by static and interactive search
//!
//! Matching is case-insensitive substring containment against each tag.
//! There is no ranking: results keep the order they were loaded in.

use crate::challenge::ChallengeResult;

/// Whether any of `tags` contains `needle`, which must already be lowercase
fn any_tag_contains(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Keep results where any query tag is a substring of any of their tags
///
/// An empty `query_tags` matches nothing.
#[must_use]
pub fn filter_by_tags(results: &[ChallengeResult], query_tags: &[String]) -> Vec<ChallengeResult> {
    let needles: Vec<String> = query_tags.iter().map(|t| t.to_lowercase()).collect();

    results
        .iter()
        .filter(|r| needles.iter().any(|needle| any_tag_contains(&r.tags, needle)))
        .cloned()
        .collect()
}

/// Keep results with a tag containing the free-text `query`
///
/// An empty query matches everything. Otherwise the query is trimmed before
/// matching.
#[must_use]
pub fn filter_by_text(results: &[ChallengeResult], query: &str) -> Vec<ChallengeResult> {
    if query.is_empty() {
        return results.to_vec();
    }

    let needle = query.trim().to_lowercase();
    results
        .iter()
        .filter(|r| any_tag_contains(&r.tags, &needle))
        .cloned()
        .collect()
}
