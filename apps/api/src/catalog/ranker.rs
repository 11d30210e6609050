//! Relevance Ranker — selects which library resources get cited for a query.
//!
//! Whole-substring, case-insensitive matching with flat additive weights.
//! No tokenization and no normalization: the query is one needle.

use crate::models::Resource;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

const TITLE_WEIGHT: u32 = 3;
const DESCRIPTION_WEIGHT: u32 = 2;
/// Applied once per matching tag.
const TAG_WEIGHT: u32 = 1;
const CATEGORY_WEIGHT: u32 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A catalog resource together with the score that earned it a place in the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredResource<'a> {
    pub resource: &'a Resource,
    pub score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Returns up to `k` resources ordered by descending score.
///
/// Algorithm:
/// 1. Lowercase the query once
/// 2. Score every resource independently (see `score_resource`)
/// 3. Drop zero scores — results are never padded
/// 4. Stable sort descending, so equal scores keep catalog order
/// 5. Truncate to `k`
pub fn rank<'a>(resources: &'a [Resource], query: &str, k: usize) -> Vec<ScoredResource<'a>> {
    if query.is_empty() || k == 0 {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    let mut scored: Vec<ScoredResource<'a>> = resources
        .iter()
        .filter_map(|resource| {
            let score = score_resource(resource, &needle);
            (score > 0).then_some(ScoredResource { resource, score })
        })
        .collect();

    // `sort_by` is stable.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(k);
    scored
}

/// Same as `rank` but without the scores.
pub fn top_resources<'a>(resources: &'a [Resource], query: &str, k: usize) -> Vec<&'a Resource> {
    rank(resources, query, k)
        .into_iter()
        .map(|hit| hit.resource)
        .collect()
}

/// Scores one resource against an already-lowercased needle.
///
/// title +3, description +2, each matching tag +1, category +1.
pub fn score_resource(resource: &Resource, needle: &str) -> u32 {
    let mut score = 0;

    if contains_ci(&resource.title, needle) {
        score += TITLE_WEIGHT;
    }
    if contains_ci(&resource.description, needle) {
        score += DESCRIPTION_WEIGHT;
    }
    score += resource
        .tags
        .iter()
        .filter(|tag| contains_ci(tag, needle))
        .count() as u32
        * TAG_WEIGHT;
    if contains_ci(&resource.category, needle) {
        score += CATEGORY_WEIGHT;
    }

    score
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
