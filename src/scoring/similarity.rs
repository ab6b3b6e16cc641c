// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Smart similarity: the fallback when no substring relationship exists.
//!
//! OCR that drops or garbles a few characters breaks containment, but the
//! text usually still shares whole words, most of its characters, and a low
//! edit distance with the right record. Three signals, blended:
//!
//! ```text
//! similarity = 0.2 × edit + 0.5 × keyword + 0.3 × chars
//! ```
//!
//! If the two texts share no word at all, only edit distance is trusted, and
//! only at 60% weight. CJK questions rarely contain spaces, so for them this
//! edit-only path is the common case.

use crate::fuzzy::{edit_distance_chars, longest_common_run};
use crate::normalize::words;
use crate::types::MatchSpan;
use std::collections::{BTreeSet, HashMap};

use super::core::{FieldScore, MatchTier};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Blend weight for edit similarity.
pub const EDIT_WEIGHT: f64 = 0.2;

/// Blend weight for keyword (word set) similarity.
pub const KEYWORD_WEIGHT: f64 = 0.5;

/// Blend weight for character multiset overlap.
pub const CHAR_WEIGHT: f64 = 0.3;

/// Below this the blended similarity is reported as no match.
pub const MIN_SIMILARITY: f64 = 0.1;

/// Edit-only path: minimum edit similarity to report anything.
pub const EDIT_ONLY_THRESHOLD: f64 = 0.3;

/// Edit-only path: discount applied to edit similarity.
pub const EDIT_ONLY_WEIGHT: f64 = 0.6;

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Similarity score for a pair with no substring relationship.
pub fn smart_similarity(query: &str, candidate: &str) -> FieldScore {
    let query_words: BTreeSet<String> = words(query).into_iter().collect();
    let candidate_words: BTreeSet<String> = words(candidate).into_iter().collect();
    let common = query_words.intersection(&candidate_words).count();

    let query_chars: Vec<char> = query.chars().collect();
    let candidate_chars: Vec<char> = candidate.chars().collect();
    let edit = edit_similarity(&query_chars, &candidate_chars);

    if common == 0 {
        if edit > EDIT_ONLY_THRESHOLD {
            return FieldScore {
                score: edit * EDIT_ONLY_WEIGHT,
                span: simple_match_span(query, candidate),
                tier: MatchTier::EditOnly { edit },
            };
        }
        return FieldScore::none();
    }

    let keyword = keyword_similarity(query_words.len(), candidate_words.len(), common);
    let chars = char_similarity(&query_chars, &candidate_chars);
    let similarity = EDIT_WEIGHT * edit + KEYWORD_WEIGHT * keyword + CHAR_WEIGHT * chars;

    if similarity < MIN_SIMILARITY {
        return FieldScore::none();
    }

    FieldScore {
        score: similarity.min(1.0),
        span: simple_match_span(query, candidate),
        tier: MatchTier::Similarity {
            edit,
            keyword,
            chars,
        },
    }
}

// =============================================================================
// SUB-SIMILARITIES
// =============================================================================

/// `1 − distance / max(len)`, in characters. Two empty inputs count as equal.
pub fn edit_similarity(query: &[char], candidate: &[char]) -> f64 {
    let longest = query.len().max(candidate.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance_chars(query, candidate) as f64 / longest as f64
}

/// Jaccard on word sets, averaged with the mean per-side coverage.
///
/// `query_words` and `candidate_words` are set sizes; `common` is the size of
/// their intersection.
pub fn keyword_similarity(query_words: usize, candidate_words: usize, common: usize) -> f64 {
    if query_words == 0 || candidate_words == 0 {
        return 0.0;
    }
    let union = query_words + candidate_words - common;
    if union == 0 {
        return 0.0;
    }
    let jaccard = common as f64 / union as f64;
    if common == 0 {
        return jaccard;
    }

    let coverage = (common as f64 / query_words as f64 + common as f64 / candidate_words as f64) / 2.0;
    ((jaccard + coverage) / 2.0).min(1.0)
}

/// Dice coefficient over character multisets:
/// `2 × Σ min(count_q(c), count_c(c)) / (len(q) + len(c))`.
pub fn char_similarity(query: &[char], candidate: &[char]) -> f64 {
    let total = query.len() + candidate.len();
    if total == 0 {
        return 0.0;
    }

    let mut counts: HashMap<char, (usize, usize)> = HashMap::new();
    for &c in query {
        counts.entry(c).or_default().0 += 1;
    }
    for &c in candidate {
        counts.entry(c).or_default().1 += 1;
    }
    let shared: usize = counts.values().map(|(q, c)| (*q).min(*c)).sum();

    (2 * shared) as f64 / total as f64
}

// =============================================================================
// SPAN RECOVERY
// =============================================================================

/// Character start and length of the leftmost occurrence of `needle` in
/// `haystack`.
pub fn locate(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let byte_start = haystack.find(needle)?;
    Some((
        haystack[..byte_start].chars().count(),
        needle.chars().count(),
    ))
}

/// Best contiguous span in `candidate` to highlight for a similarity match.
///
/// Candidate contains query → that occurrence. Query contains candidate → all
/// of candidate. Otherwise the longest common substring's first occurrence in
/// candidate, or nothing when no character is shared.
pub fn simple_match_span(query: &str, candidate: &str) -> MatchSpan {
    if let Some((start, len)) = locate(candidate, query) {
        return MatchSpan::from_range(start, len);
    }
    if query.contains(candidate) {
        return MatchSpan::from_range(0, candidate.chars().count());
    }

    let query_chars: Vec<char> = query.chars().collect();
    let candidate_chars: Vec<char> = candidate.chars().collect();
    match longest_common_run(&query_chars, &candidate_chars) {
        Some((start, len)) => {
            let common: String = query_chars[start..start + len].iter().collect();
            locate(candidate, &common)
                .map(|(at, len)| MatchSpan::from_range(at, len))
                .unwrap_or_default()
        }
        None => MatchSpan::empty(),
    }
}
