// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the field scorer.
//!
//! Whatever OCR hands us, the score is a number in [0, 1], the span stays
//! inside the candidate, and a self-match is exact. Edit distance is checked
//! for symmetry on the way.

#![no_main]

use arbitrary::Arbitrary;
use cribsheet::{edit_distance, longest_common_substring, normalize_folded, score, MatchTier};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScoreInput<'a> {
    query: &'a str,
    candidate: &'a str,
}

/// Cap by characters; the matchers are quadratic.
fn cap(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fuzz_target!(|input: ScoreInput<'_>| {
    let query = normalize_folded(&cap(input.query, 64));
    let candidate = normalize_folded(&cap(input.candidate, 128));

    let s = score(&query, &candidate);
    assert!((0.0..=1.0).contains(&s.score), "score {} out of range", s.score);

    let len = candidate.chars().count();
    assert!(s.span.iter().all(|&i| i < len));
    if s.score == 0.0 {
        assert!(s.span.is_empty());
    }
    if matches!(s.tier, MatchTier::Contains) {
        assert!((0.90..=0.95).contains(&s.score));
    }

    if !query.is_empty() {
        let own = score(&query, &query);
        assert_eq!(own.score, 1.0);
        assert_eq!(own.span.len(), query.chars().count());
    }

    assert_eq!(edit_distance(&query, &candidate), edit_distance(&candidate, &query));
    let common = longest_common_substring(&query, &candidate);
    assert!(candidate.contains(common));
});
