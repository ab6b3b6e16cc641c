// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search invariants.
//!
//! Debug-mode assertions that verify what the rest of the crate promises its
//! callers. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the call that broke the invariant**, not in the highlighter
//!    three layers later
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function         | Invariant                                       |
//! |---------------------------|-------------------------------------------------|
//! | `check_score_bounds`      | every score is in `[0, 1]`                      |
//! | `check_normalized_origin` | origin table is increasing and inside the input |
//! | `check_span_within`       | span indices are original character offsets     |
//! | `check_result_spans`      | every span of a result fits its field           |
//! | `check_results_sorted`    | result list is descending by score              |
//!
//! # Usage
//!
//! ```ignore
//! use cribsheet::verify::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_results_sorted(&results);
//!
//! // In release builds, this is a no-op
//! ```

use crate::normalize::Normalized;
use crate::scoring::ranking::{HIGH_THRESHOLD, MEDIUM_THRESHOLD};
use crate::scoring::similarity::{CHAR_WEIGHT, EDIT_ONLY_WEIGHT, EDIT_WEIGHT, KEYWORD_WEIGHT};
use crate::scoring::{CONTAINS_BASE_SCORE, CONTAINS_MAX_SCORE, EXACT_SCORE, OPTION_WEIGHT};
use crate::types::{MatchSpan, SearchResult};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertions on the scoring constants.
/// If one fails, the crate won't build.
const _: () = {
    // INVARIANT: CONTAINMENT_IS_HIGH
    // the weakest containment hit still lands in the high bucket
    assert!(CONTAINS_BASE_SCORE >= HIGH_THRESHOLD);
    assert!(CONTAINS_BASE_SCORE < CONTAINS_MAX_SCORE);
    assert!(CONTAINS_MAX_SCORE < EXACT_SCORE);

    // INVARIANT: BLEND_IS_CONVEX
    const WEIGHT_SUM: f64 = EDIT_WEIGHT + KEYWORD_WEIGHT + CHAR_WEIGHT;
    assert!(WEIGHT_SUM > 1.0 - 1e-9 && WEIGHT_SUM < 1.0 + 1e-9);

    // INVARIANT: EDIT_ONLY_BELOW_HIGH
    // edit distance alone never reaches the high bucket
    assert!(EDIT_ONLY_WEIGHT < HIGH_THRESHOLD);

    // INVARIANT: OPTION_DISCOUNT
    assert!(OPTION_WEIGHT > 0.0 && OPTION_WEIGHT < 1.0);

    assert!(MEDIUM_THRESHOLD < HIGH_THRESHOLD);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a score is a finite number in `[0, 1]`.
///
/// # Panics (debug builds only)
/// Panics if `score` is NaN or outside the unit interval.
#[inline]
pub fn check_score_bounds(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: score {} outside [0, 1]",
        score
    );
}

// ============================================================================
// NORMALIZATION CONTRACTS
// ============================================================================

/// Check that `normalized` is a valid origin-tracked normalization of
/// `input`: one origin entry per normalized character, strictly increasing,
/// all inside the input.
///
/// # Panics (debug builds only)
/// Panics on a length mismatch, an out-of-range entry, or a non-increasing
/// pair.
#[inline]
pub fn check_normalized_origin(input: &str, normalized: &Normalized) {
    let input_len = input.chars().count();
    debug_assert_eq!(
        normalized.text.chars().count(),
        normalized.origin.len(),
        "Contract violation: origin table length differs from normalized text"
    );
    for (i, &origin) in normalized.origin.iter().enumerate() {
        debug_assert!(
            origin < input_len,
            "Contract violation: origin[{}] = {} >= input length {}",
            i,
            origin,
            input_len
        );
    }
    for pair in normalized.origin.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: origin table not increasing ({} then {})",
            pair[0],
            pair[1]
        );
    }
}

// ============================================================================
// SPAN CONTRACTS
// ============================================================================

/// Check that every index of `span` is a character offset into `text`.
///
/// # Panics (debug builds only)
/// Panics if any index is `>= text.chars().count()`.
#[inline]
pub fn check_span_within(text: &str, span: &MatchSpan) {
    let len = text.chars().count();
    for &index in span {
        debug_assert!(
            index < len,
            "Contract violation: span index {} >= char length {} of {:?}",
            index,
            len,
            text
        );
    }
}

/// Check every span a result carries against the field it annotates.
///
/// Answer spans are concatenated across answer strings, so each index only
/// has to fit the longest answer.
///
/// # Panics (debug builds only)
/// Panics on an out-of-range index or an option key that is not one of the
/// record's options.
#[inline]
pub fn check_result_spans(result: &SearchResult) {
    let record = &result.record;
    check_span_within(&record.question, &result.question_matches);

    let longest_answer = record
        .answer
        .iter()
        .map(|a| a.chars().count())
        .max()
        .unwrap_or(0);
    for &index in &result.answer_matches {
        debug_assert!(
            index < longest_answer,
            "Contract violation: answer span index {} >= longest answer {}",
            index,
            longest_answer
        );
    }

    for (option, span) in &result.option_matches {
        debug_assert!(
            record.options.contains(option),
            "Contract violation: option span keyed by unknown option {:?}",
            option
        );
        check_span_within(option, span);
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that results are sorted by descending score.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_results_sorted(results: &[SearchResult]) {
    for i in 1..results.len() {
        debug_assert!(
            results[i - 1].score >= results[i].score,
            "Contract violation: results[{}].score {} < results[{}].score {}",
            i - 1,
            results[i - 1].score,
            i,
            results[i].score
        );
    }
}
