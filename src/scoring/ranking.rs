// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: accuracy buckets and sort order.
//!
//! Buckets are for filtering, not ordering. The list is sorted by raw score,
//! highest first; the bucket only decides whether a result is shown at all.
//!
//! | Bucket | Score range      |
//! |--------|------------------|
//! | High   | `[0.8, 1.0]`     |
//! | Medium | `[0.5, 0.8)`     |
//! | Low    | `[0.0, 0.5)`     |
//!
//! Ties are left in input order (stable sort). Nothing upstream promises a
//! tie order, so callers should not depend on it beyond "sorted by score".

use crate::types::{AccuracyBucket, AccuracyFilter, SearchResult};
use std::cmp::Ordering;

/// Lowest score in the high bucket.
pub const HIGH_THRESHOLD: f64 = 0.8;

/// Lowest score in the medium bucket.
pub const MEDIUM_THRESHOLD: f64 = 0.5;

/// Which accuracy bucket does `score` fall into?
pub fn classify(score: f64) -> AccuracyBucket {
    if score >= HIGH_THRESHOLD {
        AccuracyBucket::High
    } else if score >= MEDIUM_THRESHOLD {
        AccuracyBucket::Medium
    } else {
        AccuracyBucket::Low
    }
}

/// Does `filter` retain a result with this score?
pub fn retains(filter: &AccuracyFilter, score: f64) -> bool {
    filter.selects(classify(score))
}

/// Compare two results for ranking: higher score first.
///
/// Returns `Equal` on ties so a stable sort keeps input order.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Sort results best-first in place.
pub fn sort_results(results: &mut [SearchResult]) {
    results.sort_by(compare_results);
}
