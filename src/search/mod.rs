// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranker: where the rubber meets the road.
//!
//! Everything culminates here. The normalizer cleaned the text, the scorer
//! turned pairs into numbers, the position map made spans point at real
//! characters. Now a query runs against a whole record set:
//!
//! 1. Normalize and fold the query once.
//! 2. Empty query → every record at 0.5 with no highlights ("browse all").
//! 3. Otherwise score each record's fields, keep the best, drop results the
//!    accuracy filter doesn't select.
//! 4. Sort best-first. Ties keep record order.
//!
//! With the `parallel` feature, step 3 runs on rayon. The output is the same
//! either way: `par_iter().filter_map().collect()` preserves input order.

pub mod fields;

use crate::normalize::normalize_folded;
use crate::scoring::ranking::{retains, sort_results};
use crate::types::{AccuracyFilter, MatchSpan, Record, SearchResult};
use crate::verify::contracts::{check_result_spans, check_results_sorted};
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use fields::{aggregate, score_original, score_record, FieldMatch, Highlights};

/// Score given to every record when the query is empty.
pub const BROWSE_SCORE: f64 = 0.5;

/// Label attached to results of an empty query.
pub const BROWSE_LABEL: &str = "all results";

/// Knobs for `search_with_options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub filter: AccuracyFilter,
    /// Keep at most this many results, after sorting.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn new(filter: AccuracyFilter) -> Self {
        Self {
            filter,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Rank `records` against `query`, keeping the buckets `filter` selects.
///
/// ```
/// use cribsheet::{search, AccuracyFilter, Record};
///
/// let records = vec![Record::new(
///     "single",
///     "太阳系有几大行星",
///     vec!["8".into(), "9".into()],
///     vec!["8".into()],
/// )];
///
/// let results = search(&records, "行星", AccuracyFilter::ALL);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].question_matches.indices(), &[6, 7]);
/// ```
pub fn search(records: &[Record], query: &str, filter: AccuracyFilter) -> Vec<SearchResult> {
    search_with_options(records, query, &SearchOptions::new(filter))
}

/// `search` with an optional result limit.
pub fn search_with_options(
    records: &[Record],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let query = normalize_folded(query);

    // Browse mode ignores the filter: every record sits in the medium bucket
    // and the caller asked for all of them.
    if query.is_empty() {
        tracing::debug!(records = records.len(), "empty query, returning every record");
        let mut results: Vec<SearchResult> = records.iter().map(browse_result).collect();
        truncate(&mut results, options.limit);
        return results;
    }

    if records.is_empty() {
        tracing::debug!(query = %query, "no records to search");
        return Vec::new();
    }

    let mut results = score_records(records, &query, &options.filter);
    sort_results(&mut results);
    check_results_sorted(&results);

    let matched = results.len();
    truncate(&mut results, options.limit);

    tracing::debug!(
        query = %query,
        records = records.len(),
        matched,
        returned = results.len(),
        "search finished"
    );
    results
}

/// Result for a record when the query is empty.
fn browse_result(record: &Record) -> SearchResult {
    SearchResult {
        record: record.clone(),
        score: BROWSE_SCORE,
        matched_label: BROWSE_LABEL.to_string(),
        question_matches: MatchSpan::empty(),
        option_matches: BTreeMap::new(),
        answer_matches: MatchSpan::empty(),
    }
}

/// Score one record and apply the filter.
fn rank_record(record: &Record, query: &str, filter: &AccuracyFilter) -> Option<SearchResult> {
    let result = score_record(record, query);
    check_result_spans(&result);
    tracing::trace!(
        question = %record.question,
        score = result.score,
        matched = %result.matched_label,
        "scored record"
    );
    retains(filter, result.score).then_some(result)
}

#[cfg(feature = "parallel")]
fn score_records(records: &[Record], query: &str, filter: &AccuracyFilter) -> Vec<SearchResult> {
    records
        .par_iter()
        .filter_map(|record| rank_record(record, query, filter))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_records(records: &[Record], query: &str, filter: &AccuracyFilter) -> Vec<SearchResult> {
    records
        .iter()
        .filter_map(|record| rank_record(record, query, filter))
        .collect()
}

fn truncate(results: &mut Vec<SearchResult>, limit: Option<usize>) {
    if let Some(limit) = limit {
        results.truncate(limit);
    }
}
