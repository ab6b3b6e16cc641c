// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows in and out of a search.
//!
//! Records come in from whoever imported them, results go out to whoever draws
//! highlights. Nothing here is persisted: a `Record` slice lives for one
//! `search` call and every `SearchResult` is built fresh.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchSpan**: every index is a *character* offset into the *original*
//!   text of the field it annotates. Not a byte offset, not an offset into the
//!   normalized text. The highlighter indexes `text.chars()` with these.
//!
//! - **AccuracyFilter**: all three flags unset means "no restriction". This is
//!   how a caller says "show me everything", not an empty selection.
//!
//! - **SearchResult.score**: always in `[0, 1]`.
//!
//! The serde names match the JSON the desktop front-end already speaks, so a
//! transport layer can hand these straight to `serde_json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// RECORDS
// =============================================================================

/// One importable question/answer unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Free-form category label ("single choice", "判断题", ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: Vec<String>,
}

impl Record {
    /// Convenience constructor used heavily by tests and the CLI.
    pub fn new(
        kind: impl Into<String>,
        question: impl Into<String>,
        options: Vec<String>,
        answer: Vec<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            question: question.into(),
            options,
            answer,
        }
    }
}

// =============================================================================
// ACCURACY BUCKETS
// =============================================================================

/// Score bucket a result falls into.
///
/// Ordered from best to worst so `High < Medium < Low`, the same way the
/// result list reads top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyBucket {
    /// `score >= 0.8`
    High,
    /// `0.5 <= score < 0.8`
    Medium,
    /// `score < 0.5`
    Low,
}

impl AccuracyBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            AccuracyBucket::High => "high",
            AccuracyBucket::Medium => "medium",
            AccuracyBucket::Low => "low",
        }
    }
}

impl fmt::Display for AccuracyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which buckets the caller wants back.
///
/// The flags are independent. If none is set the filter selects everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccuracyFilter {
    #[serde(default)]
    pub high: bool,
    #[serde(default)]
    pub medium: bool,
    #[serde(default)]
    pub low: bool,
}

impl AccuracyFilter {
    /// Filter with no bucket selected, which retains everything.
    pub const ALL: AccuracyFilter = AccuracyFilter {
        high: false,
        medium: false,
        low: false,
    };

    pub fn new(high: bool, medium: bool, low: bool) -> Self {
        Self { high, medium, low }
    }

    /// True when no flag is set.
    pub fn is_unrestricted(&self) -> bool {
        !self.high && !self.medium && !self.low
    }

    /// Does this filter keep results in `bucket`?
    pub fn selects(&self, bucket: AccuracyBucket) -> bool {
        // INVARIANT: EMPTY_FILTER_SELECTS_ALL
        if self.is_unrestricted() {
            return true;
        }
        match bucket {
            AccuracyBucket::High => self.high,
            AccuracyBucket::Medium => self.medium,
            AccuracyBucket::Low => self.low,
        }
    }
}

// =============================================================================
// MATCH SPANS
// =============================================================================

/// Character offsets into original text that a match covers.
///
/// Kept as an ordered list rather than a range because answer spans from
/// several answer strings are concatenated into one list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSpan(pub Vec<usize>);

impl MatchSpan {
    pub fn empty() -> Self {
        MatchSpan(Vec::new())
    }

    /// Every index in `start..start + len`.
    pub fn from_range(start: usize, len: usize) -> Self {
        MatchSpan((start..start + len).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Append another span's indices (used for answer spans).
    pub fn extend(&mut self, other: &MatchSpan) {
        self.0.extend_from_slice(&other.0);
    }
}

impl From<Vec<usize>> for MatchSpan {
    fn from(indices: Vec<usize>) -> Self {
        MatchSpan(indices)
    }
}

impl<'a> IntoIterator for &'a MatchSpan {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Which part of a record a score came from.
///
/// Declaration order is also the precedence when two fields tie: the question
/// wins over an answer, an answer wins over an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Question,
    Answer,
    Option,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Question => "question",
            FieldKind::Answer => "answer",
            FieldKind::Option => "option",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One ranked hit.
///
/// Spans are always present, possibly empty. They serialize as `[]`, never as
/// a missing key, so the front-end can tell "nothing to highlight" apart from
/// "field not reported".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "item")]
    pub record: Record,
    pub score: f64,
    /// Diagnostic only. Never used for ordering.
    #[serde(rename = "matched")]
    pub matched_label: String,
    pub question_matches: MatchSpan,
    /// Keyed by the option's original text.
    pub option_matches: BTreeMap<String, MatchSpan>,
    pub answer_matches: MatchSpan,
}

impl SearchResult {
    /// Bucket this result's score falls into.
    pub fn bucket(&self) -> AccuracyBucket {
        crate::scoring::ranking::classify(self.score)
    }
}

// =============================================================================
// WIRE ENVELOPES
// =============================================================================

/// Filter wrapper as sent by the front-end: `{ "accuracyFilters": {...} }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub accuracy_filters: AccuracyFilter,
}

/// Search request body. The record set is not part of it; the transport
/// supplies records from wherever it keeps them (see `RecordStore`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
}

/// Search response body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
}

impl SearchResponse {
    pub fn ok(results: Vec<SearchResult>) -> Self {
        Self {
            success: true,
            message: None,
            results: Some(results),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            results: None,
        }
    }
}
