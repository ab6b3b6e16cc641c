// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-field scoring and the aggregation step that turns a record into a
//! `SearchResult`.
//!
//! A record has three kinds of text: one question, any number of answers, any
//! number of options. Each kind is scored into a `FieldMatch`, tagged with the
//! kind and carrying the highlights in the shape the result needs:
//!
//! - question and answers → one merged span (answer spans from every answer
//!   string are concatenated, not just the best one)
//! - options → one span per option, keyed by the option text
//!
//! `aggregate` then walks the three matches once. The record score is the
//! best field score; the field that first reached it names the match.

use crate::highlight::PositionMap;
use crate::normalize::{fold_case, Normalized};
use crate::scoring::{score, FieldScore, OPTION_WEIGHT};
use crate::types::{FieldKind, MatchSpan, Record, SearchResult};
use crate::verify::contracts::{check_normalized_origin, check_score_bounds, check_span_within};
use std::collections::BTreeMap;

/// Where a field's highlights go in the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Highlights {
    /// One span for the whole field (question, or all answers concatenated).
    Merged(MatchSpan),
    /// One span per option, keyed by the option's original text.
    PerOption(BTreeMap<String, MatchSpan>),
}

/// The best score one kind of field achieved, with its highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub kind: FieldKind,
    pub score: f64,
    pub highlights: Highlights,
}

/// Score `query` against one raw field value.
///
/// `query` must already be normalized and folded. The returned span indexes
/// `original`, ready for a highlighter.
pub fn score_original(query: &str, original: &str) -> FieldScore {
    let normalized = Normalized::new(original);
    check_normalized_origin(original, &normalized);

    let folded = fold_case(&normalized.text);
    let field = score(query, &folded);
    let span = PositionMap::from_normalized(normalized).map_span(&field.span);
    check_span_within(original, &span);

    FieldScore { span, ..field }
}

/// Question field.
pub fn question_match(query: &str, question: &str) -> FieldMatch {
    let field = score_original(query, question);
    FieldMatch {
        kind: FieldKind::Question,
        score: field.score,
        highlights: Highlights::Merged(field.span),
    }
}

/// Best answer score; spans from every answer, in answer order.
pub fn answer_match(query: &str, answers: &[String]) -> FieldMatch {
    let mut best = 0.0_f64;
    let mut span = MatchSpan::empty();
    for answer in answers {
        let field = score_original(query, answer);
        best = best.max(field.score);
        span.extend(&field.span);
    }
    FieldMatch {
        kind: FieldKind::Answer,
        score: best,
        highlights: Highlights::Merged(span),
    }
}

/// Best discounted option score; one span per option.
///
/// Every option gets an entry, possibly an empty span. Options with identical
/// text share a key, the last one wins.
pub fn option_match(query: &str, options: &[String]) -> FieldMatch {
    let mut best = 0.0_f64;
    let mut spans = BTreeMap::new();
    for option in options {
        let field = score_original(query, option).weighted(OPTION_WEIGHT);
        best = best.max(field.score);
        spans.insert(option.clone(), field.span);
    }
    FieldMatch {
        kind: FieldKind::Option,
        score: best,
        highlights: Highlights::PerOption(spans),
    }
}

/// Score every field of `record` against `query` (normalized and folded).
pub fn score_record(record: &Record, query: &str) -> SearchResult {
    let fields = [
        question_match(query, &record.question),
        answer_match(query, &record.answer),
        option_match(query, &record.options),
    ];
    aggregate(record, query, fields)
}

/// Merge tagged field matches into one result.
///
/// Fields are visited in the order given and only a strictly greater score
/// takes over, so earlier fields win ties.
pub fn aggregate(
    record: &Record,
    query: &str,
    fields: impl IntoIterator<Item = FieldMatch>,
) -> SearchResult {
    let mut best = 0.0_f64;
    let mut winner: Option<FieldKind> = None;
    let mut question_matches = MatchSpan::empty();
    let mut answer_matches = MatchSpan::empty();
    let mut option_matches = BTreeMap::new();

    for field in fields {
        if field.score > best {
            best = field.score;
            winner = Some(field.kind);
        }
        match field.highlights {
            Highlights::PerOption(spans) => option_matches = spans,
            Highlights::Merged(span) if field.kind == FieldKind::Answer => answer_matches = span,
            Highlights::Merged(span) => question_matches = span,
        }
    }

    let score = best.min(1.0);
    check_score_bounds(score);

    SearchResult {
        record: record.clone(),
        score,
        matched_label: winner
            .map(|kind| format!("{}: {}", kind, query))
            .unwrap_or_default(),
        question_matches,
        option_matches,
        answer_matches,
    }
}
