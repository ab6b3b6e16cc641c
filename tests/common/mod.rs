//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cribsheet::{AccuracyFilter, MatchSpan, Record, SearchResult};
use std::collections::BTreeMap;

// ============================================================================
// RECORD BUILDERS
// ============================================================================

/// Record with no type label.
pub fn record(question: &str, options: &[&str], answers: &[&str]) -> Record {
    Record::new(
        "",
        question,
        options.iter().map(|s| s.to_string()).collect(),
        answers.iter().map(|s| s.to_string()).collect(),
    )
}

/// Record with only a question.
pub fn question(text: &str) -> Record {
    record(text, &[], &[])
}

/// The solar-system record used throughout the scenarios.
pub fn planets_record() -> Record {
    record("太阳系有几大行星", &["8", "9"], &["8"])
}

/// A small mixed-language question bank.
pub fn question_bank() -> Vec<Record> {
    vec![
        planets_record(),
        record("（单选）地球是太阳系中第几颗行星？", &["A. 第二颗", "B. 第三颗", "C. 第四颗"], &["B"]),
        record("月亮会自己发光。", &["对", "错"], &["错"]),
        record("Which planet is known as the Red Planet?", &["Venus", "Mars", "Jupiter"], &["Mars"]),
        record("What is the largest planet in the solar system?", &["Earth", "Saturn", "Jupiter"], &["Jupiter"]),
        record("水的化学式是什么", &["H2O", "CO2"], &["H2O"]),
    ]
}

/// Result with a given score and nothing else, for ranking tests.
pub fn scored(question: &str, score: f64) -> SearchResult {
    SearchResult {
        record: self::question(question),
        score,
        matched_label: String::new(),
        question_matches: MatchSpan::empty(),
        option_matches: BTreeMap::new(),
        answer_matches: MatchSpan::empty(),
    }
}

// ============================================================================
// FILTERS
// ============================================================================

pub fn high_only() -> AccuracyFilter {
    AccuracyFilter::new(true, false, false)
}

pub fn medium_only() -> AccuracyFilter {
    AccuracyFilter::new(false, true, false)
}

pub fn low_only() -> AccuracyFilter {
    AccuracyFilter::new(false, false, true)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Questions of `results`, in order.
pub fn questions(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.record.question.as_str()).collect()
}

/// Characters of `text` at `span`, as a string.
pub fn span_text(text: &str, span: &MatchSpan) -> String {
    let chars: Vec<char> = text.chars().collect();
    span.iter().filter_map(|&i| chars.get(i)).collect()
}

/// Panics unless `results` is sorted best-first.
pub fn assert_sorted(results: &[SearchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}

/// Panics unless every span of `result` indexes the text it annotates.
pub fn assert_spans_in_bounds(result: &SearchResult) {
    let record = &result.record;
    let question_len = record.question.chars().count();
    assert!(
        result.question_matches.iter().all(|&i| i < question_len),
        "question span {:?} past {} chars",
        result.question_matches,
        question_len
    );

    let longest_answer = record.answer.iter().map(|a| a.chars().count()).max().unwrap_or(0);
    assert!(result.answer_matches.iter().all(|&i| i < longest_answer));

    for (option, span) in &result.option_matches {
        let len = option.chars().count();
        assert!(span.iter().all(|&i| i < len), "option {:?} span {:?}", option, span);
    }
}
