// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for full searches.
//!
//! Random records, random query, random filter. The result list must be
//! sorted, respect the filter, and carry only in-bounds spans.

#![no_main]

use arbitrary::Arbitrary;
use cribsheet::{normalize, search, AccuracyFilter, Record};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    question: String,
    options: Vec<String>,
    answer: Vec<String>,
}

#[derive(Debug, Arbitrary)]
struct SearchInput {
    records: Vec<FuzzRecord>,
    query: String,
    high: bool,
    medium: bool,
    low: bool,
}

fn cap(text: &str) -> String {
    text.chars().take(48).collect()
}

fuzz_target!(|input: SearchInput| {
    let records: Vec<Record> = input
        .records
        .iter()
        .take(16)
        .map(|r| {
            Record::new(
                "",
                cap(&r.question),
                r.options.iter().take(4).map(|o| cap(o)).collect(),
                r.answer.iter().take(2).map(|a| cap(a)).collect(),
            )
        })
        .collect();
    let filter = AccuracyFilter::new(input.high, input.medium, input.low);
    let query = cap(&input.query);

    let results = search(&records, &query, filter);

    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    if normalize(&query).is_empty() {
        assert_eq!(results.len(), records.len());
        return;
    }
    for result in &results {
        assert!(filter.selects(result.bucket()));
        let len = result.record.question.chars().count();
        assert!(result.question_matches.iter().all(|&i| i < len));
        for (option, span) in &result.option_matches {
            let len = option.chars().count();
            assert!(span.iter().all(|&i| i < len));
        }
    }
});
