// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Deserialize;

use cribsheet::scoring::similarity::locate;
use cribsheet::search::score_original;
use cribsheet::{
    normalize, normalize_folded, score, search_with_options, AccuracyFilter, MatchTier,
    PositionMap, Record, SearchOptions, SearchResponse, SearchResult,
};

use super::display::{
    bucket_badge, field_name, highlight, row, score_percent, section_bot, section_top, themed,
    tier_label, GRAY,
};
use super::error::{CliError, Result};

/// A record file is either a bare array or the front-end's export envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    List(Vec<Record>),
    Wrapped { answers: Vec<Record> },
}

impl RecordFile {
    fn into_records(self) -> Vec<Record> {
        match self {
            RecordFile::List(records) | RecordFile::Wrapped { answers: records } => records,
        }
    }
}

/// Load records from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadRecords {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text).map_err(|source| CliError::ParseRecords {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_records(text: &str) -> serde_json::Result<Vec<Record>> {
    serde_json::from_str::<RecordFile>(text).map(RecordFile::into_records)
}

/// The query argument, or stdin when it is absent or "-".
pub fn read_query(arg: Option<String>) -> Result<String> {
    match arg {
        Some(query) if query != "-" => Ok(query),
        _ => {
            let mut query = String::new();
            io::stdin()
                .read_to_string(&mut query)
                .map_err(CliError::ReadQuery)?;
            Ok(query)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

pub struct SearchArgs {
    pub records: Vec<Record>,
    pub query: String,
    pub filter: AccuracyFilter,
    pub limit: Option<usize>,
    pub json: bool,
}

pub fn run_search(args: SearchArgs) -> Result<()> {
    let options = SearchOptions {
        filter: args.filter,
        limit: args.limit,
    };
    let results = search_with_options(&args.records, &args.query, &options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let json = serde_json::to_string_pretty(&SearchResponse::ok(results))?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "{}", themed(GRAY, &[], "no results"))?;
        return Ok(());
    }
    let query = normalize_folded(&args.query);
    for (rank, result) in results.iter().enumerate() {
        print_result(&mut out, rank + 1, result, &query)?;
    }
    out.flush()?;
    Ok(())
}

fn print_result(
    out: &mut impl Write,
    rank: usize,
    result: &SearchResult,
    query: &str,
) -> io::Result<()> {
    let bucket = result.bucket();
    section_top(
        out,
        &format!(
            "#{} {} {}",
            rank,
            score_percent(result.score, bucket),
            bucket_badge(bucket)
        ),
    )?;

    let record = &result.record;
    if !record.kind.is_empty() {
        row(out, &format!("{}{}", field_name("type"), record.kind))?;
    }
    row(
        out,
        &format!(
            "{}{}",
            field_name("question"),
            highlight(&record.question, &result.question_matches)
        ),
    )?;
    for option in &record.options {
        let span = result.option_matches.get(option).cloned().unwrap_or_default();
        row(out, &format!("{}{}", field_name("option"), highlight(option, &span)))?;
    }
    if !record.answer.is_empty() {
        row(out, &format!("{}{}", field_name("answer"), answer_line(record, query)))?;
    }
    if !result.matched_label.is_empty() {
        row(out, &themed(GRAY, &[], &format!("matched {}", result.matched_label)))?;
    }
    section_bot(out)
}

/// Answers joined by " | ".
///
/// The result carries one concatenated span for all answers, so each answer
/// is re-scored to find its own highlights.
fn answer_line(record: &Record, query: &str) -> String {
    record
        .answer
        .iter()
        .map(|answer| highlight(answer, &score_original(query, answer).span))
        .collect::<Vec<_>>()
        .join(" | ")
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPLAIN
// ═══════════════════════════════════════════════════════════════════════════

pub fn run_explain(query: &str, candidate: &str) -> Result<()> {
    let folded_query = normalize_folded(query);
    let map = PositionMap::new(candidate);
    let folded_candidate = cribsheet::fold_case(map.normalized());
    let field = score(&folded_query, &folded_candidate);
    let original_span = map.map_span(&field.span);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    section_top(&mut out, "explain")?;
    row(&mut out, &format!("{}{}", field_name("query"), normalize(query)))?;
    row(&mut out, &format!("{}{}", field_name("candidate"), map.normalized()))?;
    row(&mut out, &format!("{}{}", field_name("tier"), tier_label(&field.tier)))?;
    match field.tier {
        MatchTier::Similarity { edit, keyword, chars } => {
            row(
                &mut out,
                &format!(
                    "{}edit {:.3}  keyword {:.3}  chars {:.3}",
                    field_name("signals"),
                    edit,
                    keyword,
                    chars
                ),
            )?;
        }
        MatchTier::EditOnly { edit } => {
            row(&mut out, &format!("{}edit {:.3}", field_name("signals"), edit))?;
        }
        MatchTier::Contains => {
            if let Some((start, len)) = locate(&folded_candidate, &folded_query) {
                row(
                    &mut out,
                    &format!("{}chars {}..{}", field_name("at"), start, start + len),
                )?;
            }
        }
        _ => {}
    }
    let bucket = cribsheet::classify(field.score);
    row(
        &mut out,
        &format!(
            "{}{} {}",
            field_name("score"),
            score_percent(field.score, bucket),
            bucket_badge(bucket)
        ),
    )?;
    row(
        &mut out,
        &format!("{}{}", field_name("match"), highlight(candidate, &original_span)),
    )?;
    section_bot(&mut out)?;
    out.flush()?;
    Ok(())
}
