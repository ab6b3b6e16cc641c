//! Ranking across a whole question bank.

use super::common::{assert_sorted, question, question_bank, questions, record};
use cribsheet::{search, search_with_options, AccuracyFilter, SearchOptions};

// ============================================================================
// ORDER
// ============================================================================

#[test]
fn test_exact_beats_containment_beats_similarity() {
    let records = vec![
        question("太阳系有九大行星吗"),       // similarity only
        question("请问太阳系有几大行星呢"),   // contains the query
        question("太阳系有几大行星"),         // exact
    ];
    let results = search(&records, "太阳系有几大行星", AccuracyFilter::ALL);

    assert_eq!(
        questions(&results),
        vec!["太阳系有几大行星", "请问太阳系有几大行星呢", "太阳系有九大行星吗"]
    );
    assert_sorted(&results);
}

#[test]
fn test_ocr_noise_still_finds_the_record() {
    // dropped punctuation, an extra space, a stray bracket
    let results = search(&question_bank(), "地球是太阳系中 第几颗行星 (", AccuracyFilter::ALL);
    assert_eq!(results[0].record.question, "（单选）地球是太阳系中第几颗行星？");
}

#[test]
fn test_english_case_insensitive() {
    let results = search(&question_bank(), "RED PLANET", AccuracyFilter::ALL);
    assert_eq!(results[0].record.question, "Which planet is known as the Red Planet?");
    assert!(results[0].score >= 0.9);
}

#[test]
fn test_shorter_container_ranks_higher() {
    // same substring, but it covers more of the shorter field
    let records = vec![question("关于行星的一个很长很长的问题"), question("行星问题")];
    let results = search(&records, "行星", AccuracyFilter::ALL);
    assert_eq!(questions(&results), vec!["行星问题", "关于行星的一个很长很长的问题"]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_ties_keep_record_order() {
    let records = vec![
        record("甲：行星", &[], &[]),
        record("乙：行星", &[], &[]),
        record("丙：行星", &[], &[]),
    ];
    let results = search(&records, "行星", AccuracyFilter::ALL);
    let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
    assert!(scores.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(questions(&results), vec!["甲：行星", "乙：行星", "丙：行星"]);
}

// ============================================================================
// LIMIT
// ============================================================================

#[test]
fn test_limit_keeps_best() {
    let all = search(&question_bank(), "planet", AccuracyFilter::ALL);
    let options = SearchOptions::new(AccuracyFilter::ALL).with_limit(2);
    let limited = search_with_options(&question_bank(), "planet", &options);

    assert_eq!(limited.len(), 2usize.min(all.len()));
    assert_eq!(limited[..], all[..limited.len()]);
}

#[test]
fn test_limit_zero_returns_nothing() {
    let options = SearchOptions::new(AccuracyFilter::ALL).with_limit(0);
    assert!(search_with_options(&question_bank(), "planet", &options).is_empty());
}
