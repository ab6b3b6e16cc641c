//! The reference scenarios: one record, a handful of queries, exact numbers.

use super::common::{planets_record, scored, span_text};
use cribsheet::scoring::ranking::{retains, sort_results};
use cribsheet::{search, AccuracyFilter, MatchSpan, MatchTier};

#[test]
fn exact_question_scores_one_and_highlights_everything() {
    let records = vec![planets_record()];
    let results = search(&records, "太阳系有几大行星", AccuracyFilter::ALL);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 1.0);
    // every character of the 8-character question
    assert_eq!(results[0].question_matches, MatchSpan::from_range(0, 8));
    assert_eq!(results[0].matched_label, "question: 太阳系有几大行星");
}

#[test]
fn substring_query_lands_in_containment_band() {
    let records = vec![planets_record()];
    let results = search(&records, "行星", AccuracyFilter::ALL);

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(
        (0.90..=0.95).contains(&result.score),
        "containment score {} outside band",
        result.score
    );
    assert_eq!(result.question_matches.indices(), &[6, 7]);
    assert_eq!(span_text(&result.record.question, &result.question_matches), "行星");
}

#[test]
fn containment_tier_reported_by_scorer() {
    let field = cribsheet::score("行星", "太阳系有几大行星");
    assert_eq!(field.tier, MatchTier::Contains);
}

#[test]
fn high_filter_keeps_only_high_bucket() {
    let filter = AccuracyFilter::new(true, false, false);
    let kept: Vec<f64> = [0.95, 0.6, 0.3]
        .into_iter()
        .filter(|&s| retains(&filter, s))
        .collect();
    assert_eq!(kept, vec![0.95]);
}

#[test]
fn unset_filter_keeps_everything_in_score_order() {
    let mut results = vec![scored("low", 0.3), scored("high", 0.95), scored("mid", 0.6)];
    results.retain(|r| retains(&AccuracyFilter::ALL, r.score));
    sort_results(&mut results);

    let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![0.95, 0.6, 0.3]);
}

#[test]
fn option_hit_is_discounted() {
    let records = vec![planets_record()];
    let results = search(&records, "9", AccuracyFilter::ALL);

    assert_eq!(results.len(), 1);
    // exact option match, discounted by 0.8
    assert!((results[0].score - 0.8).abs() < 1e-12);
    assert_eq!(results[0].matched_label, "option: 9");
    assert_eq!(results[0].option_matches["9"].indices(), &[0]);
    assert!(results[0].option_matches["8"].is_empty());
}

#[test]
fn answer_hit_beats_discounted_option() {
    // "8" is both an option and the answer: the answer's 1.0 wins
    let records = vec![planets_record()];
    let results = search(&records, "8", AccuracyFilter::ALL);

    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[0].matched_label, "answer: 8");
    assert_eq!(results[0].answer_matches.indices(), &[0]);
    assert_eq!(results[0].option_matches["8"].indices(), &[0]);
}
