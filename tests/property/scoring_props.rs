//! Scorer properties over normalized, folded inputs.

use super::strategies::{non_empty_text, noisy_text};
use cribsheet::{normalize_folded, score, MatchSpan, MatchTier};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_score_in_unit_interval(q in noisy_text(), c in noisy_text()) {
        let s = score(&normalize_folded(&q), &normalize_folded(&c));
        prop_assert!((0.0..=1.0).contains(&s.score), "score {}", s.score);
    }

    #[test]
    fn prop_self_score_is_exact(text in non_empty_text()) {
        let folded = normalize_folded(&text);
        let s = score(&folded, &folded);
        prop_assert_eq!(s.score, 1.0);
        prop_assert_eq!(s.tier, MatchTier::Exact);
        prop_assert_eq!(s.span, MatchSpan::from_range(0, folded.chars().count()));
    }

    #[test]
    fn prop_containment_band(
        prefix in noisy_text(),
        query in non_empty_text(),
        suffix in noisy_text(),
    ) {
        let q = normalize_folded(&query);
        let c = normalize_folded(&format!("{}x{}x{}", prefix, query, suffix));
        prop_assume!(c != q && c.contains(q.as_str()));
        let s = score(&q, &c);
        prop_assert!((0.90..=0.95).contains(&s.score), "score {}", s.score);
        prop_assert_eq!(s.tier, MatchTier::Contains);
    }

    #[test]
    fn prop_span_inside_candidate(q in noisy_text(), c in noisy_text()) {
        let c = normalize_folded(&c);
        let s = score(&normalize_folded(&q), &c);
        let len = c.chars().count();
        prop_assert!(s.span.iter().all(|&i| i < len));
    }

    #[test]
    fn prop_zero_score_has_empty_span(q in noisy_text(), c in noisy_text()) {
        let s = score(&normalize_folded(&q), &normalize_folded(&c));
        if s.score == 0.0 {
            prop_assert!(s.span.is_empty());
            prop_assert_eq!(s.tier, MatchTier::NoMatch);
        }
    }

    #[test]
    fn prop_span_is_contiguous(q in noisy_text(), c in noisy_text()) {
        let s = score(&normalize_folded(&q), &normalize_folded(&c));
        prop_assert!(s.span.indices().windows(2).all(|w| w[1] == w[0] + 1));
    }
}
