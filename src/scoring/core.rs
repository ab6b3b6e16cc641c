// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tiered field scorer.
//!
//! Tiers run in order and the first one that applies wins:
//!
//! | Tier      | Condition                     | Score                          | Span            |
//! |-----------|-------------------------------|--------------------------------|-----------------|
//! | Exact     | `query == candidate`          | 1.0                            | all of candidate|
//! | Contains  | candidate contains query      | `min(0.9 + 0.05·q/c, 0.95)`    | leftmost hit    |
//! | Contained | query contains candidate      | 0.95                           | all of candidate|
//! | Similarity| anything else                 | see `similarity`               | LCS-based       |
//!
//! Inputs must already be normalized and case-folded. Folding is the caller's
//! job because the caller also needs the unfolded text for highlighting.
//!
//! # Key Invariant: Score Bounds
//!
//! Every score is in `[0, 1]`. Containment lands in `[0.90, 0.95]`. The
//! similarity blend is a convex combination of three values in `[0, 1]`.

use super::similarity::{locate, smart_similarity};
use crate::types::MatchSpan;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score for an exact match.
pub const EXACT_SCORE: f64 = 1.0;

/// Floor of the containment band.
pub const CONTAINS_BASE_SCORE: f64 = 0.9;

/// How much full coverage of the candidate adds on top of the floor.
pub const CONTAINS_COVERAGE_WEIGHT: f64 = 0.05;

/// Ceiling of the containment band, also the score when the query contains
/// the whole candidate.
pub const CONTAINS_MAX_SCORE: f64 = 0.95;

/// Weight applied to option scores before they compete with question and
/// answer scores.
pub const OPTION_WEIGHT: f64 = 0.8;

// =============================================================================
// FIELD SCORE
// =============================================================================

/// Which tier produced a score. Diagnostic; ranking only looks at the number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchTier {
    /// Query and candidate are identical.
    Exact,
    /// Candidate contains the query.
    Contains,
    /// Query contains the candidate.
    Contained,
    /// Shared words: weighted blend of three similarities.
    Similarity { edit: f64, keyword: f64, chars: f64 },
    /// No shared words but close enough by edit distance.
    EditOnly { edit: f64 },
    /// Nothing worth reporting.
    NoMatch,
}

impl MatchTier {
    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Contains => "contains",
            MatchTier::Contained => "contained",
            MatchTier::Similarity { .. } => "similarity",
            MatchTier::EditOnly { .. } => "edit-only",
            MatchTier::NoMatch => "none",
        }
    }
}

/// Score of one query against one field value.
///
/// `span` indexes the *candidate as passed in* (normalized, folded). Map it
/// through `PositionMap` before handing it to a highlighter.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldScore {
    pub score: f64,
    pub span: MatchSpan,
    pub tier: MatchTier,
}

impl FieldScore {
    pub fn none() -> Self {
        Self {
            score: 0.0,
            span: MatchSpan::empty(),
            tier: MatchTier::NoMatch,
        }
    }

    /// Scale the score (option discount). The span is unchanged.
    pub fn weighted(mut self, weight: f64) -> Self {
        self.score *= weight;
        self
    }
}

/// Score `candidate` against `query`. Both already normalized and folded.
///
/// ```
/// use cribsheet::{score, MatchTier};
///
/// let exact = score("行星", "行星");
/// assert_eq!(exact.score, 1.0);
///
/// let inside = score("行星", "太阳系有几大行星");
/// assert_eq!(inside.tier, MatchTier::Contains);
/// assert_eq!(inside.span.indices(), &[6, 7]);
/// ```
pub fn score(query: &str, candidate: &str) -> FieldScore {
    if query.is_empty() || candidate.is_empty() {
        return FieldScore::none();
    }

    let candidate_len = candidate.chars().count();

    if query == candidate {
        return FieldScore {
            score: EXACT_SCORE,
            span: MatchSpan::from_range(0, candidate_len),
            tier: MatchTier::Exact,
        };
    }

    if let Some((start, query_len)) = locate(candidate, query) {
        return FieldScore {
            score: containment_score(query_len, candidate_len),
            span: MatchSpan::from_range(start, query_len),
            tier: MatchTier::Contains,
        };
    }

    if query.contains(candidate) {
        return FieldScore {
            score: CONTAINS_MAX_SCORE,
            span: MatchSpan::from_range(0, candidate_len),
            tier: MatchTier::Contained,
        };
    }

    smart_similarity(query, candidate)
}

/// `0.9 + 0.05 × (query_len / candidate_len)`, capped at 0.95.
pub fn containment_score(query_len: usize, candidate_len: usize) -> f64 {
    if candidate_len == 0 {
        return CONTAINS_BASE_SCORE;
    }
    let coverage = query_len as f64 / candidate_len as f64;
    // INVARIANT: CONTAINMENT_BAND (0.90 ≤ score ≤ 0.95)
    (CONTAINS_BASE_SCORE + coverage * CONTAINS_COVERAGE_WEIGHT).min(CONTAINS_MAX_SCORE)
}
