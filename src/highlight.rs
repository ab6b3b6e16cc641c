// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Position mapping: normalized coordinates back to original text.
//!
//! The scorer works on normalized, folded text. The UI highlights the text the
//! user actually imported. Between the two, characters were deleted (noise),
//! merged (space runs) and trimmed, so index `i` in one is not index `i` in
//! the other.
//!
//! The mapping table is built once per field by running the normalizer with
//! origin tracking. A lookup is a table slice. Indices past the table are
//! dropped, never guessed.
//!
//! # Invariant
//!
//! Every index this module returns is `< original.chars().count()`.

use crate::normalize::Normalized;
use crate::types::MatchSpan;

/// Normalized-index → original-index table for one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap {
    normalized: Normalized,
}

impl PositionMap {
    /// Build the table for `original`.
    pub fn new(original: &str) -> Self {
        Self {
            normalized: Normalized::new(original),
        }
    }

    /// Reuse an already-computed normalization.
    pub fn from_normalized(normalized: Normalized) -> Self {
        Self { normalized }
    }

    /// The normalized text the table indexes.
    pub fn normalized(&self) -> &str {
        &self.normalized.text
    }

    /// Number of entries (normalized characters).
    pub fn len(&self) -> usize {
        self.normalized.origin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.origin.is_empty()
    }

    /// Original index of normalized character `index`, if it exists.
    pub fn original_index(&self, index: usize) -> Option<usize> {
        self.normalized.origin.get(index).copied()
    }

    /// Original indices for normalized range `start..start + len`.
    pub fn map_range(&self, start: usize, len: usize) -> MatchSpan {
        let origin = &self.normalized.origin;
        let from = start.min(origin.len());
        let to = start.saturating_add(len).min(origin.len());
        MatchSpan(origin[from..to].to_vec())
    }

    /// Original indices for every normalized index in `span`.
    pub fn map_span(&self, span: &MatchSpan) -> MatchSpan {
        span.iter()
            .filter_map(|&index| self.original_index(index))
            .collect::<Vec<_>>()
            .into()
    }
}

/// Map normalized range `start..start + len` back to `original`.
///
/// `normalized` must be `normalize(original)` (optionally case-folded, which
/// keeps character positions). Positions beyond its length are skipped.
pub fn map_to_original(original: &str, normalized: &str, start: usize, len: usize) -> MatchSpan {
    let map = PositionMap::new(original);
    let limit = normalized.chars().count();
    let end = start.saturating_add(len).min(limit);
    map.map_range(start, end.saturating_sub(start))
}
