// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy question/answer lookup for noisy OCR text.
//!
//! Somebody screenshots a question, OCR turns it into text with a dropped
//! character here and a stray bracket there, and this crate finds the record
//! it came from in an imported question bank. Every result carries character
//! spans that point into the *original* record text, so a front-end can
//! highlight exactly what matched.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ normalize   │────▶│  scoring     │────▶│  search      │
//! │ (noise,     │     │ (tiers,      │     │ (fields,     │
//! │  origin map)│     │  similarity) │     │  filter,sort)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ highlight   │     │  fuzzy       │     │  verify      │
//! │ (positions) │     │ (edit, LCS)  │     │ (contracts)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Module Map
//!
//! | Module      | What it owns                                   | Key Properties              |
//! |-------------|------------------------------------------------|-----------------------------|
//! | `normalize` | Noise removal, space collapse, case fold       | Idempotent, length-stable fold |
//! | `fuzzy`     | Edit distance, longest common substring        | Symmetric, char-based       |
//! | `scoring`   | Tiered field score, buckets, sort order        | Score in `[0, 1]`           |
//! | `highlight` | Normalized → original character positions      | Indices inside the original |
//! | `search`    | Record ranking with per-field highlights       | Sorted, filter-respecting   |
//! | `store`     | Shared current record set                      | Snapshot reads              |
//! | `verify`    | Debug-build runtime contracts                  | Zero-cost in release        |
//!
//! # Usage
//!
//! ```
//! use cribsheet::{search, AccuracyFilter, Record};
//!
//! let records = vec![Record::new(
//!     "single",
//!     "（太阳系）有几大行星？",
//!     vec!["8".into(), "9".into()],
//!     vec!["8".into()],
//! )];
//!
//! let results = search(&records, "太阳系有几大行星", AccuracyFilter::ALL);
//! assert_eq!(results[0].score, 1.0);
//! // spans index the original text, brackets and all
//! assert_eq!(results[0].question_matches.indices(), &[1, 2, 3, 5, 6, 7, 8, 9]);
//! ```

// Module declarations
pub mod fuzzy;
pub mod highlight;
pub mod normalize;
pub mod scoring;
pub mod search;
pub mod store;
pub mod types;
pub mod verify;

// Re-exports for public API
pub use fuzzy::{edit_distance, longest_common_substring};
pub use highlight::{map_to_original, PositionMap};
pub use normalize::{fold_case, normalize, normalize_folded, words, Normalized};
pub use scoring::ranking::{classify, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use scoring::{score, FieldScore, MatchTier, OPTION_WEIGHT};
pub use search::{search, search_with_options, FieldMatch, Highlights, SearchOptions};
pub use store::RecordStore;
pub use types::{
    AccuracyBucket, AccuracyFilter, FieldKind, MatchSpan, Record, SearchFilters, SearchRequest,
    SearchResponse, SearchResult,
};
