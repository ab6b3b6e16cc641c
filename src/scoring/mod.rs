// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a record gets its number.
//!
//! The key insight is that a substring relationship is trusted before any
//! similarity math. If the OCR'd query sits inside a field (or the field inside
//! the query), the score is pinned to `[0.90, 0.95]` without looking further.
//! Similarity blending only runs when OCR mangled the text too much for a
//! substring hit, and ranking then compares plain numbers in `[0, 1]`.

mod core;
pub mod ranking;
pub mod similarity;

pub use self::core::*;
