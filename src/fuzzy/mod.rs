// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy primitives: edit distance and longest common substring.
//!
//! Both are the textbook O(n·m) dynamic programs over `char` sequences. The
//! inputs here are single record fields and OCR'd questions, a few hundred
//! characters at most, so the full table is cheap and keeps the code obvious.
//! Byte-level versions would split multi-byte characters and report garbage
//! for CJK text.

mod lcs;
mod levenshtein;

pub use lcs::*;
pub use levenshtein::*;
