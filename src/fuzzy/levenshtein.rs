// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance.
//!
//! Insert, delete and substitute each cost 1. No transposition discount:
//! "ab" → "ba" is two edits, not one.
//!
//! # Properties
//!
//! - `edit_distance(a, a) = 0`
//! - `edit_distance(a, b) = edit_distance(b, a)`
//! - `edit_distance("", x) = len(x)`
//! - `|len(a) - len(b)| ≤ edit_distance(a, b) ≤ max(len(a), len(b))`

/// Edit distance between `a` and `b`, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

/// Edit distance over pre-decoded character slices.
///
/// Fills the full `(len(a)+1) × (len(b)+1)` table, row-major in one buffer.
pub fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut dp = vec![0usize; rows * cols];

    for i in 0..rows {
        dp[i * cols] = i;
    }
    for j in 0..cols {
        dp[j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let at = i * cols + j;
            dp[at] = if a[i - 1] == b[j - 1] {
                dp[at - cols - 1]
            } else {
                // delete, insert, substitute
                dp[at - cols].min(dp[at - 1]).min(dp[at - cols - 1]) + 1
            };
        }
    }

    dp[rows * cols - 1]
}
