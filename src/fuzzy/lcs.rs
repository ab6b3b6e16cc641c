// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest common substring (contiguous, not subsequence).
//!
//! Used to find something to highlight when neither string contains the
//! other. Ties go to the run that ends earliest in `a`: the scan is row-major
//! over `a` and only a strictly longer run replaces the current best.

/// Longest contiguous run shared by `a` and `b`, as a slice of `a`.
///
/// Empty iff the two strings share no character.
pub fn longest_common_substring<'a>(a: &'a str, b: &str) -> &'a str {
    let a_chars: Vec<(usize, char)> = a.char_indices().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let Some((start, len)) = longest_common_run(
        &a_chars.iter().map(|(_, c)| *c).collect::<Vec<_>>(),
        &b_chars,
    ) else {
        return "";
    };

    let byte_start = a_chars[start].0;
    let byte_end = a_chars
        .get(start + len)
        .map_or(a.len(), |(offset, _)| *offset);
    &a[byte_start..byte_end]
}

/// Character start and length (in `a`) of the longest common run, if any.
pub fn longest_common_run(a: &[char], b: &[char]) -> Option<(usize, usize)> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    // Two rows are enough: dp[i][j] only reads dp[i-1][j-1].
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best_len = 0;
    let mut best_end = 0;

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] { prev[j - 1] + 1 } else { 0 };
            if curr[j] > best_len {
                best_len = curr[j];
                best_end = i;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_len > 0).then(|| (best_end - best_len, best_len))
}
