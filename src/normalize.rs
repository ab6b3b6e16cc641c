// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for OCR-noisy input.
//!
//! OCR output is full of stray brackets, quotes and mixed-width punctuation
//! that carry no meaning for matching. Normalization deletes a closed set of
//! those characters outright (no replacement with a space), collapses runs of
//! ASCII spaces, and trims the ends.
//!
//! Deleting characters shifts positions, so every normalized character keeps
//! a pointer back to where it came from. `Normalized::origin[i]` is the
//! character index in the input that produced `text.chars().nth(i)`. The
//! highlighter walks that table; nothing else may assume the two texts line up.
//!
//! Case folding is a separate step (`fold_case`). It never changes the
//! character count, so normalized and folded text share one coordinate space.

// =============================================================================
// NOISE TABLE
// =============================================================================

/// Characters deleted by normalization, sorted by code point.
///
/// ASCII punctuation, CJK brackets/quotes/punctuation, and the ideographic
/// (full-width) space.
const NOISE_CHARS: [char; 48] = [
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '`', '{', '|', '}', '~',
    '\u{00B7}', // ·
    '\u{2014}', // —
    '\u{2026}', // …
    '\u{3000}', // ideographic space
    '\u{3001}', // 、
    '\u{3002}', // 。
    '\u{300A}', // 《
    '\u{300B}', // 》
    '\u{3010}', // 【
    '\u{3011}', // 】
    '\u{FF01}', // ！
    '\u{FF08}', // （
    '\u{FF09}', // ）
    '\u{FF0C}', // ，
    '\u{FF0D}', // －
    '\u{FF1A}', // ：
    '\u{FF1B}', // ；
    '\u{FF1F}', // ？
];

/// Is `c` one of the characters normalization deletes?
#[inline]
pub fn is_noise_char(c: char) -> bool {
    NOISE_CHARS.binary_search(&c).is_ok()
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Normalized text plus the way back to the original.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalized {
    pub text: String,
    /// `origin[i]` = character index in the input of normalized character `i`.
    pub origin: Vec<usize>,
}

impl Normalized {
    /// Normalize `input`, remembering where each surviving character came from.
    pub fn new(input: &str) -> Self {
        // Pass 1: drop noise, collapse ASCII space runs to their first space.
        let mut kept: Vec<(char, usize)> = Vec::with_capacity(input.len());
        for (index, c) in input.chars().enumerate() {
            if is_noise_char(c) {
                continue;
            }
            if c == ' ' && matches!(kept.last(), Some((' ', _))) {
                continue;
            }
            kept.push((c, index));
        }

        // Pass 2: trim whitespace at both ends.
        let start = kept
            .iter()
            .position(|(c, _)| !c.is_whitespace())
            .unwrap_or(kept.len());
        let end = kept
            .iter()
            .rposition(|(c, _)| !c.is_whitespace())
            .map_or(start, |i| i + 1);
        let kept = &kept[start..end];

        Self {
            text: kept.iter().map(|(c, _)| *c).collect(),
            origin: kept.iter().map(|(_, i)| *i).collect(),
        }
    }

    /// Number of characters in the normalized text.
    pub fn char_len(&self) -> usize {
        self.origin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_empty()
    }
}

/// Strip noise characters, collapse ASCII space runs, trim.
///
/// Case-preserving. Idempotent: `normalize(&normalize(t)) == normalize(t)`.
///
/// ```
/// use cribsheet::normalize;
///
/// assert_eq!(normalize("（太阳系）有几大行星？"), "太阳系有几大行星");
/// assert_eq!(normalize("  Vue.js   is  (great)! "), "Vuejs is great");
/// ```
pub fn normalize(input: &str) -> String {
    Normalized::new(input).text
}

/// Lowercase character by character without changing the character count.
///
/// A character whose lowercase form is more than one character (`İ` becomes
/// `i̇`) is left as is. Query and candidates go through the same fold, so the
/// only cost is that such characters match case-sensitively.
pub fn fold_case(input: &str) -> String {
    input.chars().map(fold_char).collect()
}

#[inline]
fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// `fold_case(normalize(input))`, the form every comparison runs on.
pub fn normalize_folded(input: &str) -> String {
    fold_case(&normalize(input))
}

/// Split into lowercase words, dropping single-character tokens.
///
/// Normalizes first, so it is safe to call on raw text.
pub fn words(input: &str) -> Vec<String> {
    normalize(input)
        .split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .map(fold_case)
        .collect()
}
