// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the normalizer.
//!
//! Normalization runs on every field of every record for every query. It must
//! never panic, must be idempotent, and its origin table must point back at the
//! very character it claims to have kept. A wrong origin entry means a
//! highlight on the wrong character.

#![no_main]

use cribsheet::normalize::is_noise_char;
use cribsheet::{fold_case, normalize, Normalized};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let normalized = Normalized::new(text);
    let original: Vec<char> = text.chars().collect();

    // Idempotent
    assert_eq!(normalize(&normalized.text), normalized.text);

    // No noise, no edge whitespace
    assert!(!normalized.text.chars().any(is_noise_char));
    assert_eq!(normalized.text.trim(), normalized.text);

    // Origin table: one entry per char, increasing, same character
    assert_eq!(normalized.origin.len(), normalized.text.chars().count());
    assert!(normalized.origin.windows(2).all(|w| w[0] < w[1]));
    for (c, &at) in normalized.text.chars().zip(&normalized.origin) {
        assert_eq!(original[at], c);
    }

    // Folding keeps positions
    assert_eq!(fold_case(&normalized.text).chars().count(), normalized.origin.len());
});
