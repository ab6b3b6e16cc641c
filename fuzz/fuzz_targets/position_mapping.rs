// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for normalized-to-original position mapping.
//!
//! Any (start, len) pair, in range or not, must map to indices inside the
//! original text, and the mapped characters must be exactly the normalized
//! characters they came from.

#![no_main]

use arbitrary::Arbitrary;
use cribsheet::{map_to_original, normalize};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MapInput<'a> {
    original: &'a str,
    start: u16,
    len: u16,
}

fuzz_target!(|input: MapInput<'_>| {
    let original: Vec<char> = input.original.chars().collect();
    let normalized = normalize(input.original);
    let start = input.start as usize;
    let len = input.len as usize;

    let span = map_to_original(input.original, &normalized, start, len);
    assert!(span.iter().all(|&i| i < original.len()));

    let expected: String = normalized.chars().skip(start).take(len).collect();
    let mapped: String = span.iter().map(|&i| original[i]).collect();
    assert_eq!(mapped, expected);
});
