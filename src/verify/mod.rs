// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts.
//!
//! Contracts panic in debug builds when an invariant is violated and compile
//! to nothing in release. The search path calls them after every step that
//! produces a score, a span or an ordering, so the test suite trips on an
//! algorithmic bug right where it happens.

pub mod contracts;
