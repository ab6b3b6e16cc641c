// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A shared "current record set" for long-lived hosts.
//!
//! The engine itself takes records as a parameter. A desktop shell or a
//! local HTTP bridge usually wants one record set that an import replaces and
//! many searches read. That is this type: one writer swaps in a new set,
//! readers grab an `Arc` snapshot and search it without holding the lock.
//!
//! A search that started before a `replace` finishes on the old set.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::search::search;
use crate::types::{AccuracyFilter, Record, SearchResult};

/// Single-writer / multi-reader holder for the current record set.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Arc<Vec<Record>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(Arc::new(records)),
        }
    }

    /// Swap in a new record set. Returns the previous one.
    pub fn replace(&self, records: Vec<Record>) -> Arc<Vec<Record>> {
        let count = records.len();
        let previous = std::mem::replace(&mut *self.records.write(), Arc::new(records));
        tracing::debug!(previous = previous.len(), current = count, "record set replaced");
        previous
    }

    /// Current record set. Cheap: clones the `Arc`, not the records.
    pub fn snapshot(&self) -> Arc<Vec<Record>> {
        Arc::clone(&self.records.read())
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Search the current record set. The lock is released before scoring.
    pub fn search(&self, query: &str, filter: AccuracyFilter) -> Vec<SearchResult> {
        let records = self.snapshot();
        search(&records, query, filter)
    }
}
