// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Everything the CLI can fail at. The engine itself cannot fail.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read record file {path}: {source}")]
    ReadRecords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("record file {path} is not a record array or {{\"answers\": [...]}}: {source}")]
    ParseRecords {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read query from stdin: {0}")]
    ReadQuery(#[source] std::io::Error),

    #[error("cannot serialize response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Write(#[from] std::io::Error),
}

impl CliError {
    /// The reader on the other end of stdout went away (`| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
