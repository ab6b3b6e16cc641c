// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cribsheet command-line interface.
//!
//! Two subcommands: `search` to run a query against a JSON record file, and
//! `explain` to score one query against one candidate and show how the
//! number came about. The library does the work; this layer reads files,
//! parses flags and draws.

pub mod commands;
pub mod display;
pub mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use error::CliError;

#[derive(Parser)]
#[command(
    name = "cribsheet",
    about = "Fuzzy question/answer lookup for noisy OCR text",
    version
)]
pub struct Cli {
    /// Log at debug level (overridden by CRIBSHEET_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a record file and display ranked results
    Search {
        /// JSON record file: an array of records or { "answers": [...] }
        #[arg(short, long, env = "CRIBSHEET_RECORDS")]
        records: PathBuf,

        /// Search query. Omit or pass "-" to read it from stdin
        query: Option<String>,

        /// Keep high-accuracy results (score >= 0.8)
        #[arg(long)]
        high: bool,

        /// Keep medium-accuracy results (0.5 <= score < 0.8)
        #[arg(long)]
        medium: bool,

        /// Keep low-accuracy results (score < 0.5)
        #[arg(long)]
        low: bool,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print a JSON response document instead of highlighted text
        #[arg(long)]
        json: bool,
    },

    /// Score one query against one candidate text
    Explain {
        /// Query text, as OCR produced it
        query: String,

        /// Candidate field text, as imported
        candidate: String,
    },
}
