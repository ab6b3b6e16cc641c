// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cribsheet::AccuracyFilter;

mod cli;
use cli::commands::{load_records, read_query, run_explain, run_search, SearchArgs};
use cli::display::{themed, BOLD, RED};
use cli::{Cli, CliError, Commands};

/// Env var holding the log filter, in `tracing_subscriber::EnvFilter` syntax.
const LOG_ENV: &str = "CRIBSHEET_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Search {
            records,
            query,
            high,
            medium,
            low,
            limit,
            json,
        } => {
            let loaded = load_records(&records)?;
            tracing::debug!(path = %records.display(), count = loaded.len(), "records loaded");
            run_search(SearchArgs {
                records: loaded,
                query: read_query(query)?,
                filter: AccuracyFilter::new(high, medium, low),
                limit,
                json,
            })
        }
        Commands::Explain { query, candidate } => run_explain(&query, &candidate),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        if e.is_broken_pipe() {
            tracing::debug!("stdout closed early");
            return;
        }
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{} {}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}
