//! Thin host adapter around zjump-core: argument parsing, config loading,
//! result rendering. All ranking and store logic lives in the core crate.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::time::{SystemTime, UNIX_EPOCH};
use zjump_core::{Config, RecordStore, TouchOutcome, path_utils};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    let store = RecordStore::new(&config.store_path);

    match args.command {
        Commands::Search { query, max_results } => {
            run_search(&store, &config, &query, max_results)
        }
        Commands::Select { path } => run_select(&store, &config, &path),
    }
}

fn run_search(
    store: &RecordStore,
    config: &Config,
    query: &str,
    max_results: Option<usize>,
) -> Result<()> {
    if query.is_empty() {
        eprintln!("Type a part of a directory name");
        return Ok(());
    }

    let max_results = max_results.unwrap_or(config.max_results);
    let results = match store.search(query, max_results) {
        Ok(results) => results,
        Err(err @ zjump_core::Error::StoreRead(_)) => {
            // a missing database is a setup problem, not a crash
            eprintln!(
                "Cannot read z database at {}: {err}",
                store.path().display()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if results.is_empty() {
        eprintln!("No results matching {query}");
        return Ok(());
    }

    for result in &results {
        println!(
            "{:>10.2}  {}",
            result.frecency,
            path_utils::abbreviate_home(&result.record.path)
        );
    }
    Ok(())
}

fn run_select(store: &RecordStore, config: &Config, path: &str) -> Result<()> {
    if !config.update_store {
        tracing::debug!(path, "Store feedback disabled; selection not recorded");
        return Ok(());
    }

    let Some(record) = store.lookup(path)? else {
        eprintln!(
            "'{}' is not tracked in {}",
            path,
            store.path().display()
        );
        return Ok(());
    };

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is set before the unix epoch")?
        .as_secs_f64();

    match store.touch(&record.path, record.rank + 1.0, now)? {
        TouchOutcome::Updated => Ok(()),
        TouchOutcome::NotFound => {
            // the external agent rewrote the file between lookup and touch
            eprintln!("'{path}' vanished from the database before it could be updated");
            Ok(())
        }
    }
}
