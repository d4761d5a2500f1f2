//! daylog library root.
//! Exposes the CLI parser, the high-level run() function, and internal
//! modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod utils;

use api::ApiClient;
use clap::Parser;
use cli::Cli;
use config::Config;
use crate::core::{aggregate, summary};
use errors::AppResult;
use log::debug;
use models::Interval;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .init()
        .ok();

    // A missing .env file is fine; the process environment wins either way.
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;
    let client = ApiClient::new(&cfg);

    let entries = client.fetch_today_entries()?;
    let current = client.fetch_current_entry()?;
    debug!(
        "{} completed entries today, timer running: {}",
        entries.len(),
        current.is_some()
    );

    let ongoing = current.is_some();
    let mut intervals: Vec<Interval> = entries.iter().map(|e| e.to_interval()).collect();
    if let Some(entry) = &current {
        intervals.push(entry.to_interval());
    }

    let now_ms = chrono::Local::now().timestamp_millis();
    let total_ms = aggregate::sum_intervals(&intervals, now_ms);
    let day = summary::build_summary(total_ms, ongoing);

    println!("{}", utils::render_summary(&day));
    Ok(())
}
