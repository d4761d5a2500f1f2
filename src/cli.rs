//! Command-line interface definition for daylog.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "daylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sum today's ClickUp time entries and print an overtime-aware status line",
    long_about = None
)]
pub struct Cli {
    /// Silence all diagnostic output
    #[arg(long, short)]
    pub quiet: bool,

    /// Increase diagnostic verbosity (-v, -vv, ...)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
