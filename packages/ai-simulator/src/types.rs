//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per game plus the CSV summary.
    Jsonl,
    /// CSV summary only.
    Csv,
}
