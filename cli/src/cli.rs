use std::path::PathBuf;

use clap::Parser;
use corelib::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use engine::batch::DEFAULT_BATCH_SIZE;

#[derive(Debug, Parser)]
#[clap(
    name = "microanalyse",
    version,
    about = "MicroScope: market microstructure metrics over order-book snapshots"
)]
pub struct Cli {
    /// Tick file: JSON Lines, or one JSON array of tick objects
    #[clap(long)]
    pub input: PathBuf,

    /// Directory for the generated reports (created if missing)
    #[clap(long)]
    pub outdir: PathBuf,

    /// Symbol the ticks belong to; part of every record key
    #[clap(long)]
    pub ticker: String,

    /// TOML config file; missing or invalid files fall back to defaults
    #[clap(long, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Ticks per processing batch
    #[clap(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Also write a summary decision for the whole run
    #[clap(long)]
    pub summary: bool,

    /// Emit logs as JSON
    #[clap(long)]
    pub json_logs: bool,
}
