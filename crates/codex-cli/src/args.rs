use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codex")]
#[command(about = "Adaptive dashboard over a martial soul dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dataset file; overrides SOUL_CODEX_DATASET and the config file
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Config file; defaults to SOUL_CODEX_CONFIG or the user config dir
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs here; without it the dashboard logs nothing
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive terminal dashboard (default)
    Tui,

    /// Print aggregated statistics for the dataset
    Summary {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Lay out the dashboard headlessly and print the draw calls
    Layout {
        #[arg(long, default_value = "1280")]
        width: i32,

        #[arg(long, default_value = "900")]
        height: i32,

        /// Layout units per surface unit
        #[arg(long, default_value = "1.0")]
        scale: f32,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
