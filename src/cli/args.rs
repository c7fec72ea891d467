use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE, YEAR_RANGE_END, YEAR_RANGE_START,
};

#[derive(Parser)]
#[command(name = "gsod-aggregator")]
#[command(about = "Aggregates GSOD daily weather station files into yearly state summaries")]
#[command(version)]
pub struct Cli {
    /// Omitting the subcommand runs `build` with its defaults.
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the yearly per-state summary dataset from raw station files
    Build {
        #[arg(
            short,
            long,
            default_value = DEFAULT_INPUT_DIR,
            help = "Directory containing one subdirectory per year"
        )]
        input_dir: PathBuf,

        #[arg(
            short,
            long,
            default_value = DEFAULT_OUTPUT_FILE,
            help = "Output CSV file path"
        )]
        output_file: PathBuf,

        #[arg(long, default_value_t = YEAR_RANGE_START, help = "First year to aggregate")]
        start_year: u16,

        #[arg(long, default_value_t = YEAR_RANGE_END, help = "Last year to aggregate (inclusive)")]
        end_year: u16,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },

    /// Display information about a generated summary dataset
    Info {
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        file: PathBuf,

        #[arg(short, long, default_value = "5")]
        sample: usize,

        #[arg(long, default_value = "false", help = "Emit statistics as JSON")]
        json: bool,
    },
}

impl Commands {
    /// The command a bare invocation runs: a full build with defaults.
    pub fn default_build() -> Self {
        Commands::Build {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            start_year: YEAR_RANGE_START,
            end_year: YEAR_RANGE_END,
            max_workers: num_cpus::get(),
        }
    }
}
