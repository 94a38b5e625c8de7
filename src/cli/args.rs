//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::constants;
use crate::core::solver::{Mode, Part};
use crate::logging::LogLevel;

/// rednose - count safe reactor reports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Which input to read: the sample (check) or the full puzzle input (solve)
    #[arg(value_enum)]
    pub mode: Mode,

    /// Which rule to count under: 1 = strict, 2 = one level may be removed
    #[arg(value_enum)]
    pub part: Part,

    /// Logging verbosity
    #[arg(long, value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// Read reports from this file instead of the mode's input file
    #[arg(long)]
    pub input: Option<String>,

    /// Directory holding the puzzle input files
    #[arg(long, env = constants::ENV_DATA_DIR)]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the result as a JSON summary
    #[arg(long)]
    pub json: bool,
}
