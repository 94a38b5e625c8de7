//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout rednose, including
//! the level step bounds, input file naming, and environment/config names.

// === Safety Rule ===

/// Smallest allowed change between neighbouring levels.
pub const MIN_STEP: i64 = 1;
/// Largest allowed change between neighbouring levels.
pub const MAX_STEP: i64 = 3;

// === Input Files ===

/// Default puzzle file stem; input files are `<stem><suffix>`.
pub const DEFAULT_PUZZLE: &str = "aoc_2024_day_02";
/// Suffix of the sample input used by `check`.
pub const SAMPLE_SUFFIX: &str = "_sample.txt";
/// Suffix of the full puzzle input used by `solve`.
pub const INPUT_SUFFIX: &str = "_input.txt";

// === Path Configuration ===

/// Name of the config subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "rednose";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Environment ===

/// Overrides the directory input files are resolved against.
pub const ENV_DATA_DIR: &str = "REDNOSE_DATA_DIR";

// === Error Messages ===

pub const ERR_INPUT_NOT_FOUND: &str = "Input file not found: ";
pub const ERR_READ_INPUT: &str = "Failed to read input file: ";
pub const ERR_READ_CONFIG: &str = "Failed to read config file: ";
pub const ERR_PARSE_CONFIG: &str = "Invalid config file: ";
