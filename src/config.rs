//! Optional user configuration.
//!
//! Read from `<config dir>/rednose/config.toml` unless `--config` names a
//! file. Every key is optional; command-line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::constants;
use crate::logging::LogLevel;

/// Values loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the puzzle input files.
    pub data_dir: Option<PathBuf>,
    /// File stem of the puzzle inputs.
    pub puzzle: Option<String>,
    /// Logging verbosity when `--log-level` is not given.
    pub log_level: Option<LogLevel>,
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::CONFIG_DIR_NAME)
                .join(constants::CONFIG_FILE_NAME)
        })
    }

    /// Loads the config.
    ///
    /// With `explicit` set the file must exist. Without it, a missing default
    /// file yields an empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("{}{}", constants::ERR_READ_CONFIG, path.display()))?;
        Self::parse(&text)
            .wrap_err_with(|| format!("{}{}", constants::ERR_PARSE_CONFIG, path.display()))
    }

    /// Parses config TOML.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML, unknown keys, or bad values.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
