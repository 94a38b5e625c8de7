//! Dispatch from parsed arguments to a printed result.

use std::io::Write;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing::{debug, info, warn};

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants;
use crate::core::input;
use crate::core::report::ReportSet;
use crate::core::safety;
use crate::core::solver::{self, Summary};
use crate::logging::{self, LogLevel};

/// Settings for one run after merging flags, environment and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub puzzle: String,
    pub log_level: LogLevel,
}

impl Settings {
    /// Flags win over config; config wins over built-in defaults.
    #[must_use]
    pub fn merge(args: &Args, config: Config) -> Self {
        Self {
            data_dir: args
                .data_dir
                .clone()
                .or(config.data_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            puzzle: config
                .puzzle
                .unwrap_or_else(|| constants::DEFAULT_PUZZLE.to_string()),
            log_level: args.log_level.or(config.log_level).unwrap_or_default(),
        }
    }
}

/// Loads config, installs logging at the chosen level and runs the puzzle.
///
/// # Errors
///
/// Returns an error if the config or input cannot be read or parsed.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::merge(args, config);

    logging::scoped(settings.log_level, || dispatch(args, &settings, out))
}

/// Resolves the input, counts safe reports and writes the result to `out`.
///
/// # Errors
///
/// Returns an error if the input is missing or malformed, or `out` fails.
pub fn dispatch(args: &Args, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let source = input::resolve(
        args.input.as_deref(),
        &settings.data_dir,
        &settings.puzzle,
        args.mode,
    );
    info!(part = %args.part, "reading {source}");

    let reports = ReportSet::load(source.path())?;
    if reports.is_empty() {
        warn!(input = %source.path().display(), "input contains no reports");
    }

    let tolerant = args.part.tolerant();
    if tracing::enabled!(tracing::Level::DEBUG) {
        for (line, report) in (1_usize..).zip(&reports) {
            let verdict = safety::assess(report.levels(), tolerant);
            debug!(line, len = report.len(), levels = ?report.levels(), "{verdict}");
        }
    }

    let safe = solver::solve(&reports, args.part);
    info!(reports = reports.len(), safe, "counted safe reports");

    if args.json {
        let summary = Summary {
            mode: args.mode,
            part: args.part,
            input: source.path().to_path_buf(),
            reports: reports.len(),
            safe,
        };
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{safe}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solver::{Mode, Part};
    use clap::Parser;
    use std::fs;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["rednose"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_merge_precedence() {
        let mut a = args(&["check", "1", "--log-level", "INFO"]);
        a.data_dir = None;
        let config = Config {
            data_dir: Some(PathBuf::from("cfg")),
            puzzle: Some("day02".to_string()),
            log_level: Some(LogLevel::Debug),
        };
        let settings = Settings::merge(&a, config);
        assert_eq!(settings.data_dir, PathBuf::from("cfg"));
        assert_eq!(settings.puzzle, "day02");
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_merge_defaults() {
        let mut a = args(&["solve", "2"]);
        a.data_dir = None;
        let settings = Settings::merge(&a, Config::default());
        assert_eq!(settings.data_dir, PathBuf::from("."));
        assert_eq!(settings.puzzle, constants::DEFAULT_PUZZLE);
        assert_eq!(settings.log_level, LogLevel::Warning);
    }

    #[test]
    fn test_dispatch_counts_sample() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("day_sample.txt"),
            "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n",
        )
        .unwrap();
        let settings = Settings {
            data_dir: dir.path().to_path_buf(),
            puzzle: "day".to_string(),
            log_level: LogLevel::Warning,
        };

        for (part, expected) in [("1", "2\n"), ("2", "4\n")] {
            let mut out = Vec::new();
            let a = args(&["check", part]);
            assert_eq!(a.mode, Mode::Check);
            dispatch(&a, &settings, &mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), expected);
        }
    }

    #[test]
    fn test_dispatch_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("reports.txt");
        fs::write(&file, "1 2 3\n3 3 3\n").unwrap();
        let settings = Settings {
            data_dir: PathBuf::from("."),
            puzzle: constants::DEFAULT_PUZZLE.to_string(),
            log_level: LogLevel::Warning,
        };
        let a = args(&["solve", "2", "--json", "--input", &file.to_string_lossy()]);
        assert_eq!(a.part, Part::Two);

        let mut out = Vec::new();
        dispatch(&a, &settings, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["reports"], 2);
        assert_eq!(json["safe"], 1);
        assert_eq!(json["mode"], "solve");
    }

    #[test]
    fn test_dispatch_missing_input() {
        let settings = Settings {
            data_dir: PathBuf::from("/nonexistent/rednose"),
            puzzle: constants::DEFAULT_PUZZLE.to_string(),
            log_level: LogLevel::Warning,
        };
        let mut out = Vec::new();
        let err = dispatch(&args(&["solve", "1"]), &settings, &mut out).unwrap_err();
        assert!(err.to_string().contains("aoc_2024_day_02_input.txt"));
        assert!(out.is_empty());
    }
}
