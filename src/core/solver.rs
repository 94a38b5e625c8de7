//! Puzzle parts and the counting fold.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::core::report::ReportSet;

/// Which input file to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The small sample input
    Check,
    /// The full puzzle input
    Solve,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Check => write!(f, "check"),
            Mode::Solve => write!(f, "solve"),
        }
    }
}

/// Which rule to count reports under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Part {
    /// Strict rule
    #[value(name = "1")]
    #[serde(rename = "1")]
    One,
    /// Tolerant rule (one level may be removed)
    #[value(name = "2")]
    #[serde(rename = "2")]
    Two,
}

impl Part {
    #[must_use]
    pub const fn tolerant(self) -> bool {
        matches!(self, Part::Two)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "1"),
            Part::Two => write!(f, "2"),
        }
    }
}

/// Counts the safe reports for `part`.
#[must_use]
pub fn solve(reports: &ReportSet, part: Part) -> usize {
    reports.count_safe(part.tolerant())
}

/// Result of one run, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub mode: Mode,
    pub part: Part,
    pub input: PathBuf,
    pub reports: usize,
    pub safe: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_tolerance() {
        assert!(!Part::One.tolerant());
        assert!(Part::Two.tolerant());
    }

    #[test]
    fn test_solve_sample() {
        let set = ReportSet::parse(
            "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n",
        )
        .unwrap();
        assert_eq!(solve(&set, Part::One), 2);
        assert_eq!(solve(&set, Part::Two), 4);
    }

    #[test]
    fn test_solve_empty() {
        assert_eq!(solve(&ReportSet::default(), Part::Two), 0);
    }

    #[test]
    fn test_summary_json() {
        let summary = Summary {
            mode: Mode::Check,
            part: Part::Two,
            input: PathBuf::from("data/sample.txt"),
            reports: 6,
            safe: 4,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["mode"], "check");
        assert_eq!(json["part"], "2");
        assert_eq!(json["safe"], 4);
        assert_eq!(json["input"], "data/sample.txt");
    }
}
