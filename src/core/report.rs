//! Report types and input parsing.

use std::fs;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::constants;
use crate::core::safety;

/// One line of levels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    levels: Vec<i64>,
}

impl Report {
    #[must_use]
    pub fn new(levels: Vec<i64>) -> Self {
        Self { levels }
    }

    #[must_use]
    pub fn levels(&self) -> &[i64] {
        &self.levels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn is_safe(&self, tolerant: bool) -> bool {
        safety::is_safe(&self.levels, tolerant)
    }
}

impl FromStr for Report {
    type Err = ParseIntError;

    /// Parses whitespace-separated signed integers. A blank line is an empty report.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        line.split_whitespace()
            .map(str::parse::<i64>)
            .collect::<Result<Vec<i64>, _>>()
            .map(Self::new)
    }
}

/// All reports from one input, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSet {
    reports: Vec<Report>,
}

impl ReportSet {
    /// Parses one report per line.
    ///
    /// # Errors
    ///
    /// Returns an error naming the 1-based line and the offending token if any
    /// token is not a decimal integer.
    pub fn parse(text: &str) -> Result<Self> {
        let reports = text
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.parse::<Report>().map_err(|err| {
                    let token = line
                        .split_whitespace()
                        .find(|t| t.parse::<i64>().is_err())
                        .unwrap_or_default();
                    eyre!("line {}: invalid level {token:?}: {err}", idx + 1)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { reports })
    }

    /// Reads and parses an input file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(eyre!("{}{}", constants::ERR_INPUT_NOT_FOUND, path.display()));
        }

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("{}{}", constants::ERR_READ_INPUT, path.display()))?;

        Self::parse(&text).wrap_err_with(|| format!("Malformed input in {}", path.display()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.reports.iter()
    }

    /// Number of reports that are safe under the chosen rule.
    #[must_use]
    pub fn count_safe(&self, tolerant: bool) -> usize {
        self.reports.iter().filter(|r| r.is_safe(tolerant)).count()
    }
}

impl<'a> IntoIterator for &'a ReportSet {
    type Item = &'a Report;
    type IntoIter = std::slice::Iter<'a, Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

    #[test]
    fn test_parse_line() {
        let report: Report = "  7 6\t4 2 1 ".parse().unwrap();
        assert_eq!(report.levels(), &[7, 6, 4, 2, 1]);
    }

    #[test]
    fn test_parse_signed() {
        let report: Report = "-3 -1 +2".parse().unwrap();
        assert_eq!(report.levels(), &[-3, -1, 2]);
    }

    #[test]
    fn test_blank_line_is_empty_report() {
        let report: Report = "   ".parse().unwrap();
        assert!(report.is_empty());
        assert!(!report.is_safe(true));
    }

    #[test]
    fn test_parse_set_counts() {
        let set = ReportSet::parse(SAMPLE).unwrap();
        assert_eq!(set.len(), 6);
        assert_eq!(set.count_safe(false), 2);
        assert_eq!(set.count_safe(true), 4);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let set = ReportSet::parse("1 2 3\n\n3 2 1\n").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.count_safe(true), 2);
    }

    #[test]
    fn test_iterates_in_file_order() {
        let set = ReportSet::parse("1 2\n\n5 4 3\n").unwrap();
        let lens: Vec<usize> = (&set).into_iter().map(Report::len).collect();
        assert_eq!(lens, [2, 0, 3]);
        assert!(!set.is_empty());
        assert!(ReportSet::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_names_line_and_token() {
        let err = ReportSet::parse("1 2 3\n4 five 6\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("five"), "{msg}");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReportSet::load(Path::new("/nonexistent/rednose/input.txt")).unwrap_err();
        assert!(err.to_string().starts_with(constants::ERR_INPUT_NOT_FOUND));
    }
}
