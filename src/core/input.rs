use crate::constants;
use crate::core::solver::Mode;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the reports for a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// File chosen by mode inside the data directory
    Puzzle { mode: Mode, path: PathBuf },
    /// File named explicitly with `--input`
    Explicit(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            InputSource::Puzzle { path, .. } | InputSource::Explicit(path) => path,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Puzzle { mode, path } => write!(f, "{mode} input {}", path.display()),
            InputSource::Explicit(path) => write!(f, "explicit input {}", path.display()),
        }
    }
}

/// Helper to expand paths with ~ to standard `PathBuf`
#[must_use]
pub fn expand_home(path_str: &str) -> PathBuf {
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path_str)
}

/// File name for a mode, e.g. `aoc_2024_day_02_sample.txt`
#[must_use]
pub fn file_name(puzzle: &str, mode: Mode) -> String {
    let suffix = match mode {
        Mode::Check => constants::SAMPLE_SUFFIX,
        Mode::Solve => constants::INPUT_SUFFIX,
    };
    format!("{puzzle}{suffix}")
}

/// Resolves the input for a run.
///
/// An explicit path wins; otherwise the mode picks a file in `data_dir`.
/// Existence is checked when the reports are loaded, not here.
#[must_use]
pub fn resolve(
    explicit: Option<&str>,
    data_dir: &Path,
    puzzle: &str,
    mode: Mode,
) -> InputSource {
    // 1. Explicit file
    if let Some(input) = explicit {
        return InputSource::Explicit(expand_home(input));
    }

    // 2. Mode-based file in the data directory
    let data_dir = expand_home(&data_dir.to_string_lossy());
    InputSource::Puzzle {
        mode,
        path: data_dir.join(file_name(puzzle, mode)),
    }
}
