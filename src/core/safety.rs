//! Level safety rules.
//!
//! A report is safe when its levels move in a single direction, fixed by the
//! first adjacent pair, and every step between neighbours has a magnitude of
//! at least [`MIN_STEP`] and at most [`MAX_STEP`]. The tolerant rule (the
//! "problem dampener") also accepts a report that becomes safe after removing
//! exactly one level.
//!
//! Nothing in here logs or allocates beyond the candidate buffer used by the
//! removal search; callers that want diagnostics use [`assess`].

use std::fmt;

use crate::constants::{MAX_STEP, MIN_STEP};

/// Direction of a report, fixed from its first adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Derives the direction from the first two levels.
    ///
    /// Equal levels count as decreasing; the pair is then rejected as flat.
    #[must_use]
    pub fn of(first: i64, second: i64) -> Self {
        if second > first {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }
}

/// Why an adjacent pair broke the strict rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Fewer than two levels, so no direction can be fixed.
    TooShort,
    /// Two neighbouring levels are equal.
    Flat,
    /// The step goes against the direction fixed by the first pair.
    Reversed,
    /// The step is in the right direction but larger than [`MAX_STEP`].
    StepTooLarge,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "fewer than two levels"),
            Self::Flat => write!(f, "no change between levels"),
            Self::Reversed => write!(f, "direction reversed"),
            Self::StepTooLarge => write!(f, "step larger than {MAX_STEP}"),
        }
    }
}

/// First place a report breaks the strict rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Index of the left level of the offending pair (0 for `TooShort`).
    pub index: usize,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::TooShort => write!(f, "{}", self.kind),
            _ => write!(f, "{} at {}->{}", self.kind, self.index, self.index + 1),
        }
    }
}

/// Outcome of checking one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    /// Safe without any removal.
    Safe,
    /// Unsafe under the strict rule, but safe once the level at `removed` is dropped.
    Dampened { violation: Violation, removed: usize },
    /// Unsafe under the rule that was applied.
    Unsafe { violation: Violation },
}

impl Assessment {
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        !matches!(self, Self::Unsafe { .. })
    }

    /// The strict-rule violation, if there was one.
    #[must_use]
    pub const fn violation(&self) -> Option<Violation> {
        match self {
            Self::Safe => None,
            Self::Dampened { violation, .. } | Self::Unsafe { violation } => Some(*violation),
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Dampened { violation, removed } => {
                write!(f, "safe after removing level {removed} ({violation})")
            }
            Self::Unsafe { violation } => write!(f, "unsafe ({violation})"),
        }
    }
}

/// Returns whether `levels` is safe.
///
/// With `tolerant` set, a report that fails the strict rule is still safe if
/// removing any single level makes it strictly safe.
#[must_use]
pub fn is_safe(levels: &[i64], tolerant: bool) -> bool {
    assess(levels, tolerant).is_safe()
}

/// Checks `levels` and reports where and how it failed.
#[must_use]
pub fn assess(levels: &[i64], tolerant: bool) -> Assessment {
    let Some(violation) = first_violation(levels) else {
        return Assessment::Safe;
    };

    if !tolerant {
        return Assessment::Unsafe { violation };
    }

    match dampen(levels) {
        Some(removed) => Assessment::Dampened { violation, removed },
        None => Assessment::Unsafe { violation },
    }
}

/// Finds the first pair that breaks the strict rule, scanning left to right.
///
/// Returns `None` when the report is strictly safe.
#[must_use]
pub fn first_violation(levels: &[i64]) -> Option<Violation> {
    let (first, second) = match levels {
        [first, second, ..] => (*first, *second),
        _ => {
            return Some(Violation {
                index: 0,
                kind: ViolationKind::TooShort,
            })
        }
    };

    let direction = Direction::of(first, second);

    levels
        .windows(2)
        .enumerate()
        .find_map(|(index, pair)| {
            let diff = i128::from(pair[1]) - i128::from(pair[0]);
            step_violation(direction, diff).map(|kind| Violation { index, kind })
        })
}

/// Classifies a single step under a fixed direction.
///
/// Steps are widened to `i128` so levels anywhere in the `i64` range cannot overflow.
fn step_violation(direction: Direction, diff: i128) -> Option<ViolationKind> {
    let signed = match direction {
        Direction::Increasing => diff,
        Direction::Decreasing => -diff,
    };

    if diff == 0 {
        Some(ViolationKind::Flat)
    } else if signed < i128::from(MIN_STEP) {
        Some(ViolationKind::Reversed)
    } else if signed > i128::from(MAX_STEP) {
        Some(ViolationKind::StepTooLarge)
    } else {
        None
    }
}

/// Searches for a single level whose removal leaves a strictly safe report.
///
/// Candidates are tried in ascending index order and each one re-derives its
/// direction from its own first pair. Returns the first index that works.
fn dampen(levels: &[i64]) -> Option<usize> {
    let mut candidate = Vec::with_capacity(levels.len().saturating_sub(1));

    (0..levels.len()).find(|&skip| {
        candidate.clear();
        candidate.extend_from_slice(&levels[..skip]);
        candidate.extend_from_slice(&levels[skip + 1..]);
        first_violation(&candidate).is_none()
    })
}
