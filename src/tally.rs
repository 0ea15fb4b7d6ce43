//! Core accumulation rule for grade files
//!
//! A grade file is an ordered sequence of integer lines. The first line is the
//! baseline; scanning accumulates every value of at least 1, skips smaller
//! values, and stops early at the `-999` terminator. The result is the
//! accumulated total relative to the baseline, or the `Empty` marker when the
//! two are equal.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Terminator value: a line equal to this ends the scan immediately.
pub const END_SENTINEL: i64 = -999;

/// Errors that can occur while totaling a grade file
#[derive(Debug, Error)]
pub enum TallyError {
    /// A scanned line was not a valid integer after trimming
    #[error("line {line}: not an integer: {text:?}")]
    BadLine {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        text: String,
        /// Underlying parse failure
        source: std::num::ParseIntError,
    },
}

/// Outcome of totaling a grade file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Total {
    /// The accumulated total equals the baseline (or the input was empty)
    Empty,
    /// Accumulated total minus the baseline
    Delta(i64),
}

impl std::fmt::Display for Total {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Delta(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for Total {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str("Empty"),
            Self::Delta(n) => serializer.serialize_i64(*n),
        }
    }
}

/// Accumulated total and baseline from scanning a non-empty grade file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Accumulated total over the scanned lines
    pub total: i64,
    /// Integer value of the first line
    pub baseline: i64,
}

impl Tally {
    /// The result relative to the baseline: [`Total::Empty`] when the total
    /// equals the baseline, otherwise the difference.
    #[must_use]
    pub const fn result(self) -> Total {
        if self.total == self.baseline {
            Total::Empty
        } else {
            Total::Delta(self.total - self.baseline)
        }
    }
}

/// Scan a grade file, keeping the intermediate values.
///
/// Scans `lines` in order, adding every value `>= 1` to a running total.
/// Values below 1 are skipped, except [`END_SENTINEL`], which stops the scan;
/// lines after the sentinel are never parsed. The baseline is the integer
/// value of the first line, re-read from the original sequence.
///
/// Returns `None` for an empty input, which has no baseline.
///
/// # Errors
///
/// Returns [`TallyError::BadLine`] if any scanned line (including the first,
/// read as the baseline) is not a valid integer after trimming.
pub fn tally_grades<S: AsRef<str>>(lines: &[S]) -> Result<Option<Tally>, TallyError> {
    let Some(first) = lines.first() else {
        return Ok(None);
    };

    let mut total: i64 = 0;
    for (idx, line) in lines.iter().enumerate() {
        let value = parse_line(idx, line.as_ref())?;
        if value < 1 {
            if value == END_SENTINEL {
                log::debug!("sentinel at line {}, scan stopped", idx + 1);
                break;
            }
            log::debug!("line {}: {value} below 1, skipped", idx + 1);
        } else {
            total += value;
        }
    }

    // The first line was already parsed during the scan, so this cannot fail.
    let baseline = parse_line(0, first.as_ref())?;
    Ok(Some(Tally { total, baseline }))
}

/// Total a grade file.
///
/// The scan rule is [`tally_grades`]; the result is the accumulated total
/// relative to the baseline. An empty input yields [`Total::Empty`] without
/// reading a baseline.
///
/// # Errors
///
/// Returns [`TallyError::BadLine`] as [`tally_grades`] does.
pub fn total_grades<S: AsRef<str>>(lines: &[S]) -> Result<Total, TallyError> {
    Ok(tally_grades(lines)?.map_or(Total::Empty, Tally::result))
}

fn parse_line(idx: usize, raw: &str) -> Result<i64, TallyError> {
    let text = raw.trim();
    text.parse().map_err(|source| TallyError::BadLine {
        line: idx + 1,
        text: text.to_string(),
        source,
    })
}
