//! Output formatting for human and JSON modes
//!
//! Human mode prints the bare result value; JSON mode wraps it in a
//! machine-parseable report.

use serde::Serialize;

use crate::tally::Total;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Report emitted in JSON mode
#[derive(Debug, Serialize)]
pub struct TallyReport {
    /// The input file that was totaled
    pub file: String,
    /// Number of lines read from the file
    pub lines: usize,
    /// Accumulated total over the scanned lines; `null` for an empty file
    pub total: Option<i64>,
    /// Integer value of the first line; `null` for an empty file
    pub baseline: Option<i64>,
    /// The result: a number, or `"Empty"`
    pub result: Total,
}
