//! gradetally - total grade files with sentinel-terminated input
//!
//! This library implements the grade-totaling rule: scan integer lines in
//! order, accumulate values of at least 1, skip smaller values, stop at the
//! `-999` terminator, and report the total relative to the first line's value.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod output;
pub mod tally;
