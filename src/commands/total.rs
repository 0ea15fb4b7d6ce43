//! Total command - read a grade file and print the result

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;

use gradetally::output::{OutputMode, TallyReport};
use gradetally::tally::{self, Tally, Total};

/// Total a grade file and print the result to stdout.
///
/// When `file` is `None`, the filename is read from standard input, one line,
/// after a short prompt on stderr.
pub fn total(file: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let path = match file {
        Some(path) => path,
        None => prompt_filename()?,
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let lines: Vec<&str> = content.lines().collect();
    log::debug!("read {} line(s) from {}", lines.len(), path.display());

    let tally = tally::tally_grades(&lines)
        .with_context(|| format!("failed to total {}", path.display()))?;
    let result = tally.map_or(Total::Empty, Tally::result);

    if mode == OutputMode::Json {
        let report = TallyReport {
            file: path.display().to_string(),
            lines: lines.len(),
            total: tally.map(|t| t.total),
            baseline: tally.map(|t| t.baseline),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{result}");
    }

    Ok(())
}

fn prompt_filename() -> anyhow::Result<PathBuf> {
    // Prompt on stderr so piped stdout stays clean.
    eprint!("Grade file: ");
    io::stderr().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read filename from stdin")?;
    if read == 0 || line.trim().is_empty() {
        anyhow::bail!("no filename given");
    }

    Ok(PathBuf::from(line.trim()))
}
