//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use gradetally::output::OutputMode;

/// gradetally - total a grade file relative to its first line
#[derive(Parser, Debug)]
#[command(
    name = "gradetally",
    version,
    about = "Total a grade file relative to its first line",
    long_about = "Read a file of integer lines and print a total.\n\n\
                  Values of at least 1 are added; smaller values are skipped.\n\
                  A -999 line ends the input. The total is reported relative\n\
                  to the first line's value, or as \"Empty\" when they match."
)]
pub struct Cli {
    /// Grade file to read; prompts on stdin when omitted
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::total(cli.file, output_mode)
}
