//! Command-line argument definitions for the riksplot CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, cache handling, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the riksplot chart tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory for the SCB response cache
    #[arg(long, default_value = ".")]
    pub cache_dir: String,

    /// Discard the cached SCB response and fetch fresh data
    #[arg(long)]
    pub refresh: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
