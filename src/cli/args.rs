//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// pincheck - Verify installed Python packages against exact pins.
#[derive(Debug, Default, Parser)]
#[command(name = "pincheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to pyproject.toml (skips the default search)
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Python interpreter used to locate installed packages
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// Scan this site-packages directory instead of asking the interpreter (repeatable)
    #[arg(long = "site-packages", value_name = "DIR")]
    pub site_packages: Vec<PathBuf>,

    /// Show where the manifest and each installed package were found
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show problems and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
