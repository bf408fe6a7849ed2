//! Command line arguments for ext-preflight.
//!
//! A bare invocation runs every check against the current directory; the
//! flags exist for CI pipelines and for pointing the validator at another
//! project tree or runtime binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pre-packaging integrity validation for editor extension projects
#[derive(Debug, Clone, Parser)]
#[command(name = "ext-preflight", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project root containing package.json and the scripts
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Binary used for the syntax-only check
    #[arg(long, global = true, default_value = "node", value_name = "BIN")]
    pub node: String,

    /// Run only manifest checks
    #[arg(long, global = true)]
    pub manifest: bool,

    /// Run only the entry script check
    #[arg(long, global = true)]
    pub entry: bool,

    /// Run only library script checks
    #[arg(long, global = true)]
    pub library: bool,

    /// Skip a specific check by ID (repeatable)
    #[arg(long, global = true, value_name = "ID")]
    pub skip: Vec<String>,

    /// Run only a specific check by ID (repeatable)
    #[arg(long, global = true, value_name = "ID")]
    pub only: Vec<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only output failures and warnings
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Include detailed diagnostic information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Command to execute
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Run validation checks (default)
    Check,
    /// List all available checks
    List,
    /// Print version information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Check category filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryFilter {
    All,
    Manifest,
    Entry,
    Library,
}

impl Args {
    /// The category filter implied by the flags; manifest wins over entry
    /// wins over library when several are set
    pub fn category(&self) -> CategoryFilter {
        if self.manifest {
            CategoryFilter::Manifest
        } else if self.entry {
            CategoryFilter::Entry
        } else if self.library {
            CategoryFilter::Library
        } else {
            CategoryFilter::All
        }
    }
}
