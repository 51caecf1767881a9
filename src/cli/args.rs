//! CLI argument definitions using clap
//!
//! Commands:
//! - logstat harvest <FILE> [--resume-from N]
//! - logstat status <FILE>... [--path P] [--format json|human]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::status::Format;

/// logstat - inspect log harvesting through the status model
#[derive(Parser, Debug)]
#[command(name = "logstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a file from a resume offset and print each event as a JSON line
    Harvest {
        /// File to read
        file: PathBuf,

        /// Byte offset to resume from
        #[arg(long, default_value_t = 0)]
        resume_from: u64,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Harvest files and print the status tree, or one node of it
    Status {
        /// Files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Slash-separated path into the tree, e.g. streams/0/offset
        #[arg(long, default_value = "")]
        path: String,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
