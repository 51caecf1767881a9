//! CLI module for logstat
//!
//! Provides command-line interface for:
//! - harvest: print the events of one file from a resume offset
//! - status: harvest files and show the status tree

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_status, harvest, run, run_command, status};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_event, write_output};
