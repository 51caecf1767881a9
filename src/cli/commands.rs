//! CLI command implementations

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::json;

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{write_event, write_output};
use crate::config::Config;
use crate::event::RecentEvents;
use crate::harvest::{HarvestError, Harvester};
use crate::observability::{Logger, ObservationScope};
use crate::status::{render, resolve, Callback, Counter, Format, KeyedArray, Record, StatusEntry};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Harvest {
            file,
            resume_from,
            config,
        } => harvest(&file, resume_from, config.as_deref()),
        Command::Status {
            files,
            path,
            format,
            config,
        } => status(&files, &path, format, config.as_deref()),
    }
}

fn setup(config_path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.log_level);
    Ok(config)
}

/// Print every complete line of `file` after `resume_from` as an event
pub fn harvest(file: &Path, resume_from: u64, config_path: Option<&Path>) -> CliResult<()> {
    setup(config_path)?;

    let mut harvester = Harvester::open(file, resume_from)?;
    let mut out = io::stdout().lock();
    harvester.harvest(|descriptor| {
        write_event(&mut out, &descriptor)
            .map_err(|e| HarvestError::io(descriptor.stream_identity(), e))
    })?;
    out.flush()?;

    Ok(())
}

/// Harvest `files`, then print the node at `path` of the status tree
pub fn status(
    files: &[PathBuf],
    path: &str,
    format: Option<Format>,
    config_path: Option<&Path>,
) -> CliResult<()> {
    let config = setup(config_path)?;

    let mut root = build_status(files, config.recent_events)?;
    root.update()?;

    let target = resolve(&root, path)?;
    let output = render(target, format.unwrap_or(config.format))?;
    write_output(&output)?;

    Ok(())
}

/// Read each file from the start and assemble the status tree:
///
/// - `streams`: per-file progress, keyed by path
/// - `events`: the most recent events across all files
/// - `totals`: stream and event counts, computed on refresh
///
/// A file given twice is read once.
pub fn build_status(files: &[PathBuf], recent_events: usize) -> CliResult<Record> {
    let scope = ObservationScope::new("STATUS_BUILD");

    let mut streams = KeyedArray::new();
    let mut events = RecentEvents::new(recent_events);
    let seen = Counter::new();

    for file in files {
        let mut harvester = Harvester::open(file, 0)?;
        let key = harvester.stream().identity().to_string();
        if streams.contains_key(&key) {
            continue;
        }

        harvester.harvest(|descriptor| {
            events.push_descriptor(&descriptor)?;
            seen.increment();
            Ok(())
        })?;
        streams.add_entry(key, harvester.status());
    }

    let stream_count = streams.len();
    let counted = seen.clone();
    let totals = Callback::new(move || {
        Ok(json!({
            "streams": stream_count,
            "events": counted.get(),
        }))
    });

    scope.complete();
    Ok(Record::new()
        .field("streams", streams)
        .field("events", events)
        .field("totals", totals))
}
