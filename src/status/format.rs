//! Output encodings for a status document

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::entry::StatusEntry;
use super::errors::StatusResult;

/// How a status document is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed JSON
    Json,
    /// Indented `key: value` report
    #[default]
    Human,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Human => "human",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "human" => Ok(Format::Human),
            other => Err(format!("unknown format '{}'", other)),
        }
    }
}

/// Encode `entry` as a complete document, newline-terminated when non-empty
pub fn render(entry: &dyn StatusEntry, format: Format) -> StatusResult<String> {
    let mut output = match format {
        Format::Json => serde_json::to_string_pretty(&entry.to_json()?)?,
        Format::Human => entry.render_human("")?,
    };
    if !output.is_empty() {
        output.push('\n');
    }
    Ok(output)
}
