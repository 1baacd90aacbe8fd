//! Output format selection shared by the CLI and renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a rendered dashboard is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Machine-readable JSON envelope.
    Json,
    /// Human-readable sections.
    #[default]
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}
