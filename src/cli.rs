//! CLI command implementations for Officewars.

pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod verify;

mod output;

use clap::ValueEnum;
use officewars::{ActionLayout, FormatConfig, GameDecoder, LoadError, TrailingPolicy};
use std::error::Error;
use std::fmt;

/// Output format for the `show` and `list` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Text format options shared by every command.
#[derive(clap::Args, Debug, Clone, Copy)]
pub(crate) struct FormatArgs {
    /// Layout of action records: inline or stacked
    #[arg(long, default_value = "inline")]
    layout: ActionLayout,

    /// Fail on non-blank input after the last section
    #[arg(long)]
    strict: bool,

    /// Factor applied to raw node coordinates
    #[arg(long, default_value = "10.0")]
    scale: f32,
}

impl FormatArgs {
    /// Decoder configured from the flags.
    pub(crate) fn decoder(self) -> GameDecoder {
        GameDecoder::new(FormatConfig {
            coordinate_scale: self.scale,
            action_layout: self.layout,
            trailing: if self.strict {
                TrailingPolicy::Reject
            } else {
                TrailingPolicy::Ignore
            },
        })
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<officewars::DecodeError> for CliError {
    fn from(e: officewars::DecodeError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}
