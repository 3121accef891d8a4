use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Every field has a default, so an absent config file behaves exactly like
/// an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub behavior: Behavior,
    #[serde(default)]
    pub output: Output,
}

/// How envelopes with unrecognized action types are handled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Behavior {
    /// Refuse unrecognized action types instead of ignoring them
    /// (default: false, matching the lenient no-op policy).
    #[serde(default)]
    pub strict: bool,
}

/// How dispatched states are printed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output encoding for the state printed after each dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare integer, one per line.
    #[default]
    Plain,
    /// `{"state": N}`, one object per line.
    Json,
}
