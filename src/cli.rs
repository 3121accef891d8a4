//! Command line interface: parse action specs, fold them through a store,
//! print the state after each dispatch.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::counter::{ActionEnvelope, ActionError, CounterReducer, CounterState};
use crate::flux::Store;

#[derive(Debug, Parser)]
#[command(name = "tally", about = "Reducer-driven integer counter", version)]
pub struct Cli {
    /// Refuse unrecognized action types instead of ignoring them.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format for dispatched states.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dispatch KIND:AMOUNT specs in order, e.g. `tally apply INCREMENT:3`.
    Apply {
        /// Action specs such as INCREMENT:3 or decrement:4.
        #[arg(required = true)]
        specs: Vec<String>,
    },

    /// Dispatch actions from a JSON-lines file of {"type", "amount"} records.
    Replay {
        /// Path to the JSON-lines file.
        #[arg(long)]
        file: PathBuf,
    },
}

impl Cli {
    /// Effective settings: file config with CLI flags applied on top.
    pub fn effective_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if self.strict {
            config.behavior.strict = true;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        Ok(config)
    }
}

/// Fold envelopes through a fresh store, collecting the state after each.
///
/// One entry per envelope, including envelopes that classify to nothing:
/// an unrecognized tag leaves the state unchanged but still produces an
/// observation, matching one printed line per dispatched action.
pub fn fold_envelopes(
    envelopes: &[ActionEnvelope],
    strict: bool,
) -> Result<Vec<CounterState>, ActionError> {
    let mut store = Store::<CounterReducer>::new();
    let mut observed = Vec::with_capacity(envelopes.len());

    for envelope in envelopes {
        let action = if strict {
            Some(envelope.classify_strict()?)
        } else {
            let action = envelope.classify();
            if action.is_none() {
                warn!(kind = %envelope.kind, "ignoring unrecognized action type");
            }
            action
        };

        if let Some(action) = action {
            store.dispatch(action);
        }
        observed.push(*store.state());
    }

    Ok(observed)
}

/// Read one `ActionEnvelope` per non-blank line of a JSON-lines file.
pub fn read_envelopes(path: &Path) -> anyhow::Result<Vec<ActionEnvelope>> {
    let file =
        File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    let reader = BufReader::new(file);

    let mut envelopes = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let envelope: ActionEnvelope = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid action on line {}", idx + 1))?;
        envelopes.push(envelope);
    }

    Ok(envelopes)
}

/// Entry point for the parsed CLI.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.effective_config()?;

    let envelopes = match &cli.command {
        Command::Apply { specs } => specs
            .iter()
            .map(|s| ActionEnvelope::parse_spec(s))
            .collect::<Result<Vec<_>, _>>()?,
        Command::Replay { file } => read_envelopes(file)?,
    };

    let states = fold_envelopes(&envelopes, config.behavior.strict)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for state in states {
        print_state(&mut out, config.output.format, state)?;
    }

    Ok(())
}

fn print_state(out: &mut impl Write, format: OutputFormat, state: CounterState) -> io::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", state.value()),
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "state": state.value() })),
    }
}
