//! Wire form of actions and classification into the closed action set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::CounterAction;

/// Tag carried by increment envelopes.
pub const KIND_INCREMENT: &str = "INCREMENT";

/// Tag carried by decrement envelopes.
pub const KIND_DECREMENT: &str = "DECREMENT";

/// Untyped action as it crosses the process boundary.
///
/// Mirrors the `{"type": ..., "amount": ...}` shape used by CLI specs and
/// replay files. Classification maps it onto [`CounterAction`]; tags outside
/// the known set are dropped in lenient mode and rejected in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    /// Action tag, `"type"` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Signed magnitude of the mutation.
    pub amount: i64,
}

/// Errors from parsing or strictly classifying envelopes.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("unrecognized action type '{kind}'")]
    UnrecognizedKind { kind: String },

    #[error("malformed action spec '{raw}': expected KIND:AMOUNT")]
    MalformedSpec { raw: String },

    #[error("invalid amount in '{raw}': {source}")]
    InvalidAmount {
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl ActionEnvelope {
    /// Map the envelope onto the closed action set.
    ///
    /// Unknown tags return `None`; dispatch treats them as no-ops. This is
    /// the forward-compatibility policy for tags added later, not an error.
    pub fn classify(&self) -> Option<CounterAction> {
        match self.kind.as_str() {
            KIND_INCREMENT => Some(CounterAction::Increment {
                amount: self.amount,
            }),
            KIND_DECREMENT => Some(CounterAction::Decrement {
                amount: self.amount,
            }),
            _ => None,
        }
    }

    /// Classification that refuses unknown tags instead of dropping them.
    pub fn classify_strict(&self) -> Result<CounterAction, ActionError> {
        self.classify().ok_or_else(|| ActionError::UnrecognizedKind {
            kind: self.kind.clone(),
        })
    }

    /// Parse the CLI shorthand `KIND:AMOUNT`, e.g. `INCREMENT:3`.
    ///
    /// The tag is uppercased so `increment:3` works at a shell. Unknown tags
    /// still parse; classification decides what happens to them.
    pub fn parse_spec(raw: &str) -> Result<Self, ActionError> {
        let (kind, amount) = raw
            .split_once(':')
            .ok_or_else(|| ActionError::MalformedSpec {
                raw: raw.to_string(),
            })?;

        let amount = amount
            .trim()
            .parse::<i64>()
            .map_err(|e| ActionError::InvalidAmount {
                raw: raw.to_string(),
                source: e,
            })?;

        Ok(Self {
            kind: kind.trim().to_ascii_uppercase(),
            amount,
        })
    }
}
