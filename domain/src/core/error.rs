//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebateError {
    #[error("Debate roster is empty")]
    EmptyRoster,

    #[error("Duplicate agent name in roster: {0}")]
    DuplicateAgent(String),

    #[error("Default agent '{0}' is not part of the roster")]
    UnknownDefaultAgent(String),

    #[error("Producer agent '{0}' is not part of the roster")]
    UnknownProducer(String),

    #[error("Selected agent '{0}' is not part of the roster")]
    UnknownAgent(String),

    /// The debate terminated without the producer ever speaking.
    #[error("Debate ended without a turn from producer '{producer}'")]
    NoProducerTurn { producer: String },

    #[error("Unrecognized role: {0}")]
    InvalidRole(String),
}

impl DebateError {
    /// Whether this error indicates a misconfigured roster or selection policy
    pub fn is_configuration_defect(&self) -> bool {
        !matches!(self, DebateError::InvalidRole(_))
    }
}
