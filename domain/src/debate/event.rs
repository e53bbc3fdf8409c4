//! Caller-visible debate events

use crate::conversation::entities::Turn;

/// One event on a debate's output stream.
///
/// A successful run emits zero or more `Status` events followed by exactly
/// one `Result`, which is always last. A failed run emits no `Result`.
#[derive(Debug, Clone, PartialEq)]
pub enum DebateEvent {
    /// Plain-text progress note describing the predicted next step.
    Status(String),
    /// The final producer turn.
    Result(Turn),
}

impl DebateEvent {
    pub fn is_result(&self) -> bool {
        matches!(self, DebateEvent::Result(_))
    }

    /// Wire framing: status events are plain text, the result is a JSON record.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        match self {
            DebateEvent::Status(text) => Ok(text.clone()),
            DebateEvent::Result(turn) => serde_json::to_string(turn),
        }
    }
}
