//! Port for the debate transcript.
//!
//! [`ConversationLogger`] receives one [`ConversationEvent`] per step of a
//! debate. Every event is stamped with the [`SessionId`] of the run that
//! produced it, so several debates can share one transcript sink.
//!
//! `tracing` carries the diagnostic log; this port carries the transcript.

use debate_domain::SessionId;
use serde_json::Value;

/// What a transcript record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptKind {
    DebateStarted,
    SpeakerSelected,
    Turn,
    Evaluation,
    DebateFinished,
    DebateFailed,
}

impl TranscriptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptKind::DebateStarted => "debate_started",
            TranscriptKind::SpeakerSelected => "speaker_selected",
            TranscriptKind::Turn => "turn",
            TranscriptKind::Evaluation => "evaluation",
            TranscriptKind::DebateFinished => "debate_finished",
            TranscriptKind::DebateFailed => "debate_failed",
        }
    }

    /// Whether this record closes a session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TranscriptKind::DebateFinished | TranscriptKind::DebateFailed
        )
    }
}

/// One transcript record of a debate session.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    pub kind: TranscriptKind,
    pub session_id: SessionId,
    /// Kind-specific fields
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(kind: TranscriptKind, session_id: &SessionId, payload: Value) -> Self {
        Self {
            kind,
            session_id: session_id.clone(),
            payload,
        }
    }
}

/// Sink for debate transcript records.
///
/// `log` is synchronous and infallible: a failed write never aborts a debate.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every record.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(TranscriptKind::SpeakerSelected.as_str(), "speaker_selected");
        assert_eq!(TranscriptKind::DebateFailed.as_str(), "debate_failed");
        assert!(TranscriptKind::DebateFinished.is_terminal());
        assert!(!TranscriptKind::Turn.is_terminal());
    }

    #[test]
    fn test_event_carries_session() {
        let session = SessionId::new("alice");
        let event = ConversationEvent::new(TranscriptKind::Turn, &session, json!({"n": 1}));
        assert_eq!(event.session_id, session);
        assert_eq!(event.payload["n"], 1);
    }
}
