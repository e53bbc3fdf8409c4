//! Type definitions for the RunDebate use case.

use crate::ports::llm_gateway::GatewayError;
use debate_domain::{ConversationEntry, DebateError, DebateEvent, History, SessionId, StopReason, Turn};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that end a debate without a result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunDebateError {
    #[error("Debate error: {0}")]
    Domain(#[from] DebateError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl RunDebateError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunDebateError::Cancelled)
    }
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    /// Caller identity, used to derive the session id
    pub caller: String,
    /// Prior conversation; only user/assistant entries seed the history
    pub conversation: Vec<ConversationEntry>,
}

impl RunDebateInput {
    pub fn new(caller: impl Into<String>, conversation: Vec<ConversationEntry>) -> Self {
        Self {
            caller: caller.into(),
            conversation,
        }
    }

    /// Single user request with no prior conversation
    pub fn from_prompt(caller: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(caller, vec![ConversationEntry::user(prompt)])
    }
}

/// Outcome of a successful debate
#[derive(Debug, Clone)]
pub struct DebateOutcome {
    pub session_id: SessionId,
    /// Latest producer turn
    pub result: Turn,
    /// Full history, seeded turns included
    pub history: History,
    /// Number of turns present before the debate started
    pub seeded_turns: usize,
    pub stop_reason: StopReason,
    pub iterations: usize,
}

impl DebateOutcome {
    /// Turns produced during this debate
    pub fn debate_turns(&self) -> &[Turn] {
        self.history.since(self.seeded_turns as u64)
    }
}

pub(crate) type EventItem = Result<DebateEvent, RunDebateError>;

/// Sending half of a debate's event stream.
///
/// A closed receiver is reported as [`RunDebateError::Cancelled`] so the
/// loop stops at the next emit point.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::Sender<EventItem>,
}

impl EventSink {
    pub(crate) fn new(tx: mpsc::Sender<EventItem>) -> Self {
        Self { tx }
    }

    /// Create a sink and the stream that receives from it
    pub fn channel(buffer: usize) -> (Self, DebateEventStream) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self::new(tx), DebateEventStream::new(rx))
    }

    pub async fn emit(&self, event: DebateEvent) -> Result<(), RunDebateError> {
        self.tx
            .send(Ok(event))
            .await
            .map_err(|_| RunDebateError::Cancelled)
    }

    pub(crate) async fn fail(&self, error: RunDebateError) {
        // Receiver gone means nobody is left to tell
        let _ = self.tx.send(Err(error)).await;
    }
}

/// Receiving half of a debate: status events, then one result on success.
///
/// A fatal error is delivered as a final `Err` item; the stream then ends
/// without a [`DebateEvent::Result`].
pub struct DebateEventStream {
    receiver: mpsc::Receiver<EventItem>,
}

impl DebateEventStream {
    pub fn new(receiver: mpsc::Receiver<EventItem>) -> Self {
        Self { receiver }
    }

    pub async fn recv(&mut self) -> Option<EventItem> {
        self.receiver.recv().await
    }

    /// Drain the stream, forwarding status lines to `on_status`, and return
    /// the final result turn.
    pub async fn collect_result(
        mut self,
        mut on_status: impl FnMut(&str),
    ) -> Result<Turn, RunDebateError> {
        while let Some(item) = self.receiver.recv().await {
            match item? {
                DebateEvent::Status(text) => on_status(&text),
                DebateEvent::Result(turn) => return Ok(turn),
            }
        }
        // Channel closed without a result
        Err(RunDebateError::Cancelled)
    }
}

impl Stream for DebateEventStream {
    type Item = EventItem;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
