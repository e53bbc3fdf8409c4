//! Run Debate use case
//!
//! Drives a producer/critic debate until the termination policy stops it:
//!
//! ```text
//! seed History ─► loop {
//!     TurnSelector picks agent
//!     agent produces turn ─► History.append
//!     status line emitted
//!     TerminationEvaluator inspects the turn
//! } ─► latest producer turn emitted as the result
//! ```
//!
//! Within one session everything is sequential: each step reads the full
//! history, so turns are appended strictly in production order.

mod chat_agent;
mod evaluator;
mod llm_policies;
mod roster;
mod rule_policies;
mod selector;
mod types;

pub use chat_agent::ChatAgent;
pub use evaluator::TerminationEvaluator;
pub use llm_policies::{LlmNextActionDescriber, LlmScoreExtractor, LlmSelectionPolicy};
pub use roster::Roster;
pub use rule_policies::{PatternScoreExtractor, RoundRobinSelection, StaticNextActionDescriber};
pub use selector::TurnSelector;
pub use types::{DebateEventStream, DebateOutcome, EventSink, RunDebateError, RunDebateInput};

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, TranscriptKind,
};
use crate::ports::next_action::NextActionDescriber;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::ports::score_extractor::ScoreExtractor;
use crate::ports::selection_policy::SelectionPolicy;
use crate::use_cases::shared::is_cancelled;
use debate_domain::{
    DebateError, DebateEvent, DebateSettings, History, PromptTemplate, Role, SessionId,
};
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, error, info, info_span};

/// Capacity of the event channel returned by [`RunDebateUseCase::execute`]
const EVENT_BUFFER: usize = 16;

/// Use case for running a debate
#[derive(Clone)]
pub struct RunDebateUseCase {
    roster: Roster,
    settings: DebateSettings,
    selection: Arc<dyn SelectionPolicy>,
    scorer: Arc<dyn ScoreExtractor>,
    describer: Arc<dyn NextActionDescriber>,
    behavior: BehaviorConfig,
    progress: Arc<dyn DebateProgressNotifier>,
    logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl RunDebateUseCase {
    /// Create the use case.
    ///
    /// Fails when the producer or the default agent is missing from the roster.
    pub fn new(
        roster: Roster,
        settings: DebateSettings,
        selection: Arc<dyn SelectionPolicy>,
        scorer: Arc<dyn ScoreExtractor>,
        describer: Arc<dyn NextActionDescriber>,
    ) -> Result<Self, DebateError> {
        if !roster.contains(&settings.default_agent) {
            return Err(DebateError::UnknownDefaultAgent(settings.default_agent));
        }
        if !roster.contains(&settings.producer) {
            return Err(DebateError::UnknownProducer(settings.producer));
        }

        Ok(Self {
            roster,
            settings,
            selection,
            scorer,
            describer,
            behavior: BehaviorConfig::default(),
            progress: Arc::new(NoProgress),
            logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        })
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn DebateProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn settings(&self) -> &DebateSettings {
        &self.settings
    }

    /// Start a debate in a background task and return its event stream.
    ///
    /// Dropping the stream cancels the debate at its next emit point.
    pub fn execute(&self, input: RunDebateInput) -> DebateEventStream {
        let (sink, stream) = EventSink::channel(EVENT_BUFFER);
        let use_case = self.clone();

        tokio::spawn(async move {
            if let Err(e) = use_case.run(input, &sink).await
                && !e.is_cancelled()
            {
                sink.fail(e).await;
            }
        });

        stream
    }

    /// Run a debate to completion, emitting events into `sink`.
    ///
    /// On success the last event emitted is the [`DebateEvent::Result`].
    pub async fn run(
        &self,
        input: RunDebateInput,
        sink: &EventSink,
    ) -> Result<DebateOutcome, RunDebateError> {
        let session_id = SessionId::new(&input.caller);
        let span = info_span!("debate", session_id = %session_id);

        let result = self
            .run_session(session_id.clone(), input, sink)
            .instrument(span)
            .await;

        match &result {
            Ok(outcome) => {
                self.logger.log(ConversationEvent::new(
                    TranscriptKind::DebateFinished,
                    &session_id,
                    json!({
                        "stop_reason": outcome.stop_reason.as_str(),
                        "iterations": outcome.iterations,
                        "result_sequence": outcome.result.sequence(),
                    }),
                ));
                self.progress.on_debate_end(Some(outcome.stop_reason));
            }
            Err(e) => {
                error!(session_id = %session_id, "Debate failed: {}", e);
                self.logger.log(ConversationEvent::new(
                    TranscriptKind::DebateFailed,
                    &session_id,
                    json!({"error": e.to_string()}),
                ));
                self.progress.on_debate_end(None);
            }
        }

        result
    }

    async fn run_session(
        &self,
        session_id: SessionId,
        input: RunDebateInput,
        sink: &EventSink,
    ) -> Result<DebateOutcome, RunDebateError> {
        let behavior = self.behavior;
        let selector = TurnSelector::new(
            self.selection.clone(),
            self.settings.default_agent.clone(),
            behavior,
        );
        let mut evaluator = TerminationEvaluator::new(self.scorer.clone(), &self.settings, behavior);

        let mut history = History::seeded(&input.conversation);
        let seeded_turns = history.len();

        info!(
            agents = ?self.roster,
            seeded_turns,
            max_iterations = self.settings.max_iterations,
            "Starting debate"
        );
        self.progress
            .on_debate_start(&session_id, &self.roster.profiles());
        self.logger.log(ConversationEvent::new(
            TranscriptKind::DebateStarted,
            &session_id,
            json!({
                "caller": input.caller,
                "agents": self.roster.names().collect::<Vec<_>>(),
                "seeded_turns": seeded_turns,
            }),
        ));

        sink.emit(DebateEvent::Status(PromptTemplate::initial_status(
            &self.settings.producer,
        )))
        .await?;

        let decision = loop {
            if is_cancelled(&self.cancellation_token) {
                return Err(RunDebateError::Cancelled);
            }

            let selection = selector.select(&history, &self.roster).await?;
            self.progress.on_speaker_selected(&selection);
            self.logger.log(ConversationEvent::new(
                TranscriptKind::SpeakerSelected,
                &session_id,
                json!({
                    "agent": selection.name(),
                    "fallback": selection.is_fallback(),
                }),
            ));

            let agent = self
                .roster
                .get(selection.name())
                .ok_or_else(|| DebateError::UnknownAgent(selection.name().to_string()))?;

            let content = behavior.bound(agent.produce(&history)).await?;
            let turn = history
                .append(Role::Assistant, Some(agent.name().to_string()), content)
                .clone();

            info!(agent = %agent.name(), sequence = turn.sequence(), "Turn appended");
            self.progress.on_turn(&turn);
            self.logger.log(ConversationEvent::new(
                TranscriptKind::Turn,
                &session_id,
                json!({"turn": &turn}),
            ));

            let status = behavior
                .bound(self.describer.describe(history.since(seeded_turns as u64)))
                .await?;
            info!("{}", status);
            sink.emit(DebateEvent::Status(status)).await?;

            let decision = evaluator.evaluate(&turn).await?;
            self.progress.on_evaluation(&decision);
            self.logger.log(ConversationEvent::new(
                TranscriptKind::Evaluation,
                &session_id,
                json!({
                    "decision": decision,
                }),
            ));

            if let Some(reason) = decision.reason {
                break (reason, decision.iteration);
            }
        };
        let (stop_reason, iterations) = decision;

        let result = history
            .since(seeded_turns as u64)
            .iter()
            .rev()
            .find(|t| t.is_by(&self.settings.producer))
            .cloned()
            .ok_or_else(|| DebateError::NoProducerTurn {
                producer: self.settings.producer.clone(),
            })?;

        info!(
            stop_reason = stop_reason.as_str(),
            iterations,
            result_sequence = result.sequence(),
            "Debate finished"
        );
        sink.emit(DebateEvent::Result(result.clone())).await?;

        Ok(DebateOutcome {
            session_id,
            result,
            history,
            seeded_turns,
            stop_reason,
            iterations,
        })
    }
}
