//! Application layer for agent-debate
//!
//! This crate contains the debate use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    conversation_logger::{
        ConversationEvent, ConversationLogger, NoConversationLogger, TranscriptKind,
    },
    debate_agent::{AgentProfile, DebateAgent},
    llm_gateway::{ChatMessage, CompletionRequest, GatewayError, LlmGateway},
    next_action::NextActionDescriber,
    progress::{DebateProgressNotifier, NoProgress},
    score_extractor::ScoreExtractor,
    selection_policy::SelectionPolicy,
};
pub use use_cases::run_debate::{
    ChatAgent, DebateEventStream, DebateOutcome, EventSink, LlmNextActionDescriber,
    LlmScoreExtractor, LlmSelectionPolicy, PatternScoreExtractor, Roster, RoundRobinSelection,
    RunDebateError, RunDebateInput, RunDebateUseCase, StaticNextActionDescriber,
};
