//! Domain layer for agent-debate
//!
//! This crate contains the core decision rules, entities, and value objects
//! of a producer/critic debate. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Turn / History**: an append-only, ordered log of contributions. Every
//!   selection and termination decision reads from it.
//! - **Selection**: the raw output of a speaker selector is resolved to a
//!   roster name, falling back to a default agent.
//! - **Termination**: a per-session state machine that stops the debate when
//!   a critique scores at or above the passing score, or when the iteration
//!   cap is reached.

pub mod agent;
pub mod config;
pub mod conversation;
pub mod core;
pub mod debate;
pub mod prompt;

// Re-export commonly used types
pub use agent::definition::{AgentDefinition, ExecutionSettings};
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
pub use conversation::{
    entities::{ConversationEntry, Role, Turn},
    history::{History, render_turns},
};
pub use crate::core::{error::DebateError, model::ModelRole};
pub use debate::{
    event::DebateEvent,
    scoring::{find_score, parse_score},
    selection::{Selection, resolve_selection},
    session::SessionId,
    settings::DebateSettings,
    termination::{StopReason, TerminationDecision, TerminationState},
};
pub use prompt::PromptTemplate;
