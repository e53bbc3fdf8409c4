//! Debate control domain.
//!
//! Pure decision rules for a producer/critic debate:
//!
//! - [`settings::DebateSettings`]: iteration cap, passing score, default and producer agents
//! - [`session::SessionId`]: correlation id for one debate run
//! - [`selection`]: resolving a selector's raw output to a roster name
//! - [`scoring`]: extracting a numeric quality score from text
//! - [`termination::TerminationState`]: RUNNING → TERMINATED state machine
//! - [`event::DebateEvent`]: caller-visible status and result events
//!
//! Model invocation lives in the application layer; everything here is
//! deterministic and side-effect free.

pub mod event;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod settings;
pub mod termination;
