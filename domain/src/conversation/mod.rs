//! Conversation domain.
//!
//! - [`entities::Turn`]: one atomic contribution by a single speaker
//! - [`entities::ConversationEntry`]: a prior message supplied by the caller
//! - [`history::History`]: the append-only log every decision reads from

pub mod entities;
pub mod history;
