//! Conversation domain entities

use crate::core::error::DebateError;
use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DebateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(DebateError::InvalidRole(other.to_string())),
        }
    }
}

/// A prior conversation message as supplied by the caller.
///
/// The role stays a free string: callers may pass `tool` or `function`
/// entries, which are dropped when seeding a [`History`](super::history::History).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

impl ConversationEntry {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: None,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The role of this entry if it may seed a debate.
    ///
    /// Only the exact lowercase strings `user` and `assistant` qualify.
    pub fn seed_role(&self) -> Option<Role> {
        match self.role.as_str() {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One atomic contribution to the conversation (Entity)
///
/// Turns are created only by [`History::append`](super::history::History::append)
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    #[serde(default)]
    name: Option<String>,
    content: String,
    sequence: u64,
}

impl Turn {
    pub(crate) fn new(sequence: u64, role: Role, name: Option<String>, content: String) -> Self {
        Self {
            role,
            name,
            content,
            sequence,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Whether this turn was authored by the named speaker
    pub fn is_by(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Label used when rendering the turn as transcript text
    pub fn speaker(&self) -> &str {
        self.name.as_deref().unwrap_or(self.role.as_str())
    }
}
