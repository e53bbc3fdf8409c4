//! Resolving speaker-selection output to a roster name.

/// Outcome of resolving a selector's raw output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The output named a roster agent.
    Chosen(String),
    /// The output was empty or unrecognized; the default agent was used.
    Fallback {
        name: String,
        raw: Option<String>,
    },
}

impl Selection {
    /// The agent that will speak next
    pub fn name(&self) -> &str {
        match self {
            Selection::Chosen(name) => name,
            Selection::Fallback { name, .. } => name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback { .. })
    }
}

/// Resolve raw selector output against the roster.
///
/// Matching is case-sensitive and exact after stripping surrounding
/// whitespace, quotes, markdown emphasis and trailing punctuation.
/// Anything else resolves to `default`.
pub fn resolve_selection<'a>(
    raw: Option<&str>,
    roster: impl IntoIterator<Item = &'a str>,
    default: &str,
) -> Selection {
    let fallback = || Selection::Fallback {
        name: default.to_string(),
        raw: raw.map(str::to_string),
    };

    let Some(raw) = raw else {
        return fallback();
    };

    let candidate = raw.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '*' | '.' | ':' | ',')
    });

    if candidate.is_empty() {
        return fallback();
    }

    match roster.into_iter().find(|name| *name == candidate) {
        Some(name) => Selection::Chosen(name.to_string()),
        None => fallback(),
    }
}
