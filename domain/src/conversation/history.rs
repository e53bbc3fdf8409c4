//! Append-only conversation history

use super::entities::{ConversationEntry, Role, Turn};

/// Ordered, append-only record of all turns in a debate session (Entity)
///
/// Sequence indices start at 0 and increase by one per appended turn.
/// There is no API to remove, reorder or edit a turn.
#[derive(Debug, Clone, Default)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a history from prior conversation entries.
    ///
    /// Only `user` and `assistant` entries are kept, in their original order.
    pub fn seeded<'a>(entries: impl IntoIterator<Item = &'a ConversationEntry>) -> Self {
        let mut history = Self::new();
        for entry in entries {
            if let Some(role) = entry.seed_role() {
                history.append(role, entry.name.clone(), entry.content.clone());
            }
        }
        history
    }

    /// Append a turn, assigning it the next sequence index.
    pub fn append(
        &mut self,
        role: Role,
        name: Option<String>,
        content: impl Into<String>,
    ) -> &Turn {
        let sequence = self.turns.len() as u64;
        self.turns.push(Turn::new(sequence, role, name, content.into()));
        &self.turns[self.turns.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Most recent turn authored by `name`, scanning newest first
    pub fn last_by(&self, name: &str) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.is_by(name))
    }

    /// Turns with a sequence index at or after `sequence`
    pub fn since(&self, sequence: u64) -> &[Turn] {
        let start = (sequence as usize).min(self.turns.len());
        &self.turns[start..]
    }

    /// Render the history as a plain-text transcript.
    pub fn render(&self) -> String {
        render_turns(&self.turns)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

/// Render turns as `speaker: content` blocks separated by blank lines
pub fn render_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.speaker(), t.content()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> Option<String> {
        Some("Writer".to_string())
    }

    fn critic() -> Option<String> {
        Some("Critic".to_string())
    }

    #[test]
    fn test_append_assigns_increasing_sequence() {
        let mut history = History::new();
        history.append(Role::User, None, "Write a poem");
        history.append(Role::Assistant, writer(), "Roses are red");
        history.append(Role::Assistant, critic(), "6/10");

        let sequences: Vec<u64> = history.iter().map(|t| t.sequence()).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_seeded_keeps_only_user_and_assistant() {
        let entries = vec![
            ConversationEntry::new("system", "You are helpful"),
            ConversationEntry::user("Hello"),
            ConversationEntry::new("tool", "{\"ok\":true}"),
            ConversationEntry::assistant("Hi there").with_name("Writer"),
        ];

        let history = History::seeded(&entries);

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].role(), Role::User);
        assert_eq!(history.turns()[1].name(), Some("Writer"));
        assert_eq!(history.turns()[1].sequence(), 1);
    }

    #[test]
    fn test_last_by_scans_newest_first() {
        let mut history = History::new();
        history.append(Role::Assistant, writer(), "draft 1");
        history.append(Role::Assistant, critic(), "5");
        history.append(Role::Assistant, writer(), "draft 2");
        history.append(Role::Assistant, critic(), "9");

        assert_eq!(history.last_by("Writer").unwrap().content(), "draft 2");
        assert_eq!(history.last().unwrap().content(), "9");
        assert!(history.last_by("Editor").is_none());
    }

    #[test]
    fn test_since_returns_tail() {
        let mut history = History::new();
        history.append(Role::User, None, "q");
        history.append(Role::Assistant, writer(), "a");

        assert_eq!(history.since(1).len(), 1);
        assert!(history.since(5).is_empty());
        assert_eq!(history.since(0).len(), 2);
    }

    #[test]
    fn test_render_uses_name_or_role() {
        let mut history = History::new();
        history.append(Role::User, None, "Write a haiku");
        history.append(Role::Assistant, writer(), "Autumn moon");

        assert_eq!(history.render(), "user: Write a haiku\n\nWriter: Autumn moon");
    }
}
