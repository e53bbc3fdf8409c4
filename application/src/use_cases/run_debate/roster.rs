//! Debate roster

use crate::ports::debate_agent::{AgentProfile, DebateAgent};
use debate_domain::DebateError;
use std::collections::HashSet;
use std::sync::Arc;

/// Fixed, ordered set of agents taking part in a debate.
///
/// Non-empty with unique names. Agents are looked up by name only.
#[derive(Clone)]
pub struct Roster {
    agents: Vec<Arc<dyn DebateAgent>>,
}

impl Roster {
    pub fn new(agents: Vec<Arc<dyn DebateAgent>>) -> Result<Self, DebateError> {
        if agents.is_empty() {
            return Err(DebateError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for agent in &agents {
            if !seen.insert(agent.name().to_string()) {
                return Err(DebateError::DuplicateAgent(agent.name().to_string()));
            }
        }

        Ok(Self { agents })
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn DebateAgent>> {
        self.agents.iter().find(|a| a.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|a| a.name())
    }

    pub fn profiles(&self) -> Vec<AgentProfile> {
        self.agents.iter().map(|a| a.profile()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use debate_domain::History;

    struct NamedAgent(&'static str);

    #[async_trait]
    impl DebateAgent for NamedAgent {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test agent"
        }

        async fn produce(&self, _history: &History) -> Result<String, GatewayError> {
            Ok(String::new())
        }
    }

    fn agent(name: &'static str) -> Arc<dyn DebateAgent> {
        Arc::new(NamedAgent(name))
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(vec![agent("Writer"), agent("Critic")]).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.contains("Critic"));
        assert!(!roster.contains("critic"));
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Writer", "Critic"]);
        assert_eq!(roster.profiles()[0].summary_line(), "Writer: test agent");
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(matches!(Roster::new(vec![]), Err(DebateError::EmptyRoster)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Roster::new(vec![agent("Writer"), agent("Writer")]);
        assert!(matches!(result, Err(DebateError::DuplicateAgent(n)) if n == "Writer"));
    }
}
