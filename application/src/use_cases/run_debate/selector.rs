//! Turn selector: picks the next speaker.

use super::roster::Roster;
use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::selection_policy::SelectionPolicy;
use debate_domain::{History, Selection, resolve_selection};
use std::sync::Arc;
use tracing::{info, warn};

/// Wraps a [`SelectionPolicy`] so that the result is always a roster name.
///
/// Empty or unrecognized policy output falls back to the default agent.
/// The fallback does not check whether that agent just spoke, so two
/// consecutive turns by the default agent are possible.
pub struct TurnSelector {
    policy: Arc<dyn SelectionPolicy>,
    default_agent: String,
    behavior: BehaviorConfig,
}

impl TurnSelector {
    pub fn new(
        policy: Arc<dyn SelectionPolicy>,
        default_agent: impl Into<String>,
        behavior: BehaviorConfig,
    ) -> Self {
        Self {
            policy,
            default_agent: default_agent.into(),
            behavior,
        }
    }

    pub async fn select(&self, history: &History, roster: &Roster) -> Result<Selection, GatewayError> {
        let raw = self.behavior.bound(self.policy.select(history, &roster.profiles())).await?;
        let selection = resolve_selection(raw.as_deref(), roster.names(), &self.default_agent);

        match &selection {
            Selection::Chosen(name) => info!(agent = %name, "Speaker selected"),
            Selection::Fallback { name, raw } => warn!(
                agent = %name,
                raw = ?raw,
                "Selector output not recognized, falling back to default agent"
            ),
        }

        Ok(selection)
    }
}
