//! Debate settings value object

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITERATIONS: usize = 6;
pub const DEFAULT_PASSING_SCORE: f64 = 8.0;
pub const DEFAULT_PRODUCER: &str = "Writer";
pub const DEFAULT_CRITIC: &str = "Critic";

/// Parameters that shape one debate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebateSettings {
    /// Hard cap on loop iterations (one appended turn per iteration).
    pub max_iterations: usize,
    /// Score on a 0-10 scale at or above which the debate stops.
    pub passing_score: f64,
    /// Agent chosen when the selector's output is empty or unrecognized.
    pub default_agent: String,
    /// Agent whose latest turn is the debate result.
    pub producer: String,
    /// Agents whose turns are scored by the termination evaluator.
    /// Empty means "the default agent only".
    pub evaluated_agents: Vec<String>,
    /// Sampling temperature for executor calls (selection, agent turns).
    pub executor_temperature: f32,
    /// Sampling temperature for utility calls (score extraction, status).
    pub utility_temperature: f32,
}

impl Default for DebateSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            passing_score: DEFAULT_PASSING_SCORE,
            default_agent: DEFAULT_CRITIC.to_string(),
            producer: DEFAULT_PRODUCER.to_string(),
            evaluated_agents: Vec::new(),
            executor_temperature: 0.0,
            utility_temperature: 0.0,
        }
    }
}

impl DebateSettings {
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_passing_score(mut self, score: f64) -> Self {
        self.passing_score = score;
        self
    }

    pub fn with_default_agent(mut self, name: impl Into<String>) -> Self {
        self.default_agent = name.into();
        self
    }

    pub fn with_producer(mut self, name: impl Into<String>) -> Self {
        self.producer = name.into();
        self
    }

    pub fn with_evaluated_agents(mut self, names: Vec<String>) -> Self {
        self.evaluated_agents = names;
        self
    }

    /// Whether turns from `name` go through score extraction
    pub fn is_evaluated(&self, name: &str) -> bool {
        if self.evaluated_agents.is_empty() {
            name == self.default_agent
        } else {
            self.evaluated_agents.iter().any(|a| a == name)
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_iterations == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "debate.max_iterations".to_string(),
                },
                message: "debate.max_iterations must be at least 1".to_string(),
            });
        }

        if !self.passing_score.is_finite() || !(0.0..=10.0).contains(&self.passing_score) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "debate.passing_score".to_string(),
                },
                message: format!(
                    "debate.passing_score must be within 0-10, got {}",
                    self.passing_score
                ),
            });
        }

        for (field, value) in [
            ("debate.default_agent", &self.default_agent),
            ("debate.producer", &self.producer),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    message: format!("{} must not be empty", field),
                });
            }
        }

        if self.producer == self.default_agent {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ProducerIsDefault,
                message: format!(
                    "'{}' is both producer and selection fallback; selection failures will never yield a critique",
                    self.producer
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_debate() {
        let settings = DebateSettings::default();
        assert_eq!(settings.max_iterations, 6);
        assert_eq!(settings.passing_score, 8.0);
        assert_eq!(settings.default_agent, "Critic");
        assert_eq!(settings.producer, "Writer");
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_evaluated_defaults_to_default_agent() {
        let settings = DebateSettings::default();
        assert!(settings.is_evaluated("Critic"));
        assert!(!settings.is_evaluated("Writer"));

        let settings = settings.with_evaluated_agents(vec!["Judge".to_string()]);
        assert!(settings.is_evaluated("Judge"));
        assert!(!settings.is_evaluated("Critic"));
    }

    #[test]
    fn test_validate_rejects_zero_iterations_and_bad_threshold() {
        let settings = DebateSettings::default()
            .with_max_iterations(0)
            .with_passing_score(12.0);
        let issues = settings.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_validate_warns_when_producer_is_fallback() {
        let settings = DebateSettings::default().with_default_agent("Writer");
        let issues = settings.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].code, ConfigIssueCode::ProducerIsDefault);
    }
}
