//! Azure OpenAI settings from TOML (`[azure]` section)

use debate_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

pub const ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";
pub const API_VERSION_ENV: &str = "AZURE_OPENAI_API_VERSION";
pub const EXECUTOR_DEPLOYMENT_ENV: &str = "EXECUTOR_AZURE_OPENAI_DEPLOYMENT_NAME";
pub const UTILITY_DEPLOYMENT_ENV: &str = "UTILITY_AZURE_OPENAI_DEPLOYMENT_NAME";
pub const DEFAULT_API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const DEFAULT_API_VERSION: &str = "2024-06-01";

/// Azure OpenAI resource configuration
///
/// # Example
///
/// ```toml
/// [azure]
/// endpoint = "https://my-resource.openai.azure.com"
/// api_version = "2024-06-01"
/// executor_deployment = "gpt-4o"       # Selection and agent turns
/// utility_deployment = "gpt-4o-mini"   # Score extraction and status lines
/// api_key_env = "AZURE_OPENAI_API_KEY"
/// ```
///
/// Empty values fall back to the conventional Azure environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAzureConfig {
    pub endpoint: String,
    pub api_version: String,
    pub executor_deployment: String,
    pub utility_deployment: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
}

impl Default for FileAzureConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_version: String::new(),
            executor_deployment: String::new(),
            utility_deployment: String::new(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

/// Azure settings with environment fallbacks applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAzureConfig {
    pub endpoint: String,
    pub api_version: String,
    pub executor_deployment: String,
    pub utility_deployment: String,
    pub api_key: String,
}

impl FileAzureConfig {
    /// Apply environment fallbacks from the process environment
    pub fn resolve(&self) -> (ResolvedAzureConfig, Vec<ConfigIssue>) {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Apply environment fallbacks using `lookup`, reporting missing values
    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (ResolvedAzureConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let pick = |value: &str, env: &str| -> Option<String> {
            let value = value.trim();
            if value.is_empty() {
                lookup(env).filter(|v| !v.trim().is_empty())
            } else {
                Some(value.to_string())
            }
        };
        let mut require = |field: &str, env: &str, value: Option<String>| -> String {
            value.unwrap_or_else(|| {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::MissingSetting {
                        field: field.to_string(),
                    },
                    message: format!("{} is not set (config file or ${})", field, env),
                });
                String::new()
            })
        };

        let endpoint = require(
            "azure.endpoint",
            ENDPOINT_ENV,
            pick(&self.endpoint, ENDPOINT_ENV),
        );
        let executor_deployment = require(
            "azure.executor_deployment",
            EXECUTOR_DEPLOYMENT_ENV,
            pick(&self.executor_deployment, EXECUTOR_DEPLOYMENT_ENV),
        );
        let utility_deployment = require(
            "azure.utility_deployment",
            UTILITY_DEPLOYMENT_ENV,
            pick(&self.utility_deployment, UTILITY_DEPLOYMENT_ENV),
        );
        let api_key_value = match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Some(key.to_string()),
            _ => lookup(&self.api_key_env).filter(|v| !v.trim().is_empty()),
        };
        let api_key = require("azure.api_key", &self.api_key_env, api_key_value);
        let api_version = pick(&self.api_version, API_VERSION_ENV)
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        (
            ResolvedAzureConfig {
                endpoint,
                api_version,
                executor_deployment,
                utility_deployment,
                api_key,
            },
            issues,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_env_fallbacks_fill_empty_fields() {
        let config = FileAzureConfig::default();
        let (resolved, issues) = config.resolve_with(env(&[
            (ENDPOINT_ENV, "https://env.openai.azure.com"),
            (EXECUTOR_DEPLOYMENT_ENV, "gpt-4o"),
            (UTILITY_DEPLOYMENT_ENV, "gpt-4o-mini"),
            (DEFAULT_API_KEY_ENV, "secret"),
        ]));

        assert!(issues.is_empty());
        assert_eq!(resolved.endpoint, "https://env.openai.azure.com");
        assert_eq!(resolved.executor_deployment, "gpt-4o");
        assert_eq!(resolved.utility_deployment, "gpt-4o-mini");
        assert_eq!(resolved.api_key, "secret");
        assert_eq!(resolved.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_file_values_win_over_env() {
        let config = FileAzureConfig {
            endpoint: "https://file.openai.azure.com".to_string(),
            api_version: "2025-01-01".to_string(),
            executor_deployment: "exec".to_string(),
            utility_deployment: "util".to_string(),
            api_key_env: "MY_KEY".to_string(),
            api_key: None,
        };
        let (resolved, issues) = config.resolve_with(env(&[
            (ENDPOINT_ENV, "https://env.openai.azure.com"),
            ("MY_KEY", "k"),
        ]));

        assert!(issues.is_empty());
        assert_eq!(resolved.endpoint, "https://file.openai.azure.com");
        assert_eq!(resolved.api_version, "2025-01-01");
        assert_eq!(resolved.api_key, "k");
    }

    #[test]
    fn test_missing_values_are_reported() {
        let (_, issues) = FileAzureConfig::default().resolve_with(env(&[]));

        let fields: Vec<_> = issues
            .iter()
            .map(|i| match &i.code {
                ConfigIssueCode::MissingSetting { field } => field.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(
            fields,
            vec![
                "azure.endpoint",
                "azure.executor_deployment",
                "azure.utility_deployment",
                "azure.api_key"
            ]
        );
        assert!(issues.iter().all(|i| i.is_error()));
    }
}
