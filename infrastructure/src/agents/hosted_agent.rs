//! Remotely hosted debate agent
//!
//! Runs an agent on the service side through the assistants API:
//!
//! ```text
//! POST assistants            (once, lazily)  -> assistant id
//! POST threads/runs          (per turn)      -> thread id + run id
//! GET  threads/{t}/runs/{r}  (poll)          -> completed | failed | ...
//! GET  threads/{t}/messages                  -> assistant reply
//! ```
//!
//! Every turn starts a fresh thread seeded with the full history, so the
//! remote side keeps no conversation state between turns.

use crate::providers::azure::{AzureDeployments, AzureTransport};
use async_trait::async_trait;
use debate_application::{DebateAgent, GatewayError};
use debate_domain::{AgentDefinition, History, Role};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::time::Instant;
use tracing::{debug, info};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(300);

#[derive(Serialize)]
struct CreateAssistant<'a> {
    model: &'a str,
    name: &'a str,
    description: &'a str,
    instructions: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct Created {
    id: String,
}

#[derive(Serialize)]
struct ThreadMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct CreateThreadAndRun<'a> {
    assistant_id: &'a str,
    thread: NewThread<'a>,
}

#[derive(Serialize)]
struct NewThread<'a> {
    messages: Vec<ThreadMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct Run {
    id: String,
    thread_id: String,
    status: String,
    #[serde(default)]
    last_error: Option<RunError>,
}

#[derive(Debug, Deserialize)]
struct RunError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct MessageList {
    #[serde(default)]
    data: Vec<Message>,
}

#[derive(Deserialize)]
struct Message {
    role: String,
    #[serde(default)]
    run_id: Option<String>,
    #[serde(default)]
    content: Vec<MessageContent>,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    text: Option<MessageText>,
}

#[derive(Deserialize)]
struct MessageText {
    value: String,
}

/// Debate agent executed by the service's agent runtime
pub struct HostedAgent {
    definition: AgentDefinition,
    deployment: String,
    transport: Arc<AzureTransport>,
    assistant_id: OnceCell<String>,
    poll_interval: Duration,
    max_wait: Duration,
}

impl HostedAgent {
    /// The deployment is the definition's own, else the one for its model role.
    pub fn new(
        definition: AgentDefinition,
        transport: Arc<AzureTransport>,
        deployments: &AzureDeployments,
    ) -> Self {
        let deployment = definition
            .deployment
            .clone()
            .unwrap_or_else(|| deployments.for_role(definition.model_role()).to_string());

        Self {
            definition,
            deployment,
            transport,
            assistant_id: OnceCell::new(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn deployment(&self) -> &str {
        &self.deployment
    }

    async fn assistant_id(&self) -> Result<&str, GatewayError> {
        let id = self
            .assistant_id
            .get_or_try_init(|| async {
                let body = CreateAssistant {
                    model: &self.deployment,
                    name: &self.definition.name,
                    description: &self.definition.description,
                    instructions: &self.definition.instructions,
                    temperature: self.definition.temperature_for_role(),
                };
                let created: Created = self.transport.post_json("assistants", &body).await?;
                info!(
                    agent = %self.definition.name,
                    assistant_id = %created.id,
                    "Hosted agent created"
                );
                Ok::<_, GatewayError>(created.id)
            })
            .await?;
        Ok(id.as_str())
    }

    async fn wait_for(&self, mut run: Run) -> Result<Run, GatewayError> {
        let deadline = Instant::now() + self.max_wait;

        loop {
            match run.status.as_str() {
                "completed" => return Ok(run),
                "failed" | "cancelled" | "expired" | "incomplete" => {
                    let detail = run
                        .last_error
                        .map(|e| format!("{}: {}", e.code, e.message))
                        .unwrap_or_default();
                    return Err(GatewayError::RequestFailed(format!(
                        "run {} {} {}",
                        run.id, run.status, detail
                    )));
                }
                "requires_action" => {
                    return Err(GatewayError::RequestFailed(format!(
                        "run {} requested tool calls, which hosted debate agents do not support",
                        run.id
                    )));
                }
                _ => {}
            }

            if Instant::now() >= deadline {
                return Err(GatewayError::Timeout);
            }
            tokio::time::sleep(self.poll_interval).await;

            debug!(run_id = %run.id, status = %run.status, "Polling hosted run");
            run = self
                .transport
                .get_json(&format!("threads/{}/runs/{}", run.thread_id, run.id), &[])
                .await?;
        }
    }

    async fn reply(&self, run: &Run) -> Result<String, GatewayError> {
        let messages: MessageList = self
            .transport
            .get_json(
                &format!("threads/{}/messages", run.thread_id),
                &[("order", "desc"), ("limit", "20")],
            )
            .await?;

        let message = messages
            .data
            .into_iter()
            .find(|m| m.role == "assistant" && m.run_id.as_deref() == Some(run.id.as_str()))
            .ok_or_else(|| {
                GatewayError::InvalidResponse(format!("run {} produced no reply", run.id))
            })?;

        Ok(message
            .content
            .into_iter()
            .filter_map(|c| c.text.map(|t| t.value))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[async_trait]
impl DebateAgent for HostedAgent {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn description(&self) -> &str {
        &self.definition.description
    }

    async fn produce(&self, history: &History) -> Result<String, GatewayError> {
        let assistant_id = self.assistant_id().await?;

        // Thread messages accept only user and assistant authors
        let messages = history
            .iter()
            .map(|turn| ThreadMessage {
                role: match turn.role() {
                    Role::Assistant => "assistant",
                    Role::User | Role::System => "user",
                },
                content: turn.content(),
            })
            .collect();

        let run: Run = self
            .transport
            .post_json(
                "threads/runs",
                &CreateThreadAndRun {
                    assistant_id,
                    thread: NewThread { messages },
                },
            )
            .await?;
        debug!(agent = %self.definition.name, run_id = %run.id, "Hosted run started");

        let run = self.wait_for(run).await?;
        self.reply(&run).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::azure::AzureConnection;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn agent(server: &MockServer) -> HostedAgent {
        let transport =
            AzureTransport::new(AzureConnection::new(server.uri(), "2024-05-01-preview", "k"))
                .unwrap();
        HostedAgent::new(
            AgentDefinition::new("Critic", "Scores drafts").with_instructions("Score it."),
            Arc::new(transport),
            &AzureDeployments::new("gpt-4o", "gpt-4o-mini"),
        )
        .with_poll_interval(Duration::from_millis(1))
    }

    fn history() -> History {
        let mut history = History::new();
        history.append(Role::User, None, "Write a haiku");
        history.append(Role::Assistant, Some("Writer".to_string()), "Old pond...");
        history
    }

    async fn mount_assistant(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/openai/assistants"))
            .and(body_partial_json(json!({"model": "gpt-4o", "name": "Critic"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "asst_1"})))
            .expect(1)
            .mount(server)
            .await;
    }

    fn run(status: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "run_1",
            "thread_id": "thread_1",
            "status": status
        }))
    }

    #[tokio::test]
    async fn test_produce_polls_until_completed() {
        let server = MockServer::start().await;
        mount_assistant(&server).await;
        Mock::given(method("POST"))
            .and(path("/openai/threads/runs"))
            .and(body_partial_json(json!({
                "assistant_id": "asst_1",
                "thread": {"messages": [
                    {"role": "user", "content": "Write a haiku"},
                    {"role": "assistant", "content": "Old pond..."}
                ]}
            })))
            .respond_with(run("queued"))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/openai/threads/thread_1/runs/run_1"))
            .respond_with(run("in_progress"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/openai/threads/thread_1/runs/run_1"))
            .respond_with(run("completed"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/openai/threads/thread_1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"role": "assistant", "run_id": "run_1",
                     "content": [{"type": "text", "text": {"value": "Score: 9/10"}}]},
                    {"role": "user", "run_id": null,
                     "content": [{"type": "text", "text": {"value": "Write a haiku"}}]}
                ]
            })))
            .mount(&server)
            .await;

        let agent = agent(&server);
        assert_eq!(agent.produce(&history()).await.unwrap(), "Score: 9/10");
        // Second turn reuses the assistant
        assert_eq!(agent.produce(&history()).await.unwrap(), "Score: 9/10");
    }

    #[tokio::test]
    async fn test_seeded_messages_are_not_a_reply() {
        let server = MockServer::start().await;
        mount_assistant(&server).await;
        Mock::given(method("POST"))
            .and(path("/openai/threads/runs"))
            .respond_with(run("completed"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/openai/threads/thread_1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"role": "assistant", "run_id": null,
                     "content": [{"type": "text", "text": {"value": "Old pond..."}}]},
                    {"role": "user", "run_id": null,
                     "content": [{"type": "text", "text": {"value": "Write a haiku"}}]}
                ]
            })))
            .mount(&server)
            .await;

        let err = agent(&server).produce(&history()).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn test_failed_run_is_request_failure() {
        let server = MockServer::start().await;
        mount_assistant(&server).await;
        Mock::given(method("POST"))
            .and(path("/openai/threads/runs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "run_1",
                "thread_id": "thread_1",
                "status": "failed",
                "last_error": {"code": "server_error", "message": "boom"}
            })))
            .mount(&server)
            .await;

        let err = agent(&server).produce(&history()).await.unwrap_err();
        match err {
            GatewayError::RequestFailed(detail) => assert!(detail.contains("server_error: boom")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_that_never_finishes_times_out() {
        let server = MockServer::start().await;
        mount_assistant(&server).await;
        Mock::given(method("POST"))
            .and(path("/openai/threads/runs"))
            .respond_with(run("in_progress"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/openai/threads/thread_1/runs/run_1"))
            .respond_with(run("in_progress"))
            .mount(&server)
            .await;

        let err = agent(&server)
            .with_max_wait(Duration::from_millis(20))
            .produce(&history())
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Timeout);
    }

    #[test]
    fn test_deployment_prefers_definition() {
        let transport =
            Arc::new(AzureTransport::new(AzureConnection::new("http://x", "v", "k")).unwrap());
        let deployments = AzureDeployments::new("gpt-4o", "gpt-4o-mini");

        let mut definition = AgentDefinition::new("Critic", "");
        definition.deployment = Some("critic-dep".to_string());
        let hosted = HostedAgent::new(definition, transport.clone(), &deployments);
        assert_eq!(hosted.deployment(), "critic-dep");

        let definition =
            AgentDefinition::new("Critic", "").with_model(debate_domain::ModelRole::Utility);
        let hosted = HostedAgent::new(definition, transport, &deployments);
        assert_eq!(hosted.deployment(), "gpt-4o-mini");
    }
}
