//! CLI entrypoint for Agent Debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{
    BehaviorConfig, ChatAgent, ConversationLogger, DebateAgent, DebateProgressNotifier,
    LlmGateway, LlmNextActionDescriber, LlmScoreExtractor, LlmSelectionPolicy,
    NextActionDescriber, NoConversationLogger, NoProgress, PatternScoreExtractor, Roster,
    RoundRobinSelection, RunDebateInput, RunDebateUseCase, ScoreExtractor, SelectionPolicy,
    StaticNextActionDescriber,
};
use debate_domain::{AgentDefinition, DebateSettings, Severity};
use debate_infrastructure::{
    AzureConnection, AzureDeployments, AzureOpenAiGateway, AzureTransport, ConfigLoader,
    FileConfig, HostedAgent, JsonlConversationLogger, YamlAgentLoader,
};
use debate_presentation::{
    Cli, ConsoleFormatter, ConversationReader, OutputFormat, ProgressReporter, Rendered,
    ScoringMode, SelectionMode,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.debate = cli.apply_overrides(config.debate);

    let log_dir = cli.log_dir.clone().or_else(|| config.logging.log_dir.clone());
    let _log_guard = init_logging(cli.log_level(), log_dir.as_deref());

    info!("Starting Agent Debate");
    check_config(&config)?;

    let conversation = ConversationReader::read(cli.conversation.as_deref(), cli.prompt.as_deref())?;

    // === Dependency Injection ===
    let (azure, issues) = config.azure.resolve();
    report_issues(&issues)?;

    let mut connection = AzureConnection::new(azure.endpoint, azure.api_version, azure.api_key);
    let timeout = cli.timeout.or(config.behavior.timeout_seconds);
    if let Some(seconds) = timeout {
        connection = connection.with_request_timeout(Duration::from_secs(seconds));
    }
    let transport = Arc::new(AzureTransport::new(connection)?);
    let deployments = AzureDeployments::new(azure.executor_deployment, azure.utility_deployment);
    let gateway = Arc::new(AzureOpenAiGateway::new(transport.clone(), deployments.clone()));

    let settings = config.debate.clone();
    let roster = build_roster(&cli, &config, &settings, &gateway, &transport, &deployments)?;

    let selection: Arc<dyn SelectionPolicy> = match cli.selection {
        SelectionMode::Model => Arc::new(LlmSelectionPolicy::new(
            gateway.clone(),
            settings.executor_temperature,
        )),
        SelectionMode::RoundRobin => Arc::new(RoundRobinSelection),
    };
    let scorer: Arc<dyn ScoreExtractor> = match cli.scoring {
        ScoringMode::Model => Arc::new(LlmScoreExtractor::new(
            gateway.clone(),
            settings.utility_temperature,
        )),
        ScoringMode::Pattern => Arc::new(PatternScoreExtractor),
    };
    // Status lines nobody will see are not worth a model call
    let describer: Arc<dyn NextActionDescriber> =
        if cli.quiet && cli.output != OutputFormat::Events {
            Arc::new(StaticNextActionDescriber)
        } else {
            Arc::new(LlmNextActionDescriber::new(
                gateway.clone(),
                settings.utility_temperature,
            ))
        };

    let progress: Arc<dyn DebateProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let logger: Arc<dyn ConversationLogger> = match cli
        .conversation_log
        .as_ref()
        .or(config.logging.conversation_log.as_ref())
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let cancellation = CancellationToken::new();
    let ctrl_c_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current step");
            ctrl_c_token.cancel();
        }
    });

    let use_case = RunDebateUseCase::new(roster, settings, selection, scorer, describer)?
        .with_behavior(BehaviorConfig::from_timeout_seconds(timeout))
        .with_progress(progress)
        .with_conversation_logger(logger)
        .with_cancellation(cancellation);

    let mut stream = use_case.execute(RunDebateInput::new(cli.user.clone(), conversation));
    let mut got_result = false;

    while let Some(item) = stream.recv().await {
        match item {
            Ok(event) => {
                got_result |= event.is_result();
                match ConsoleFormatter::render(&event, cli.output, cli.quiet)? {
                    Some(Rendered::Stdout(line)) => println!("{}", line),
                    Some(Rendered::Stderr(line)) => eprintln!("{}", line),
                    None => {}
                }
            }
            Err(e) => {
                error!("Debate failed: {}", e);
                return Err(e).context("Debate ended without a result");
            }
        }
    }

    if !got_result {
        bail!("Debate ended without a result");
    }
    Ok(())
}

/// Stderr logging filtered by verbosity, plus daily files when `log_dir` is set
fn init_logging(level: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "agent-debate.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

fn check_config(config: &FileConfig) -> Result<()> {
    report_issues(&config.validate())
}

fn report_issues(issues: &[debate_domain::ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

fn load_definition(
    path: Option<&Path>,
    builtin: fn() -> Result<AgentDefinition, debate_infrastructure::AgentLoadError>,
) -> Result<AgentDefinition> {
    Ok(YamlAgentLoader::load_or(path, builtin)?)
}

fn build_roster<G: LlmGateway + 'static>(
    cli: &Cli,
    config: &FileConfig,
    settings: &DebateSettings,
    gateway: &Arc<G>,
    transport: &Arc<AzureTransport>,
    deployments: &AzureDeployments,
) -> Result<Roster> {
    let writer_definition =
        load_definition(config.agents.writer.as_deref(), YamlAgentLoader::builtin_writer)?;
    let critic_definition =
        load_definition(config.agents.critic.as_deref(), YamlAgentLoader::builtin_critic)?;

    let writer: Arc<dyn DebateAgent> = Arc::new(
        ChatAgent::new(writer_definition, gateway.clone())
            .with_default_temperature(settings.executor_temperature),
    );

    let critic: Arc<dyn DebateAgent> = if cli.hosted_critic || config.agents.critic_hosted {
        info!("Critic runs as a hosted agent");
        Arc::new(
            HostedAgent::new(critic_definition, transport.clone(), deployments)
                .with_poll_interval(Duration::from_millis(config.agents.poll_interval_ms))
                .with_max_wait(Duration::from_secs(config.agents.max_wait_seconds)),
        )
    } else {
        Arc::new(
            ChatAgent::new(critic_definition, gateway.clone())
                .with_default_temperature(settings.executor_temperature),
        )
    };

    Ok(Roster::new(vec![writer, critic])?)
}
