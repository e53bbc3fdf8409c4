//! Progress reporting for debate execution

use colored::Colorize;
use debate_application::{AgentProfile, DebateProgressNotifier};
use debate_domain::{Selection, SessionId, StopReason, TerminationDecision, Turn};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress on stderr with a spinner that follows the debate
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_debate_start(&self, session: &SessionId, agents: &[AgentProfile]) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Debate {}", session));
        pb.set_message(format!(
            "{} agents: {}",
            agents.len(),
            agents
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_speaker_selected(&self, selection: &Selection) {
        self.with_spinner(|pb| {
            let message = if selection.is_fallback() {
                format!("{} is thinking (fallback)", selection.name())
            } else {
                format!("{} is thinking", selection.name())
            };
            pb.set_message(message);
        });
    }

    fn on_turn(&self, turn: &Turn) {
        self.with_spinner(|pb| {
            pb.println(format!(
                "  {} {} ({} chars)",
                "v".green(),
                turn.speaker(),
                turn.content().chars().count()
            ));
        });
    }

    fn on_evaluation(&self, decision: &TerminationDecision) {
        if let Some(score) = decision.score {
            self.with_spinner(|pb| {
                pb.println(format!("    {} {}/10", "score".cyan(), score));
            });
        }
    }

    fn on_debate_end(&self, reason: Option<StopReason>) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            match reason {
                Some(StopReason::ScoreThreshold) => {
                    pb.finish_with_message("passing score reached".green().to_string())
                }
                Some(StopReason::IterationLimit) => {
                    pb.finish_with_message("iteration limit reached".yellow().to_string())
                }
                None => pb.abandon_with_message("debate failed".red().to_string()),
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_debate_start(&self, session: &SessionId, agents: &[AgentProfile]) {
        eprintln!(
            "{} {} ({} agents)",
            "->".cyan(),
            format!("Debate {}", session).bold(),
            agents.len()
        );
    }

    fn on_speaker_selected(&self, selection: &Selection) {
        if selection.is_fallback() {
            eprintln!("  {} falling back to {}", "!".yellow(), selection.name());
        }
    }

    fn on_turn(&self, turn: &Turn) {
        eprintln!("  {} {}", "v".green(), turn.speaker());
    }

    fn on_evaluation(&self, decision: &TerminationDecision) {
        if let Some(score) = decision.score {
            eprintln!("    score {}/10", score);
        }
    }
}
