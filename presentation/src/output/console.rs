//! Console output formatter for debate results

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use debate_domain::{DebateEvent, Turn};

/// Where a rendered line should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Stdout(String),
    Stderr(String),
}

/// Formats debate events for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render one event for the chosen output format.
    ///
    /// Status lines go to stderr in text and json modes so stdout carries
    /// only the result; events mode writes the raw stream to stdout.
    pub fn render(
        event: &DebateEvent,
        format: OutputFormat,
        quiet: bool,
    ) -> Result<Option<Rendered>, serde_json::Error> {
        let rendered = match (format, event) {
            (OutputFormat::Events, event) => Some(Rendered::Stdout(event.to_wire()?)),
            (_, DebateEvent::Status(_)) if quiet => None,
            (_, DebateEvent::Status(text)) => Some(Rendered::Stderr(Self::status_line(text))),
            (OutputFormat::Json, DebateEvent::Result(turn)) => {
                Some(Rendered::Stdout(Self::format_json(turn)?))
            }
            (OutputFormat::Text, DebateEvent::Result(turn)) => {
                Some(Rendered::Stdout(Self::format_result(turn)))
            }
        };
        Ok(rendered)
    }

    pub fn status_line(text: &str) -> String {
        format!("{} {}", "..".dimmed(), text.italic())
    }

    /// Format the final turn with a header
    pub fn format_result(turn: &Turn) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Final draft by {}", turn.speaker())));
        output.push('\n');
        output.push_str(turn.content().trim_end());
        output.push('\n');
        output
    }

    /// Format the final turn as pretty JSON
    pub fn format_json(turn: &Turn) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(turn)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }
}
