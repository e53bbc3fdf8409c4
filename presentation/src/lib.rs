//! Presentation layer for agent-debate
//!
//! This crate contains the CLI definition, output formatting,
//! progress reporters and conversation input handling.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, ScoringMode, SelectionMode};
pub use input::conversation::{ConversationInputError, ConversationReader};
pub use output::console::{ConsoleFormatter, Rendered};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
