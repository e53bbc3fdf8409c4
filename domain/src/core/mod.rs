//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelRole`]: named chat-completion capability (executor, utility)
//! - [`error::DebateError`]: domain-level errors

pub mod error;
pub mod model;
