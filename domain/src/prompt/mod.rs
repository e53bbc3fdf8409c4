//! Prompt templates for the debate's model-driven decisions.

pub mod template;

pub use template::PromptTemplate;
