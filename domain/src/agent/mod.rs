//! Agent definitions.
//!
//! An [`definition::AgentDefinition`] is the declarative description of a
//! debate participant: its name, the description the speaker selector sees,
//! and the instructions it runs with.

pub mod definition;
