//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The selection, scoring and status ports are also the seams where the
//! model-driven policies can be swapped for deterministic ones.

pub mod conversation_logger;
pub mod debate_agent;
pub mod llm_gateway;
pub mod next_action;
pub mod progress;
pub mod score_extractor;
pub mod selection_policy;
