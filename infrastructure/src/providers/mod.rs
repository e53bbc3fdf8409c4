//! Model provider adapters

pub mod azure;

pub use azure::{AzureConnection, AzureDeployments, AzureOpenAiGateway, AzureTransport};
