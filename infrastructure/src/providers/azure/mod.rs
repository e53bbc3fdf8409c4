//! Azure OpenAI adapters
//!
//! [`AzureTransport`] carries the HTTP plumbing shared by the chat-completion
//! gateway and the hosted-agent adapter.

mod gateway;
mod transport;

pub use gateway::{AzureDeployments, AzureOpenAiGateway};
pub use transport::{AzureConnection, AzureTransport, map_status};
