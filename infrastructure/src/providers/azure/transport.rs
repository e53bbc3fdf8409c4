//! HTTP transport for Azure OpenAI endpoints
//!
//! Owns the `reqwest` client, the resource endpoint, API version and key,
//! and maps HTTP failures onto [`GatewayError`].

use debate_application::GatewayError;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Connection parameters for one Azure OpenAI resource
#[derive(Debug, Clone)]
pub struct AzureConnection {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// Value of the `api-version` query parameter
    pub api_version: String,
    /// Sent as the `api-key` header
    pub api_key: String,
    /// Per-request timeout applied by the HTTP client
    pub request_timeout: Option<Duration>,
}

impl AzureConnection {
    pub fn new(
        endpoint: impl Into<String>,
        api_version: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_version: api_version.into(),
            api_key: api_key.into(),
            request_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// JSON-over-HTTP transport bound to one Azure OpenAI resource
pub struct AzureTransport {
    client: Client,
    connection: AzureConnection,
}

impl AzureTransport {
    pub fn new(connection: AzureConnection) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = connection.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self { client, connection })
    }

    pub fn connection(&self) -> &AzureConnection {
        &self.connection
    }

    /// Absolute URL for `path` under `{endpoint}/openai/`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/openai/{}",
            self.connection.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .query(&[("api-version", self.connection.api_version.as_str())])
            .header("api-key", &self.connection.api_key)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        debug!(path, "GET");
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(map_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// Map a non-success HTTP status to a gateway error
pub fn map_status(status: StatusCode, body: &str) -> GatewayError {
    let detail = format!("{}: {}", status, body.trim());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::AuthenticationFailed(detail)
        }
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(detail),
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(detail),
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}
