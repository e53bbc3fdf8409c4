//! Runtime limits for debate model calls.
//!
//! Every agent turn, selection, score extraction and status description in a
//! debate is one model call; [`BehaviorConfig::bound`] applies the same
//! deadline to each of them.

use crate::ports::llm_gateway::GatewayError;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Deadline for a single model call; `None` waits indefinitely.
    pub call_timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Build from the `timeout_seconds` setting (`None` disables the deadline).
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            call_timeout: seconds.map(Duration::from_secs),
        }
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Await one model call, failing with [`GatewayError::Timeout`] past the deadline.
    pub async fn bound<T, F>(&self, call: F) -> Result<T, GatewayError>
    where
        F: Future<Output = Result<T, GatewayError>>,
    {
        match self.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => call.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timeout_seconds() {
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(30)).call_timeout,
            Some(Duration::from_secs(30))
        );
        assert_eq!(BehaviorConfig::from_timeout_seconds(None), BehaviorConfig::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_bound_times_out_slow_call() {
        let behavior = BehaviorConfig::default().with_call_timeout(Duration::from_secs(1));
        let result: Result<(), GatewayError> = behavior
            .bound(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;
        assert_eq!(result, Err(GatewayError::Timeout));
    }

    #[tokio::test]
    async fn test_bound_without_deadline_passes_through() {
        let result = BehaviorConfig::default()
            .bound(async { Ok::<_, GatewayError>(42) })
            .await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_bound_keeps_call_error() {
        let behavior = BehaviorConfig::from_timeout_seconds(Some(5));
        let result: Result<(), GatewayError> = behavior
            .bound(async { Err(GatewayError::RateLimited("slow down".to_string())) })
            .await;
        assert_eq!(result, Err(GatewayError::RateLimited("slow down".to_string())));
    }
}
