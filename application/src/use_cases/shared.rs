//! Shared utilities for use cases.
//!
//! Contains cancellation checking.

use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `true` if the token exists and is cancelled.
pub(crate) fn is_cancelled(token: &Option<CancellationToken>) -> bool {
    token.as_ref().is_some_and(|t| t.is_cancelled())
}
