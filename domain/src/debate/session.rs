//! Debate session identifier

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Correlation id for one debate run (Value Object)
///
/// Format: `{caller}-{YYYY-MM-DD_HH:MM:SS.mmm}-{n}` where `n` is a
/// process-wide counter. Two debates started by the same caller in the
/// same millisecond still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create an id for `caller` stamped with the current local time
    pub fn new(caller: &str) -> Self {
        Self::at(caller, Local::now())
    }

    /// Create an id for `caller` stamped with `time`
    pub fn at<Tz: TimeZone>(caller: &str, time: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let n = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let caller = if caller.trim().is_empty() {
            "anonymous"
        } else {
            caller.trim()
        };
        Self(format!(
            "{}-{}-{}",
            caller,
            time.format("%Y-%m-%d_%H:%M:%S%.3f"),
            n
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
