//! Error types for buildbox.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Timestamp format used in user-facing messages.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Errors surfaced by buildbox operations.
///
/// Best-effort reads (expiration marker, build PID file) never produce one
/// of these; they degrade to `None` at the call site. Everything here is
/// either a policy rejection or a broken deployment.
#[derive(Debug, Error)]
pub enum BuildboxError {
    /// Configuration missing or invalid. Deployment error.
    #[error("config error: {0}")]
    Config(String),

    /// Required file unreadable or unwritable. Deployment error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Prolong request pushed the expiration past the allowed ceiling.
    #[error(
        "requested expiration {} exceeds the allowed limit {}",
        .requested.format(TIMESTAMP_FORMAT),
        .limit.format(TIMESTAMP_FORMAT)
    )]
    LimitExceeded {
        requested: DateTime<Utc>,
        limit: DateTime<Utc>,
    },

    /// Prolong invoked while no expiration is stored.
    #[error("no expiration is currently set, nothing to prolong")]
    NoExpiration,

    /// Prolong request so large the resulting timestamp is not representable.
    #[error("requested extension of {0} hours is out of range")]
    HoursOutOfRange(i64),
}

impl BuildboxError {
    /// Whether this error is a policy rejection rather than a broken
    /// deployment. Policy rejections exit with a dedicated status code so
    /// callers can tell the two apart.
    pub fn is_policy(&self) -> bool {
        matches!(
            self,
            BuildboxError::LimitExceeded { .. }
                | BuildboxError::NoExpiration
                | BuildboxError::HoursOutOfRange(_)
        )
    }
}

pub type BuildboxResult<T> = Result<T, BuildboxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_limit_exceeded_names_both_timestamps() {
        let err = BuildboxError::LimitExceeded {
            requested: Utc.with_ymd_and_hms(2026, 8, 20, 14, 30, 0).unwrap(),
            limit: Utc.with_ymd_and_hms(2026, 8, 15, 9, 0, 0).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2026-08-20 14:30"), "{msg}");
        assert!(msg.contains("2026-08-15 09:00"), "{msg}");
    }

    #[test]
    fn test_policy_classification() {
        assert!(BuildboxError::NoExpiration.is_policy());
        assert!(!BuildboxError::Storage("boom".into()).is_policy());
        assert!(!BuildboxError::Config("boom".into()).is_policy());
    }
}
