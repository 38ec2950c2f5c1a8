//! The expiration marker.
//!
//! A single file holding one floating-point Unix timestamp as UTF-8 text.
//! The external reaper polls it; `prolong` and `release` overwrite it. It
//! is never deleted by this program.
//!
//! Reading is best-effort: a missing, unreadable or corrupt marker means
//! "no expiration known" and is not an error. Writing a required marker is
//! fatal when it fails.

use std::path::{Path, PathBuf};

use buildbox_shared::errors::{BuildboxError, BuildboxResult};
use chrono::{DateTime, Utc};

/// Reads and overwrites the expiration marker file.
#[derive(Clone, Debug)]
pub struct ExpirationStore {
    path: PathBuf,
}

impl ExpirationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored expiration.
    ///
    /// Returns `None` on any I/O failure or unparseable content. The
    /// underlying file can change between calls, so the result is never
    /// cached.
    pub fn read(&self) -> Option<DateTime<Utc>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "expiration marker unreadable, treating as unset");
                return None;
            }
        };

        let timestamp: f64 = match content.trim().parse() {
            Ok(ts) => ts,
            Err(_) => {
                tracing::debug!(path = %self.path.display(), "expiration marker content is not a timestamp");
                return None;
            }
        };

        let at = from_unix_seconds(timestamp);
        if at.is_none() {
            tracing::debug!(path = %self.path.display(), timestamp, "expiration marker timestamp out of range");
        }
        at
    }

    /// Overwrite the marker with the given instant.
    pub fn write(&self, at: DateTime<Utc>) -> BuildboxResult<()> {
        let timestamp = to_unix_seconds(at);
        std::fs::write(&self.path, timestamp.to_string()).map_err(|e| {
            BuildboxError::Storage(format!(
                "failed to write expiration marker {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %self.path.display(), timestamp, "expiration marker updated");
        Ok(())
    }
}

fn from_unix_seconds(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9).min(999_999_999.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos)
}

fn to_unix_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1e9
}
