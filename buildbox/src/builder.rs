//! Builder lifetime status and actions.
//!
//! [`Builder`] is the one place that knows how the pieces fit together:
//! the expiration marker, the trust-anchor ceiling, and the best-effort
//! build PID. All values are recomputed from the filesystem on every call;
//! the underlying files change behind our back (the fleet manager rotates
//! authorized_keys, a concurrent invocation rewrites the marker), so
//! caching any of them would serve stale answers.

use buildbox_shared::constants::lifetime;
use buildbox_shared::errors::{BuildboxError, BuildboxResult};
use buildbox_shared::layout::BuilderLayout;
use buildbox_shared::time;
use chrono::{DateTime, Duration, Utc};

use crate::config::BuilderConfig;
use crate::expiration::ExpirationStore;

/// Lifetime view of the builder this process runs on.
pub struct Builder {
    layout: BuilderLayout,
    config: BuilderConfig,
    store: ExpirationStore,
}

impl Builder {
    pub fn new(layout: BuilderLayout, config: BuilderConfig) -> Self {
        let store = ExpirationStore::new(layout.expiration_path());
        Self {
            layout,
            config,
            store,
        }
    }

    /// The currently stored expiration, if any.
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        self.store.read()
    }

    /// The latest expiration the user is permitted to set.
    ///
    /// Derived from the trust anchor: the modification time of the
    /// authorized_keys file plus the fixed maximum extension. A missing or
    /// unreadable anchor means the builder was never provisioned properly
    /// and is a deployment error.
    pub fn maxlimit(&self) -> BuildboxResult<DateTime<Utc>> {
        let path = self.layout.authorized_keys_path();
        let mtime = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .map_err(|e| {
                BuildboxError::Storage(format!(
                    "failed to read trust anchor {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let anchored: DateTime<Utc> = mtime.into();
        Ok(anchored + Duration::seconds(lifetime::MAX_EXTENSION_SECS as i64))
    }

    /// Human-readable countdown until the builder expires.
    ///
    /// `"unknown"` when no expiration is stored, `"expired"` once the
    /// stored instant has passed. A stored expiration beyond the ceiling is
    /// clamped for display only; the marker itself is left as-is.
    pub fn remaining_time(&self) -> BuildboxResult<String> {
        let expiration = match self.expiration() {
            Some(at) => at,
            None => return Ok("unknown".to_string()),
        };

        let now = Utc::now();
        if expiration < now {
            return Ok("expired".to_string());
        }

        let effective = expiration.min(self.maxlimit()?);
        // A stale ceiling can clamp into the past; saturate rather than
        // counting negative units.
        let secs = (effective - now).num_seconds().max(0) as u64;
        Ok(time::decompose(secs).to_string())
    }

    /// PID of the build process, read from the configured PID file.
    ///
    /// Purely informational. Anything other than a file holding decimal
    /// digits yields `None`, silently.
    pub fn build_pid(&self) -> Option<String> {
        let path = &self.config.main.pidfile;
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "build PID file unreadable");
                return None;
            }
        };

        let pid = content.trim();
        if pid.is_empty() || !pid.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(path = %path.display(), "build PID file does not hold a PID");
            return None;
        }

        Some(pid.to_string())
    }

    /// Push the expiration `hours` further out (negative pulls it in).
    ///
    /// Cumulative: the extension is applied to the stored expiration, not
    /// to the current time. Rejected without touching the marker when no
    /// expiration is stored or when the result would pass the ceiling.
    pub fn prolong(&self, hours: i64) -> BuildboxResult<DateTime<Utc>> {
        let current = self.expiration().ok_or(BuildboxError::NoExpiration)?;

        let requested = Duration::try_hours(hours)
            .and_then(|extension| current.checked_add_signed(extension))
            .ok_or(BuildboxError::HoursOutOfRange(hours))?;

        let limit = self.maxlimit()?;
        if requested > limit {
            return Err(BuildboxError::LimitExceeded { requested, limit });
        }

        self.store.write(requested)?;
        Ok(requested)
    }

    /// Hand the builder back by backdating the expiration one minute.
    ///
    /// Any reaper polling the marker will immediately treat the machine as
    /// expired, whatever was stored before.
    pub fn release(&self) -> BuildboxResult<DateTime<Utc>> {
        let at = Utc::now() - Duration::seconds(lifetime::RELEASE_BACKDATE_SECS as i64);
        self.store.write(at)?;
        Ok(at)
    }
}
