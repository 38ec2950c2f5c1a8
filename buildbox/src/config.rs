//! Builder configuration.
//!
//! Loaded once at startup by the CLI and passed to whichever component
//! needs it. The file is shared with other tooling installed on the
//! builder, so unknown sections and keys are ignored.

use std::path::{Path, PathBuf};

use buildbox_shared::errors::{BuildboxError, BuildboxResult};
use serde::Deserialize;

/// Builder configuration file contents.
#[derive(Clone, Debug, Deserialize)]
pub struct BuilderConfig {
    pub main: MainSection,
}

/// The `[main]` section.
#[derive(Clone, Debug, Deserialize)]
pub struct MainSection {
    /// PID file of the build process running on this machine.
    ///
    /// Best-effort informational display only; the build process is not
    /// managed by buildbox.
    pub pidfile: PathBuf,
}

impl BuilderConfig {
    /// Load the configuration from a TOML file.
    ///
    /// A missing or unparseable file is a deployment error, not a user
    /// error, and fails loudly.
    pub fn load(path: &Path) -> BuildboxResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BuildboxError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            BuildboxError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}
