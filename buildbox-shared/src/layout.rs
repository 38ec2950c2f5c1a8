//! Well-known filesystem layout of a builder.
//!
//! Every path buildbox touches hangs off a single filesystem root, `/` in
//! production. Tests (and the fleet manager's staging harness) point the
//! root at a scratch directory instead, so the layout is the only place
//! that knows where builder state lives.

use std::path::{Path, PathBuf};

/// Directory names under the builder root.
pub mod dirs {
    /// Configuration directory
    pub const CONFIG: &str = "etc/buildbox";

    /// State directory (expiration marker lives here)
    pub const STATE: &str = "var/lib/buildbox";

    /// SSH directory of the builder user
    pub const SSH: &str = "root/.ssh";
}

/// Expiration marker file name within the state directory.
pub const EXPIRATION_FILE: &str = "expiration";

/// Trust-anchor file name within the SSH directory.
///
/// The fleet manager touches this file when it provisions SSH access; its
/// modification time anchors the maximum allowed builder lifetime.
pub const AUTHORIZED_KEYS_FILE: &str = "authorized_keys";

/// Filesystem layout rooted at a builder's filesystem root.
///
/// ```text
/// {root}/
/// ├── etc/buildbox/main.toml          # configuration
/// ├── var/lib/buildbox/expiration     # expiration marker
/// └── root/.ssh/authorized_keys       # trust anchor (mtime only)
/// ```
#[derive(Clone, Debug)]
pub struct BuilderLayout {
    root: PathBuf,
}

impl BuilderLayout {
    /// Create a layout with the given filesystem root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem root of this layout.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configuration file: {root}/etc/buildbox/main.toml
    pub fn config_path(&self) -> PathBuf {
        self.root
            .join(dirs::CONFIG)
            .join(crate::constants::config::FILE_NAME)
    }

    /// Expiration marker: {root}/var/lib/buildbox/expiration
    ///
    /// A single floating-point Unix timestamp as UTF-8 text. Overwritten
    /// whole, never deleted.
    pub fn expiration_path(&self) -> PathBuf {
        self.root.join(dirs::STATE).join(EXPIRATION_FILE)
    }

    /// Trust anchor: {root}/root/.ssh/authorized_keys
    ///
    /// Managed entirely by the fleet manager; buildbox reads only its
    /// modification time.
    pub fn authorized_keys_path(&self) -> PathBuf {
        self.root.join(dirs::SSH).join(AUTHORIZED_KEYS_FILE)
    }
}

impl Default for BuilderLayout {
    fn default() -> Self {
        Self::new("/")
    }
}
