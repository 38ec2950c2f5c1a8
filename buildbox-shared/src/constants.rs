//! Constants shared between the buildbox library and CLI.
//!
//! These values are also relied upon by the external fleet manager that
//! reaps expired builders, so they must not change lightly.

/// Builder lifetime constants
pub mod lifetime {
    /// Longest a builder may live past the provisioning of its SSH access.
    ///
    /// The ceiling on any expiration the user may set is the modification
    /// time of the authorized_keys file plus this duration.
    pub const MAX_EXTENSION_SECS: u64 = 14 * 24 * 60 * 60;

    /// How far into the past `release` backdates the expiration marker.
    ///
    /// One minute is enough for any reaper polling interval to observe the
    /// builder as already expired.
    pub const RELEASE_BACKDATE_SECS: u64 = 60;
}

/// Configuration file constants
pub mod config {
    /// Name of the builder configuration file under the config directory.
    pub const FILE_NAME: &str = "main.toml";
}
