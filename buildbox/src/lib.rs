//! Buildbox - lifetime control for ephemeral build machines.
//!
//! A builder is allocated for a single build, reachable over SSH for a
//! bounded time, and reclaimed by an external fleet manager once its
//! expiration passes. This library reads and adjusts that expiration:
//!
//! - [`config`] loads the builder configuration file,
//! - [`expiration`] reads and overwrites the expiration marker,
//! - [`builder`] computes the remaining lifetime against the trust-anchor
//!   ceiling and carries the prolong/release actions.
//!
//! Nothing here provisions or destroys the machine itself.

pub mod builder;
pub mod config;
pub mod expiration;

pub use builder::Builder;
pub use config::BuilderConfig;
pub use expiration::ExpirationStore;
