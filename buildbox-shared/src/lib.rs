//! Buildbox shared helpers.
//!
//! This crate carries the pieces every buildbox component agrees on: the
//! lifetime constants, the well-known filesystem layout of a builder, the
//! countdown decomposition, and the error type.

pub mod constants;
pub mod errors;
pub mod layout;
pub mod time;

pub use errors::{BuildboxError, BuildboxResult};
pub use layout::BuilderLayout;
pub use time::TimeParts;
