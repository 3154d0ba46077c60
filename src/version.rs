//! pytok version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The pytok version string (for example, `0.1.0`).
pub const PYTOK_VERSION: &str = env!("CARGO_PKG_VERSION");
