/// Re-export `Config` from `salesboard-core` for use within this crate.
///
/// Environment parsing lives in the core crate so integration tests can build
/// a `Config` without the server.
pub use salesboard_core::config::{Config, Environment};
