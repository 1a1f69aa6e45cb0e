//! Logging setup
//!
//! Thin wrapper so games initialize logging the same way without depending
//! on the backend crate directly.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Respects `RUST_LOG`; defaults to `info` when unset. Call before any
/// other work; later calls are no-ops, so toolkit entry points that run
/// ahead of `main` can initialize eagerly.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
