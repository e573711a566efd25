//! Tracing/logging setup shared by binaries, tests and benchmarks.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

pub use self::tracing::{LogFormat, ObservabilityConfig, UnknownLogFormat, init_with};

/// Tracing configuration (filters, layers).
pub mod tracing;
