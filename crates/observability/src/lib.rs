//! Tracing/logging setup shared by the binaries.

/// Subscriber installation and filter selection.
pub mod tracing;

/// Initialize process-wide tracing.
///
/// `default_directive` applies when `RUST_LOG` is unset or invalid. Safe to
/// call multiple times; subsequent calls become no-ops.
pub fn init(default_directive: &str) {
    tracing::init(default_directive);
}
