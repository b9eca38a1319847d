//! Health check endpoint for container orchestration.
//!
//! The chart points both the liveness and readiness probes here. Assets are
//! loaded before the port is bound, so a process that answers is ready.

/// Health check handler.
///
/// Returns a simple "ok" response to indicate the service is running.
pub async fn health() -> &'static str {
    "ok"
}
