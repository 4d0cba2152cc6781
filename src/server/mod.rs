//! HTTP server for the monitor's own health endpoints
//!
//! Provides process-level probes:
//! - `/healthz` - Liveness probe (process is running)
//! - `/readyz` - Readiness probe (monitoring loop is active)
//! - `/statusz` - Monitoring flag and last-check timestamp as JSON

mod health;

pub use health::{run_health_server, MonitorStatus};

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
