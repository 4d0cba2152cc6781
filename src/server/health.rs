//! Health check endpoints for the monitor process
//!
//! - `/healthz` - Liveness: Is the process alive?
//! - `/readyz` - Readiness: Is the monitoring loop active?
//! - `/statusz` - Snapshot of the monitoring flag and last check time
//!
//! These describe the monitor itself, not the monitored game server.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared monitoring state surfaced to external liveness probes.
///
/// The scheduler sets the active flag when the probe loop starts and
/// records a timestamp after each completed check.
#[derive(Debug, Clone)]
pub struct MonitorStatus {
    active: Arc<AtomicBool>,
    // Unix seconds of the last completed probe; 0 means never.
    last_check: Arc<AtomicI64>,
}

impl MonitorStatus {
    /// Create a new monitor status (initially inactive, no checks yet)
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            last_check: Arc::new(AtomicI64::new(0)),
        }
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Record that a probe cycle just completed.
    pub fn record_check(&self) {
        self.last_check
            .store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
    }

    pub fn last_check_unix(&self) -> Option<i64> {
        match self.last_check.load(Ordering::SeqCst) {
            0 => None,
            ts => Some(ts),
        }
    }
}

impl Default for MonitorStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness probe handler
///
/// Always returns 200 OK - if this responds, the process is alive.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe handler
///
/// Returns 200 OK while the monitoring loop is active, 503 otherwise.
async fn readyz(State(status): State<MonitorStatus>) -> StatusCode {
    if status.is_active() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Status snapshot handler
async fn statusz(State(status): State<MonitorStatus>) -> Json<serde_json::Value> {
    let last_check = status.last_check_unix();
    let last_check_rfc3339 = last_check
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.to_rfc3339());

    Json(serde_json::json!({
        "monitoring_active": status.is_active(),
        "last_check_unix": last_check,
        "last_check_rfc3339": last_check_rfc3339,
    }))
}

/// Run the health server on the specified port
///
/// # Arguments
/// * `port` - The port to listen on
/// * `status` - Shared monitoring state
///
/// # Returns
/// This function runs forever until the server is shut down
pub async fn run_health_server(port: u16, status: MonitorStatus) -> Result<(), std::io::Error> {
    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/statusz", get(statusz))
        .with_state(status);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    // Log after successful bind - server is actually listening
    info!(port = %port, "Health server listening");

    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}
