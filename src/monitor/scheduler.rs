//! Fixed-cadence probe scheduler

use super::{HealthProber, StatusMonitor};
use crate::server::MonitorStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

/// Drives the probe loop at a fixed cadence.
///
/// At most one recurring task is ever active: `start` aborts the
/// previous handle before spawning a replacement. The first probe runs
/// immediately, then on the fixed interval. Probing is skipped entirely
/// while maintenance mode is active.
pub struct MonitorScheduler {
    status: MonitorStatus,
    handle: Option<JoinHandle<()>>,
}

impl MonitorScheduler {
    pub fn new(status: MonitorStatus) -> Self {
        Self {
            status,
            handle: None,
        }
    }

    pub fn start(
        &mut self,
        prober: HealthProber,
        probe_url: String,
        monitor: Arc<Mutex<StatusMonitor>>,
        interval: Duration,
    ) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }

        info!(
            interval_ms = interval.as_millis() as u64,
            url = %probe_url,
            "starting server monitoring"
        );
        self.status.set_active(true);

        let status = self.status.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                // The lock is not held across the probe request itself;
                // a maintenance toggle landing mid-probe is caught by
                // the engine's own guard.
                if monitor.lock().await.maintenance_active() {
                    continue;
                }

                let result = prober.probe(&probe_url).await;
                monitor.lock().await.handle_probe(result).await;
                status.record_check();
            }
        }));
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the recurring probe task and mark monitoring inactive.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("server monitoring stopped");
        }
        self.status.set_active(false);
    }
}

impl Drop for MonitorScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;
