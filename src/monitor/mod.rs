//! Server liveness monitoring
//!
//! The probe loop and the command dispatcher both funnel into
//! [`StatusMonitor`], which owns the transition engine and the
//! announcement publisher.

mod engine;
mod probe;
mod scheduler;

pub use engine::{ServerBelief, TransitionEngine};
pub use probe::{HealthProber, ProbeResult};
pub use scheduler::MonitorScheduler;

use crate::announce::{Announcement, StatusPublisher};
use tracing::error;

/// Ties the transition engine to the announcement publisher.
///
/// Shared as `Arc<tokio::sync::Mutex<StatusMonitor>>`; each operation
/// runs to completion, including its publish, while the lock is held,
/// so overlapping probe and command handling serialize into the
/// announcement slot in arrival order.
pub struct StatusMonitor {
    engine: TransitionEngine,
    publisher: StatusPublisher,
}

impl StatusMonitor {
    pub fn new(engine: TransitionEngine, publisher: StatusPublisher) -> Self {
        Self { engine, publisher }
    }

    pub fn belief(&self) -> ServerBelief {
        self.engine.belief()
    }

    pub fn maintenance_active(&self) -> bool {
        self.engine.maintenance_active()
    }

    /// Feed one probe result through the engine, announcing any
    /// resulting transition.
    pub async fn handle_probe(&mut self, result: ProbeResult) {
        if let Some(announcement) = self.engine.observe_probe(result) {
            self.publish(announcement).await;
        }
    }

    /// Toggle maintenance mode. Returns true if the mode changed.
    pub async fn set_maintenance(&mut self, on: bool) -> bool {
        match self.engine.set_maintenance(on) {
            Some(announcement) => {
                self.publish(announcement).await;
                true
            }
            None => false,
        }
    }

    pub async fn announce_restart(&mut self, eta: &str) {
        let announcement = self.engine.announce_restart(eta);
        self.publish(announcement).await;
    }

    pub async fn announce_status(&mut self, text: &str) {
        let announcement = self.engine.announce_status(text);
        self.publish(announcement).await;
    }

    // Publish failures are logged and swallowed: a failed announcement
    // must never take down the monitoring loop or command handling.
    async fn publish(&mut self, announcement: Announcement) {
        if let Err(e) = self.publisher.publish(&announcement.text).await {
            error!(kind = ?announcement.kind, error = %e, "failed to publish status announcement");
        }
    }
}
