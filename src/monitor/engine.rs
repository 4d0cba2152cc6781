//! Status transition engine
//!
//! Turns a stream of noisy probe results into debounced announcement
//! events, and folds operator overrides (maintenance mode, restart and
//! manual status notices) into the same stream. Pure state machine: no
//! I/O, every operation returns the announcement to publish, if any.

use super::probe::ProbeResult;
use crate::announce::Announcement;

/// The engine's current best guess of server reachability.
///
/// `Unknown` only exists before the first probe resolves and is never
/// re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerBelief {
    Unknown,
    Online,
    Offline,
}

#[derive(Debug)]
pub struct TransitionEngine {
    belief: ServerBelief,
    failure_streak: u32,
    maintenance: bool,
    offline_threshold: u32,
}

impl TransitionEngine {
    /// `offline_threshold` is the number of consecutive failed probes
    /// required before the server is declared offline.
    pub fn new(offline_threshold: u32) -> Self {
        Self {
            belief: ServerBelief::Unknown,
            failure_streak: 0,
            maintenance: false,
            offline_threshold,
        }
    }

    pub fn belief(&self) -> ServerBelief {
        self.belief
    }

    pub fn failure_streak(&self) -> u32 {
        self.failure_streak
    }

    pub fn maintenance_active(&self) -> bool {
        self.maintenance
    }

    /// Evaluate one probe result.
    ///
    /// A successful probe resets the failure streak and announces
    /// recovery only when the server was believed offline. A failed
    /// probe is debounced: the offline announcement fires once, when
    /// the streak first reaches the threshold.
    pub fn observe_probe(&mut self, result: ProbeResult) -> Option<Announcement> {
        // The scheduler skips probes during maintenance; guard anyway
        // in case an in-flight probe lands after the toggle.
        if self.maintenance {
            return None;
        }

        match result {
            ProbeResult::Reachable => {
                self.failure_streak = 0;
                let was_offline = self.belief == ServerBelief::Offline;
                self.belief = ServerBelief::Online;
                was_offline.then(Announcement::back_online)
            }
            ProbeResult::Unreachable => {
                if self.belief == ServerBelief::Offline {
                    return None;
                }
                self.failure_streak += 1;
                if self.failure_streak >= self.offline_threshold {
                    self.belief = ServerBelief::Offline;
                    Some(Announcement::offline())
                } else {
                    None
                }
            }
        }
    }

    /// Toggle maintenance mode.
    ///
    /// Announces only actual edges; a redundant toggle is silent.
    /// Belief and failure streak are left untouched, so the first
    /// post-maintenance probe is evaluated as a normal transition from
    /// whatever belief predates the window.
    pub fn set_maintenance(&mut self, on: bool) -> Option<Announcement> {
        if self.maintenance == on {
            return None;
        }
        self.maintenance = on;
        Some(if on {
            Announcement::maintenance_start()
        } else {
            Announcement::maintenance_end()
        })
    }

    /// Render a restart notice. No state mutation.
    pub fn announce_restart(&self, eta: &str) -> Announcement {
        Announcement::restart(eta)
    }

    /// Render a manual status notice. No state mutation.
    pub fn announce_status(&self, text: &str) -> Announcement {
        Announcement::manual_status(text)
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
