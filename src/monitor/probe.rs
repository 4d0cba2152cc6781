//! Single bounded-duration health check against the game server

use std::time::Duration;
use tracing::debug;

/// Outcome of one health check.
///
/// Timeouts, transport errors and non-success HTTP statuses all
/// collapse into `Unreachable`; retry policy lives in the scheduler,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    Reachable,
    Unreachable,
}

pub struct HealthProber {
    http: reqwest::Client,
}

impl HealthProber {
    /// Build a prober whose requests never block past `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Issue one GET against the server's status endpoint.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => ProbeResult::Reachable,
            Ok(response) => {
                debug!(status = %response.status(), "probe returned non-success status");
                ProbeResult::Unreachable
            }
            Err(e) => {
                debug!(error = %e, "probe request failed");
                ProbeResult::Unreachable
            }
        }
    }
}

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;
