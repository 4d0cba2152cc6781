pub mod announce;
pub mod chat;
pub mod commands;
pub mod config;
pub mod monitor;
pub mod server;

// Re-exports for main.rs and integration tests
pub use crate::config::Config;
pub use crate::monitor::{
    HealthProber, MonitorScheduler, ProbeResult, ServerBelief, StatusMonitor, TransitionEngine,
};
