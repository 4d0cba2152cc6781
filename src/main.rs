use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};
use vahti::announce::StatusPublisher;
use vahti::chat::discord::DiscordRest;
use vahti::chat::ChatApi;
use vahti::commands;
use vahti::config::Config;
use vahti::monitor::{HealthProber, MonitorScheduler, StatusMonitor, TransitionEngine};
use vahti::server::{run_health_server, MonitorStatus};

/// Cadence for polling the command channel
const COMMAND_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting VAHTI server status monitor");

    let config = Config::from_env()?;

    // Start health server in background
    let status = MonitorStatus::new();
    let health_status = status.clone();
    let health_port = config.health_port;
    tokio::spawn(async move {
        if let Err(e) = run_health_server(health_port, health_status).await {
            warn!(error = %e, "Health server failed");
        }
    });
    info!(port = health_port, "Health server task spawned");

    // Chat transport, announcement publisher and the monitor itself
    let chat: Arc<dyn ChatApi> = Arc::new(DiscordRest::new(
        config.discord_token.clone(),
        config.admin_ids.clone(),
    )?);
    let publisher = StatusPublisher::new(chat.clone(), config.status_channel.clone());
    let monitor = Arc::new(Mutex::new(StatusMonitor::new(
        TransitionEngine::new(config.offline_threshold),
        publisher,
    )));

    // Probe loop
    let prober = HealthProber::new(config.probe_timeout)?;
    let mut scheduler = MonitorScheduler::new(status.clone());
    scheduler.start(
        prober,
        config.probe_url(),
        monitor.clone(),
        config.check_interval,
    );

    // Operator command loop
    let command_chat = chat.clone();
    let command_monitor = monitor.clone();
    let command_channel = config.command_channel.clone();
    let command_prefix = config.command_prefix.clone();
    tokio::spawn(async move {
        commands::run_command_loop(
            command_chat,
            command_monitor,
            command_channel,
            command_prefix,
            COMMAND_POLL_INTERVAL,
        )
        .await;
    });
    info!(channel = %config.command_channel, "Command loop task spawned");

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    scheduler.stop();

    Ok(())
}
