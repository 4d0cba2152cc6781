//! Operator command parsing and dispatch
//!
//! Recognized commands (default prefix `!`):
//! - `maintenance on|off` — admin only, toggles maintenance mode
//! - `restart [eta]` — admin only, announces a restart notice
//! - `status [text]` — anyone, announces a manual status update

use crate::chat::{ChannelId, ChatApi, InboundMessage, MessageId};
use crate::monitor::StatusMonitor;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const DEFAULT_RESTART_ETA: &str = "a short while";
pub const DEFAULT_STATUS_TEXT: &str = "Server status update";

const DENIAL_REPLY: &str = "You do not have permission to use this command.";

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` means the argument was missing or unrecognized and the
    /// usage text should be sent.
    Maintenance(Option<bool>),
    Restart(String),
    Status(String),
}

/// Parse `content` as a prefixed command.
///
/// Returns `None` for anything that is not a command: no prefix, empty
/// after the prefix, or an unknown command name (ignored silently).
pub fn parse_command(content: &str, prefix: &str) -> Option<Command> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.trim().split_whitespace();
    let name = tokens.next()?.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    match name.as_str() {
        "maintenance" => {
            let action = match args.first().map(|a| a.to_lowercase()).as_deref() {
                Some("on") => Some(true),
                Some("off") => Some(false),
                _ => None,
            };
            Some(Command::Maintenance(action))
        }
        "restart" => {
            let eta = if args.is_empty() {
                DEFAULT_RESTART_ETA.to_string()
            } else {
                args.join(" ")
            };
            Some(Command::Restart(eta))
        }
        "status" => {
            let text = if args.is_empty() {
                DEFAULT_STATUS_TEXT.to_string()
            } else {
                args.join(" ")
            };
            Some(Command::Status(text))
        }
        _ => None,
    }
}

fn requires_admin(command: &Command) -> bool {
    !matches!(command, Command::Status(_))
}

/// Handle one inbound chat message.
///
/// Bot authors and non-command messages are ignored. Admin-gated
/// commands from unauthorized principals get the denial reply and
/// mutate nothing. Every executed command gets a confirmation reply,
/// separate from the channel announcement.
pub async fn handle_message(
    chat: &dyn ChatApi,
    monitor: &Mutex<StatusMonitor>,
    message: &InboundMessage,
    prefix: &str,
) {
    if message.author_is_bot {
        return;
    }
    let Some(command) = parse_command(&message.content, prefix) else {
        return;
    };

    if requires_admin(&command) && !message.author_is_admin {
        send_reply(chat, message, DENIAL_REPLY).await;
        return;
    }

    match command {
        Command::Maintenance(Some(on)) => {
            monitor.lock().await.set_maintenance(on).await;
            info!(author = %message.author_id, on, "maintenance toggled by operator");
            let confirmation = if on {
                "Maintenance mode activated."
            } else {
                "Maintenance mode deactivated."
            };
            send_reply(chat, message, confirmation).await;
        }
        Command::Maintenance(None) => {
            let usage = format!("Usage: `{}maintenance on|off`", prefix);
            send_reply(chat, message, &usage).await;
        }
        Command::Restart(eta) => {
            monitor.lock().await.announce_restart(&eta).await;
            info!(author = %message.author_id, eta = %eta, "restart announced by operator");
            send_reply(chat, message, "Restart announced.").await;
        }
        Command::Status(text) => {
            monitor.lock().await.announce_status(&text).await;
            send_reply(chat, message, "Status updated.").await;
        }
    }
}

async fn send_reply(chat: &dyn ChatApi, to: &InboundMessage, content: &str) {
    if let Err(e) = chat.reply(to, content).await {
        warn!(error = %e, "could not reply to command");
    }
}

/// Poll the command channel and dispatch operator commands forever.
///
/// The first successful poll only records the newest message id, so
/// commands sent while the monitor was down are never replayed. Poll
/// failures are logged and the loop keeps going.
pub async fn run_command_loop(
    chat: Arc<dyn ChatApi>,
    monitor: Arc<Mutex<StatusMonitor>>,
    channel: ChannelId,
    prefix: String,
    poll_interval: Duration,
) {
    let mut last_seen: Option<MessageId> = None;
    let mut primed = false;

    loop {
        tokio::time::sleep(poll_interval).await;

        let batch = match chat.poll_messages(&channel, last_seen.as_ref()).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(error = %e, "command poll failed");
                continue;
            }
        };

        if let Some(newest) = batch.last() {
            last_seen = Some(newest.id.clone());
        }
        if !primed {
            primed = true;
            continue;
        }

        for message in &batch {
            handle_message(chat.as_ref(), &monitor, message, &prefix).await;
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;
