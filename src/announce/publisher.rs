//! Single-slot announcement publisher

use crate::chat::{ChannelId, ChatApi, ChatError, MessageId};
use std::sync::Arc;
use tracing::{info, warn};

/// Publishes announcements to the status channel with a delete-then-send
/// discipline: at most one channel message represents the current
/// status at any time.
pub struct StatusPublisher {
    chat: Arc<dyn ChatApi>,
    channel: ChannelId,
    slot: Option<MessageId>,
}

impl StatusPublisher {
    pub fn new(chat: Arc<dyn ChatApi>, channel: ChannelId) -> Self {
        Self {
            chat,
            channel,
            slot: None,
        }
    }

    /// Replace the current announcement with `text`.
    ///
    /// A failure to delete the previous message (already deleted,
    /// missing permissions) is logged and swallowed; the send still
    /// proceeds. A send failure leaves the slot unchanged and is
    /// returned to the caller. No retries either way.
    pub async fn publish(&mut self, text: &str) -> Result<(), ChatError> {
        if let Some(previous) = &self.slot {
            if let Err(e) = self.chat.delete_message(&self.channel, previous).await {
                warn!(message = %previous, error = %e, "could not delete previous status message");
            }
        }

        let id = self.chat.send_message(&self.channel, text).await?;
        info!(message = %id, channel = %self.channel, "status update sent");
        self.slot = Some(id);
        Ok(())
    }

    /// Identifier of the currently displayed announcement, if any.
    pub fn current_slot(&self) -> Option<&MessageId> {
        self.slot.as_ref()
    }
}

#[cfg(test)]
#[path = "publisher_test.rs"]
mod tests;
