//! Chat transport boundary
//!
//! The monitor never talks to the chat platform directly. Everything
//! goes through the [`ChatApi`] trait so the transition engine, the
//! publisher and the command dispatcher can be exercised against an
//! in-memory transport in tests.

pub mod discord;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Opaque message identifier assigned by the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(pub String);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque channel identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(pub String);

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat API returned status {status}")]
    Api { status: u16 },

    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

/// An operator message received from the chat platform.
///
/// The permission check is delegated to the transport adapter, which
/// fills `author_is_admin` when it builds the message.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: MessageId,
    pub channel: ChannelId,
    pub author_id: String,
    pub author_is_bot: bool,
    pub author_is_admin: bool,
    pub content: String,
}

/// Minimal chat operations the monitor needs.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send a message to a channel and return its identifier.
    ///
    /// Implementations must disable mention parsing: a status
    /// announcement must never ping anyone, even if the text contains
    /// mention-like substrings.
    async fn send_message(
        &self,
        channel: &ChannelId,
        content: &str,
    ) -> Result<MessageId, ChatError>;

    /// Delete a previously sent message.
    async fn delete_message(
        &self,
        channel: &ChannelId,
        message: &MessageId,
    ) -> Result<(), ChatError>;

    /// Reply to the author of an inbound message in its channel.
    async fn reply(&self, to: &InboundMessage, content: &str) -> Result<(), ChatError>;

    /// Fetch messages newer than `after`, in chronological order.
    async fn poll_messages(
        &self,
        channel: &ChannelId,
        after: Option<&MessageId>,
    ) -> Result<Vec<InboundMessage>, ChatError>;
}
