//! Recording in-memory chat transport for tests

use super::{ChannelId, ChatApi, ChatError, InboundMessage, MessageId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// In-memory [`ChatApi`] that records every call and can be told to
/// fail sends or deletes.
#[derive(Default)]
pub struct RecordingChat {
    next_id: AtomicU64,
    pub fail_sends: AtomicBool,
    pub fail_deletes: AtomicBool,
    sent: Mutex<Vec<(ChannelId, String, MessageId)>>,
    deleted: Mutex<Vec<MessageId>>,
    replies: Mutex<Vec<String>>,
    inbound: Mutex<VecDeque<InboundMessage>>,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of every sent message, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text, _)| text.clone())
            .collect()
    }

    /// Ids of every sent message, in order.
    pub fn sent_ids(&self) -> Vec<MessageId> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, id)| id.clone())
            .collect()
    }

    pub fn deleted_ids(&self) -> Vec<MessageId> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    /// Queue a message for the next `poll_messages` call.
    pub fn queue_inbound(&self, message: InboundMessage) {
        self.inbound.lock().unwrap().push_back(message);
    }
}

#[async_trait]
impl ChatApi for RecordingChat {
    async fn send_message(
        &self,
        channel: &ChannelId,
        content: &str,
    ) -> Result<MessageId, ChatError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(ChatError::Api { status: 500 });
        }
        let id = MessageId(format!("m{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1));
        self.sent
            .lock()
            .unwrap()
            .push((channel.clone(), content.to_string(), id.clone()));
        Ok(id)
    }

    async fn delete_message(
        &self,
        _channel: &ChannelId,
        message: &MessageId,
    ) -> Result<(), ChatError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ChatError::Api { status: 404 });
        }
        self.deleted.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn reply(&self, _to: &InboundMessage, content: &str) -> Result<(), ChatError> {
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn poll_messages(
        &self,
        _channel: &ChannelId,
        _after: Option<&MessageId>,
    ) -> Result<Vec<InboundMessage>, ChatError> {
        Ok(self.inbound.lock().unwrap().drain(..).collect())
    }
}
