//! Discord REST adapter for [`ChatApi`]
//!
//! Talks plain HTTPS to the Discord API (v10): message send/delete,
//! replies via message references, and inbound command polling. No
//! gateway connection is held; commands are polled from the configured
//! command channel.

use super::{ChannelId, ChatApi, ChatError, InboundMessage, MessageId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Timeout for any single REST call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Page size for command polling.
const POLL_LIMIT: u8 = 50;

pub struct DiscordRest {
    http: reqwest::Client,
    token: String,
    admin_ids: HashSet<String>,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct DiscordUser {
    id: String,
    #[serde(default)]
    bot: bool,
}

#[derive(Debug, Deserialize)]
struct DiscordMessage {
    id: String,
    #[serde(default)]
    content: String,
    author: DiscordUser,
}

impl DiscordRest {
    /// Create an adapter against the public Discord API.
    ///
    /// `admin_ids` is the allowlist of administrator-capable user ids;
    /// inbound messages from these authors are marked
    /// [`InboundMessage::author_is_admin`].
    pub fn new(token: String, admin_ids: HashSet<String>) -> Result<Self, ChatError> {
        Self::with_api_base(token, admin_ids, DISCORD_API_BASE.to_string())
    }

    /// Point the adapter at a different API base URL. Used by tests to
    /// run against a local server.
    pub fn with_api_base(
        token: String,
        admin_ids: HashSet<String>,
        api_base: String,
    ) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            token,
            admin_ids,
            api_base,
        })
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }

    fn messages_url(&self, channel: &ChannelId) -> String {
        format!("{}/channels/{}/messages", self.api_base, channel)
    }

    async fn post_message(
        &self,
        channel: &ChannelId,
        body: serde_json::Value,
    ) -> Result<MessageId, ChatError> {
        let response = self
            .http
            .post(self.messages_url(channel))
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ChatError::UnknownChannel(channel.to_string()));
        }
        if !status.is_success() {
            return Err(ChatError::Api {
                status: status.as_u16(),
            });
        }

        let message: DiscordMessage = response.json().await?;
        Ok(MessageId(message.id))
    }
}

#[async_trait]
impl ChatApi for DiscordRest {
    async fn send_message(
        &self,
        channel: &ChannelId,
        content: &str,
    ) -> Result<MessageId, ChatError> {
        self.post_message(
            channel,
            json!({
                "content": content,
                "allowed_mentions": { "parse": [] },
            }),
        )
        .await
    }

    async fn delete_message(
        &self,
        channel: &ChannelId,
        message: &MessageId,
    ) -> Result<(), ChatError> {
        let url = format!("{}/{}", self.messages_url(channel), message);
        let response = self
            .http
            .delete(url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Api {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn reply(&self, to: &InboundMessage, content: &str) -> Result<(), ChatError> {
        self.post_message(
            &to.channel,
            json!({
                "content": content,
                "allowed_mentions": { "parse": [] },
                "message_reference": { "message_id": to.id.0 },
            }),
        )
        .await
        .map(|_| ())
    }

    async fn poll_messages(
        &self,
        channel: &ChannelId,
        after: Option<&MessageId>,
    ) -> Result<Vec<InboundMessage>, ChatError> {
        let mut request = self
            .http
            .get(self.messages_url(channel))
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .query(&[("limit", POLL_LIMIT.to_string())]);
        if let Some(after) = after {
            request = request.query(&[("after", after.0.clone())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ChatError::UnknownChannel(channel.to_string()));
        }
        if !status.is_success() {
            return Err(ChatError::Api {
                status: status.as_u16(),
            });
        }

        // Discord returns newest first
        let mut messages: Vec<DiscordMessage> = response.json().await?;
        messages.reverse();

        Ok(messages
            .into_iter()
            .map(|m| {
                let author_is_admin = self.admin_ids.contains(&m.author.id);
                InboundMessage {
                    id: MessageId(m.id),
                    channel: channel.clone(),
                    author_is_admin,
                    author_is_bot: m.author.bot,
                    author_id: m.author.id,
                    content: m.content,
                }
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "discord_test.rs"]
mod tests;
