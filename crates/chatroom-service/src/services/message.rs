//! Message service
//!
//! Handles channel posts, silent posts, whispers, slowmode, and the chat view.

use chatroom_core::entities::{Channel, Message, NewMessage, User};
use chatroom_core::{sanitize, DomainError, UserId};
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::dto::{ChannelResponse, ChatViewResponse, MessageResponse};

use super::channel::ChannelService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post to the sender's active channel.
    ///
    /// Silent posts are stored like any other post but only their sender sees them.
    #[instrument(skip(self, sender, content), fields(sender_id = %sender.id))]
    pub async fn post_to_channel(
        &self,
        sender: &User,
        content: &str,
        silent: bool,
    ) -> ServiceResult<(Channel, Message)> {
        let content = non_empty(content)?;
        let channel = ChannelService::new(self.ctx).active_channel(sender).await?;

        self.enforce_slowmode(sender.id, &channel).await?;

        let new_message = if silent {
            NewMessage::silent_post(sender.id, channel.id, content)
        } else {
            NewMessage::channel_post(sender.id, channel.id, content)
        };
        let message = self.ctx.message_repo().create(&new_message).await?;

        info!(message_id = %message.id, channel_id = %channel.id, silent, "Message posted");
        Ok((channel, message))
    }

    /// Send a private message to another user, addressed by username
    #[instrument(skip(self, sender, content), fields(sender_id = %sender.id))]
    pub async fn whisper(
        &self,
        sender: &User,
        target_username: &str,
        content: &str,
    ) -> ServiceResult<(User, Message)> {
        let target_username = sanitize(target_username);
        let target = self
            .ctx
            .user_repo()
            .find_by_username(&target_username)
            .await?
            .ok_or_else(|| DomainError::UsernameNotFound(target_username.clone()))?;

        if target.id == sender.id {
            return Err(DomainError::CannotWhisperSelf.into());
        }

        let content = non_empty(content)?;
        let message = self
            .ctx
            .message_repo()
            .create(&NewMessage::whisper(sender.id, target.id, content))
            .await?;

        info!(message_id = %message.id, target_id = %target.id, "Whisper sent");
        Ok((target, message))
    }

    /// Active channel history and whispers for one user
    #[instrument(skip(self, viewer), fields(user_id = %viewer.id))]
    pub async fn chat_view(&self, viewer: &User) -> ServiceResult<ChatViewResponse> {
        let limit = self.ctx.chat().history_limit;
        let channel = ChannelService::new(self.ctx).active_channel(viewer).await?;

        let mut messages = self
            .ctx
            .message_repo()
            .find_channel_messages(channel.id, viewer.id, limit)
            .await?;
        messages.retain(|m| m.is_visible_to(viewer.id));
        messages.reverse();

        let mut whispers = self.ctx.message_repo().find_whispers(viewer.id, limit).await?;
        whispers.retain(|m| m.is_visible_to(viewer.id));
        whispers.reverse();

        debug!(
            channel_id = %channel.id,
            messages = messages.len(),
            whispers = whispers.len(),
            "Chat view loaded"
        );

        Ok(ChatViewResponse {
            channel: ChannelResponse::from(channel),
            messages: messages.into_iter().map(MessageResponse::from).collect(),
            whispers: whispers.into_iter().map(MessageResponse::from).collect(),
        })
    }

    /// Reject a post made before the channel's slowmode interval has passed.
    ///
    /// The group owner is exempt.
    async fn enforce_slowmode(&self, sender_id: UserId, channel: &Channel) -> ServiceResult<()> {
        if !channel.has_slowmode() {
            return Ok(());
        }

        let group = ChannelService::new(self.ctx)
            .find_group(channel.group_id)
            .await?;
        if group.is_owned_by(sender_id) {
            return Ok(());
        }

        let Some(last_post) = self
            .ctx
            .message_repo()
            .last_channel_post_at(sender_id, channel.id)
            .await?
        else {
            return Ok(());
        };

        match channel.remaining_cooldown(last_post, Utc::now()) {
            Some(remaining) => {
                // Round up so the client never retries too early
                let remaining_seconds = (remaining.num_milliseconds() + 999) / 1000;
                warn!(channel_id = %channel.id, remaining_seconds, "Post rejected by slowmode");
                Err(DomainError::SlowmodeActive { remaining_seconds }.into())
            }
            None => Ok(()),
        }
    }
}

/// Sanitize message text, rejecting text with nothing left to send
fn non_empty(content: &str) -> ServiceResult<String> {
    let content = sanitize(content);
    if content.trim().is_empty() {
        return Err(DomainError::EmptyMessage.into());
    }
    Ok(content)
}
