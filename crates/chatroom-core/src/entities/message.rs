//! Message entity - a channel post or a whisper

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ChannelId, MessageId, UserId};

/// Who a message is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Recipient {
    /// Private message to a single user
    User(UserId),
    /// Post to a channel
    Channel(ChannelId),
}

impl Recipient {
    /// Channel id for channel posts
    #[inline]
    pub fn channel_id(self) -> Option<ChannelId> {
        match self {
            Self::Channel(id) => Some(id),
            Self::User(_) => None,
        }
    }

    /// User id for whispers
    #[inline]
    pub fn user_id(self) -> Option<UserId> {
        match self {
            Self::User(id) => Some(id),
            Self::Channel(_) => None,
        }
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub recipient: Recipient,
    pub content: String,
    /// Silent posts are only shown to their sender
    pub silent: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Check if this is a whisper
    #[inline]
    pub fn is_whisper(&self) -> bool {
        matches!(self.recipient, Recipient::User(_))
    }

    /// Whether `viewer` may see this message
    pub fn is_visible_to(&self, viewer: UserId) -> bool {
        if self.sender_id == viewer {
            return true;
        }
        match self.recipient {
            Recipient::User(target) => target == viewer,
            Recipient::Channel(_) => !self.silent,
        }
    }
}

/// A message about to be appended to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub sender_id: UserId,
    pub recipient: Recipient,
    pub content: String,
    pub silent: bool,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Regular post to a channel
    pub fn channel_post(sender_id: UserId, channel_id: ChannelId, content: String) -> Self {
        Self {
            sender_id,
            recipient: Recipient::Channel(channel_id),
            content,
            silent: false,
            created_at: Utc::now(),
        }
    }

    /// Post to a channel that is hidden from other users
    pub fn silent_post(sender_id: UserId, channel_id: ChannelId, content: String) -> Self {
        Self {
            silent: true,
            ..Self::channel_post(sender_id, channel_id, content)
        }
    }

    /// Private message to one user
    pub fn whisper(sender_id: UserId, target_id: UserId, content: String) -> Self {
        Self {
            sender_id,
            recipient: Recipient::User(target_id),
            content,
            silent: false,
            created_at: Utc::now(),
        }
    }

    /// Attach the id assigned by the store
    pub fn into_message(self, id: MessageId) -> Message {
        Message {
            id,
            sender_id: self.sender_id,
            recipient: self.recipient,
            content: self.content,
            silent: self.silent,
            created_at: self.created_at,
        }
    }
}
