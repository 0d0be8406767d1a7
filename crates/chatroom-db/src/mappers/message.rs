//! Message entity <-> model mapper
//!
//! The tagged [`Recipient`] is stored as two nullable foreign-key columns.

use chatroom_core::entities::{Message, Recipient};
use chatroom_core::error::DomainError;
use chatroom_core::value_objects::{ChannelId, MessageId, UserId};

use crate::models::MessageModel;

/// `(recipient_user_id, recipient_channel_id)` column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientColumns {
    pub user_id: Option<i64>,
    pub channel_id: Option<i64>,
}

impl From<Recipient> for RecipientColumns {
    fn from(recipient: Recipient) -> Self {
        Self {
            user_id: recipient.user_id().map(UserId::into_inner),
            channel_id: recipient.channel_id().map(ChannelId::into_inner),
        }
    }
}

impl RecipientColumns {
    /// Rebuild the tagged recipient from a row
    pub fn into_recipient(self) -> Result<Recipient, DomainError> {
        match (self.user_id, self.channel_id) {
            (Some(user), None) => Ok(Recipient::User(UserId::new(user))),
            (None, Some(channel)) => Ok(Recipient::Channel(ChannelId::new(channel))),
            _ => Err(DomainError::DatabaseError(
                "message row must have exactly one recipient".to_string(),
            )),
        }
    }
}

impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let recipient = RecipientColumns {
            user_id: model.recipient_user_id,
            channel_id: model.recipient_channel_id,
        }
        .into_recipient()?;

        Ok(Message {
            id: MessageId::new(model.id),
            sender_id: UserId::new(model.sender_id),
            recipient,
            content: model.content,
            silent: model.silent,
            created_at: model.created_at,
        })
    }
}
