//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chatroom_core::entities::{Channel, Group, Message, User};

use super::responses::{AccountResponse, ChannelResponse, GroupResponse, MessageResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for AccountResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            profile_image: user.profile_image.clone(),
            active_channel_id: user.active_channel_id,
            created_at: user.created_at,
        }
    }
}

impl From<User> for AccountResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Channel / Group Mappers
// ============================================================================

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id,
            group_id: channel.group_id,
            name: channel.name.clone(),
            description: channel.description.clone(),
            slowmode_seconds: channel.slowmode_seconds,
            created_at: channel.created_at,
        }
    }
}

impl From<Channel> for ChannelResponse {
    fn from(channel: Channel) -> Self {
        Self::from(&channel)
    }
}

impl GroupResponse {
    /// Build a group response together with its channels
    pub fn from_group(group: Group, channels: &[Channel]) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            owner_id: group.owner_id,
            created_at: group.created_at,
            channels: channels.iter().map(ChannelResponse::from).collect(),
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            recipient: message.recipient,
            content: message.content,
            silent: message.silent,
            created_at: message.created_at,
        }
    }
}
