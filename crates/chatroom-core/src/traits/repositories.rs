//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Channel, Group, Message, NewChannel, NewGroup, NewMessage, NewUser, ProfileUpdate, User,
};
use crate::error::DomainError;
use crate::value_objects::{ChannelId, GroupId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user.
    ///
    /// Fails with [`DomainError::AccountAlreadyExists`] when the username or
    /// email is taken.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Overwrite the editable profile fields.
    ///
    /// Fails with [`DomainError::AccountAlreadyExists`] when the new username
    /// or email belongs to another user.
    async fn update_profile(&self, id: UserId, update: &ProfileUpdate) -> RepoResult<User>;

    /// Change the channel the user posts to
    async fn set_active_channel(&self, id: UserId, channel_id: ChannelId) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find group by ID
    async fn find_by_id(&self, id: GroupId) -> RepoResult<Option<Group>>;

    /// Create a new group
    async fn create(&self, group: &NewGroup) -> RepoResult<Group>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by ID
    async fn find_by_id(&self, id: ChannelId) -> RepoResult<Option<Channel>>;

    /// List all channels in a group
    async fn find_by_group(&self, group_id: GroupId) -> RepoResult<Vec<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &NewChannel) -> RepoResult<Channel>;

    /// Set the channel's slowmode; 0 disables it
    async fn set_slowmode(&self, id: ChannelId, seconds: u32) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;

    /// Most recent channel messages visible to `viewer`, newest first.
    ///
    /// Silent messages are included only when `viewer` sent them.
    async fn find_channel_messages(
        &self,
        channel_id: ChannelId,
        viewer: UserId,
        limit: i64,
    ) -> RepoResult<Vec<Message>>;

    /// Most recent whispers sent to or by `user_id`, newest first
    async fn find_whispers(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>>;

    /// Time of the user's latest post to a channel, silent posts included
    async fn last_channel_post_at(
        &self,
        sender_id: UserId,
        channel_id: ChannelId,
    ) -> RepoResult<Option<DateTime<Utc>>>;
}
