//! User entity - represents a chat account

use chrono::{DateTime, Utc};

use crate::value_objects::{ChannelId, UserId};

/// User entity. The password hash never leaves the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub display_name: Option<String>,
    pub email: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub active_channel_id: Option<ChannelId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Name shown next to messages: the display name when set, else the username
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// Channel the user currently posts to
    #[inline]
    pub fn current_channel(&self, default: ChannelId) -> ChannelId {
        self.active_channel_id.unwrap_or(default)
    }

    /// Overwrite every mutable profile field
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        self.username = update.username;
        self.display_name = update.display_name;
        self.email = update.email;
        self.bio = update.bio;
        self.profile_image = update.profile_image;
        self.updated_at = Utc::now();
    }
}

/// Fields required to register a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Full-row overwrite of the editable account fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub username: String,
    pub display_name: Option<String>,
    pub email: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}
