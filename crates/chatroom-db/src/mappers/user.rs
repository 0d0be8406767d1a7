//! User entity <-> model mapper

use chatroom_core::entities::{NewUser, ProfileUpdate, User};
use chatroom_core::value_objects::{ChannelId, UserId};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            display_name: model.display_name,
            email: model.email,
            bio: model.bio,
            profile_image: model.profile_image,
            active_channel_id: model.active_channel_id.map(ChannelId::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values bound when inserting a user
pub struct UserInsert<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser, password_hash: &'a str) -> Self {
        Self {
            username: &user.username,
            email: &user.email,
            password_hash,
        }
    }
}

/// Values bound when overwriting a profile
pub struct ProfileColumns<'a> {
    pub username: &'a str,
    pub display_name: Option<&'a str>,
    pub email: &'a str,
    pub bio: Option<&'a str>,
    pub profile_image: Option<&'a str>,
}

impl<'a> From<&'a ProfileUpdate> for ProfileColumns<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        Self {
            username: &update.username,
            display_name: update.display_name.as_deref(),
            email: &update.email,
            bio: update.bio.as_deref(),
            profile_image: update.profile_image.as_deref(),
        }
    }
}
