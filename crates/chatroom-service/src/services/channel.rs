//! Channel service
//!
//! Handles groups, channels, the active-channel pointer, and slowmode.

use chatroom_core::entities::{Channel, Group, NewChannel, NewGroup, User};
use chatroom_core::{ChannelId, DomainError, GroupId, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{ChannelResponse, CreateChannelRequest, CreateGroupRequest, GroupResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input::{optional_text, required_text};

/// Name of the channel created with every new group
const DEFAULT_CHANNEL_NAME: &str = "general";

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get channel by ID
    #[instrument(skip(self))]
    pub async fn get_channel(&self, channel_id: ChannelId) -> ServiceResult<ChannelResponse> {
        self.find_channel(channel_id).await.map(ChannelResponse::from)
    }

    /// Channel the user currently posts to
    pub async fn active_channel(&self, user: &User) -> ServiceResult<Channel> {
        self.find_channel(user.current_channel(self.ctx.default_channel()))
            .await
    }

    /// Point the user's active channel at another existing channel
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn swap_channel(&self, user: &User, channel_id: ChannelId) -> ServiceResult<Channel> {
        let channel = self.find_channel(channel_id).await?;
        self.ctx
            .user_repo()
            .set_active_channel(user.id, channel.id)
            .await?;

        info!(channel_id = %channel.id, "Active channel swapped");
        Ok(channel)
    }

    /// Set the slowmode of the user's active channel. Group owners only.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn set_slowmode(&self, user: &User, seconds: u32) -> ServiceResult<Channel> {
        let max = self.ctx.chat().max_slowmode_seconds;
        if seconds > max {
            return Err(DomainError::InvalidSlowmode { max }.into());
        }

        let mut channel = self.active_channel(user).await?;
        let group = self.find_group(channel.group_id).await?;
        if !group.is_owned_by(user.id) {
            warn!(channel_id = %channel.id, "Slowmode change denied: not the group owner");
            return Err(DomainError::NotGroupOwner.into());
        }

        self.ctx
            .channel_repo()
            .set_slowmode(channel.id, seconds)
            .await?;
        channel.slowmode_seconds = seconds;

        info!(channel_id = %channel.id, seconds, "Slowmode updated");
        Ok(channel)
    }

    /// Create a group owned by the caller, with a default channel
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_group(
        &self,
        owner_id: UserId,
        request: CreateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let group = self
            .ctx
            .group_repo()
            .create(&NewGroup {
                name: required_text("Group name", &request.name)?,
                description: optional_text(request.description.as_deref()),
                owner_id: Some(owner_id),
            })
            .await?;

        let general = self
            .ctx
            .channel_repo()
            .create(&NewChannel {
                group_id: group.id,
                name: DEFAULT_CHANNEL_NAME.to_string(),
                description: None,
            })
            .await?;

        info!(group_id = %group.id, channel_id = %general.id, "Group created");
        Ok(GroupResponse::from_group(group, &[general]))
    }

    /// Get a group with its channels
    #[instrument(skip(self))]
    pub async fn get_group(&self, group_id: GroupId) -> ServiceResult<GroupResponse> {
        let group = self.find_group(group_id).await?;
        let channels = self.ctx.channel_repo().find_by_group(group_id).await?;
        Ok(GroupResponse::from_group(group, &channels))
    }

    /// List the channels of a group
    #[instrument(skip(self))]
    pub async fn list_channels(&self, group_id: GroupId) -> ServiceResult<Vec<ChannelResponse>> {
        self.find_group(group_id).await?;
        let channels = self.ctx.channel_repo().find_by_group(group_id).await?;
        Ok(channels.iter().map(ChannelResponse::from).collect())
    }

    /// Add a channel to a group. Group owners only.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_channel(
        &self,
        user_id: UserId,
        group_id: GroupId,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let group = self.find_group(group_id).await?;
        if !group.is_owned_by(user_id) {
            warn!(user_id = %user_id, "Channel creation denied: not the group owner");
            return Err(DomainError::NotGroupOwner.into());
        }

        let channel = self
            .ctx
            .channel_repo()
            .create(&NewChannel {
                group_id,
                name: required_text("Channel name", &request.name)?,
                description: optional_text(request.description.as_deref()),
            })
            .await?;

        info!(channel_id = %channel.id, "Channel created");
        Ok(ChannelResponse::from(channel))
    }

    pub(crate) async fn find_channel(&self, channel_id: ChannelId) -> ServiceResult<Channel> {
        self.ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(channel_id).into())
    }

    pub(crate) async fn find_group(&self, group_id: GroupId) -> ServiceResult<Group> {
        self.ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| DomainError::GroupNotFound(group_id).into())
    }
}
