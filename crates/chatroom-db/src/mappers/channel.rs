//! Channel entity <-> model mapper

use chatroom_core::entities::Channel;
use chatroom_core::error::DomainError;
use chatroom_core::value_objects::{ChannelId, GroupId};

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: ChannelId::new(model.id),
            group_id: GroupId::new(model.group_id),
            name: model.name,
            description: model.description,
            // The column has a non-negative CHECK
            slowmode_seconds: u32::try_from(model.slowmode_seconds).unwrap_or(0),
            created_at: model.created_at,
        }
    }
}

/// Convert a slowmode interval to the INTEGER column type
pub fn slowmode_to_db(seconds: u32) -> Result<i32, DomainError> {
    i32::try_from(seconds)
        .map_err(|_| DomainError::ValidationError(format!("slowmode {seconds} is out of range")))
}
