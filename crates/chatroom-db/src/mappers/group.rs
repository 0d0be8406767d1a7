//! Group entity <-> model mapper

use chatroom_core::entities::Group;
use chatroom_core::value_objects::{GroupId, UserId};

use crate::models::GroupModel;

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group {
            id: GroupId::new(model.id),
            name: model.name,
            description: model.description,
            owner_id: model.owner_id.map(UserId::new),
            created_at: model.created_at,
        }
    }
}
