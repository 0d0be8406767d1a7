//! Group entity - a container for channels

use chrono::{DateTime, Utc};

use crate::value_objects::{GroupId, UserId};

/// Group entity. The owner moderates every channel in the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Check if the user owns this group
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == Some(user_id)
    }
}

/// Fields required to create a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Option<UserId>,
}
