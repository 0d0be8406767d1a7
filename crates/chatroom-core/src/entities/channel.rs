//! Channel entity - a text channel inside a group

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::{ChannelId, GroupId};

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub group_id: GroupId,
    pub name: String,
    pub description: Option<String>,
    /// Minimum seconds between two posts of the same user; 0 disables slowmode
    pub slowmode_seconds: u32,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Check if slowmode is enabled
    #[inline]
    pub fn has_slowmode(&self) -> bool {
        self.slowmode_seconds > 0
    }

    /// Slowmode interval, if enabled
    pub fn slowmode(&self) -> Option<Duration> {
        self.has_slowmode()
            .then(|| Duration::seconds(i64::from(self.slowmode_seconds)))
    }

    /// Time a user still has to wait before posting again, given their last post.
    ///
    /// Returns `None` when the user may post now.
    pub fn remaining_cooldown(
        &self,
        last_post_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Option<Duration> {
        let ready_at = last_post_at + self.slowmode()?;
        (ready_at > now).then(|| ready_at - now)
    }
}

/// Fields required to create a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChannel {
    pub group_id: GroupId,
    pub name: String,
    pub description: Option<String>,
}
