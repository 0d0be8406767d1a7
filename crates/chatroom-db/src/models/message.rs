//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the messages table.
///
/// Exactly one of the two recipient columns is set (enforced by a CHECK constraint).
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_user_id: Option<i64>,
    pub recipient_channel_id: Option<i64>,
    pub content: String,
    pub silent: bool,
    pub created_at: DateTime<Utc>,
}
