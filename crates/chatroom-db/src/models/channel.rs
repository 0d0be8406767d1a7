//! Channel database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the channels table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub slowmode_seconds: i32,
    pub created_at: DateTime<Utc>,
}
