//! PostgreSQL implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chatroom_core::entities::{Channel, NewChannel};
use chatroom_core::error::DomainError;
use chatroom_core::traits::{ChannelRepository, RepoResult};
use chatroom_core::value_objects::{ChannelId, GroupId};

use crate::mappers::slowmode_to_db;
use crate::models::ChannelModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ChannelRepository
#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    /// Create a new PgChannelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ChannelId) -> RepoResult<Option<Channel>> {
        let result = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, group_id, name, description, slowmode_seconds, created_at
            FROM channels
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Channel::from))
    }

    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: GroupId) -> RepoResult<Vec<Channel>> {
        let rows = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, group_id, name, description, slowmode_seconds, created_at
            FROM channels
            WHERE group_id = $1
            ORDER BY id
            ",
        )
        .bind(group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, channel: &NewChannel) -> RepoResult<Channel> {
        let model = sqlx::query_as::<_, ChannelModel>(
            r"
            INSERT INTO channels (group_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, group_id, name, description, slowmode_seconds, created_at
            ",
        )
        .bind(channel.group_id.into_inner())
        .bind(&channel.name)
        .bind(&channel.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::GroupNotFound(channel.group_id)))?;

        Ok(Channel::from(model))
    }

    #[instrument(skip(self))]
    async fn set_slowmode(&self, id: ChannelId, seconds: u32) -> RepoResult<()> {
        let result = sqlx::query("UPDATE channels SET slowmode_seconds = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(slowmode_to_db(seconds)?)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ChannelNotFound(id));
        }

        Ok(())
    }
}
