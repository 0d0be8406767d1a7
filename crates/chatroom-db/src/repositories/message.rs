//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use chatroom_core::entities::{Message, NewMessage, Recipient};
use chatroom_core::error::DomainError;
use chatroom_core::traits::{MessageRepository, RepoResult};
use chatroom_core::value_objects::{ChannelId, UserId};

use crate::mappers::RecipientColumns;
use crate::models::MessageModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_messages(rows: Vec<MessageModel>) -> RepoResult<Vec<Message>> {
    rows.into_iter().map(Message::try_from).collect()
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message), fields(sender = %message.sender_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let cols = RecipientColumns::from(message.recipient);

        let model = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages
                (sender_id, recipient_user_id, recipient_channel_id, content, silent, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, sender_id, recipient_user_id, recipient_channel_id, content, silent, created_at
            ",
        )
        .bind(message.sender_id.into_inner())
        .bind(cols.user_id)
        .bind(cols.channel_id)
        .bind(&message.content)
        .bind(message.silent)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || match message.recipient {
                Recipient::Channel(id) => DomainError::ChannelNotFound(id),
                Recipient::User(id) => DomainError::UserNotFound(id),
            })
        })?;

        Message::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_channel_messages(
        &self,
        channel_id: ChannelId,
        viewer: UserId,
        limit: i64,
    ) -> RepoResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, sender_id, recipient_user_id, recipient_channel_id, content, silent, created_at
            FROM messages
            WHERE recipient_channel_id = $1
              AND (silent = FALSE OR sender_id = $2)
            ORDER BY id DESC
            LIMIT $3
            ",
        )
        .bind(channel_id.into_inner())
        .bind(viewer.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_messages(rows)
    }

    #[instrument(skip(self))]
    async fn find_whispers(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, sender_id, recipient_user_id, recipient_channel_id, content, silent, created_at
            FROM messages
            WHERE recipient_user_id = $1
               OR (sender_id = $1 AND recipient_user_id IS NOT NULL)
            ORDER BY id DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_messages(rows)
    }

    #[instrument(skip(self))]
    async fn last_channel_post_at(
        &self,
        sender_id: UserId,
        channel_id: ChannelId,
    ) -> RepoResult<Option<DateTime<Utc>>> {
        sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            r"
            SELECT MAX(created_at)
            FROM messages
            WHERE sender_id = $1 AND recipient_channel_id = $2
            ",
        )
        .bind(sender_id.into_inner())
        .bind(channel_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
