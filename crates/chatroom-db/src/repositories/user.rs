//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chatroom_core::entities::{NewUser, ProfileUpdate, User};
use chatroom_core::error::DomainError;
use chatroom_core::traits::{RepoResult, UserRepository};
use chatroom_core::value_objects::{ChannelId, UserId};

use crate::mappers::{ProfileColumns, UserInsert};
use crate::models::UserModel;

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};

const USER_COLUMNS: &str = "id, username, display_name, email, bio, profile_image, \
                            active_channel_id, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let insert = UserInsert::new(user, password_hash);

        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(insert.username)
        .bind(insert.email)
        .bind(insert.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AccountAlreadyExists))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update_profile(&self, id: UserId, update: &ProfileUpdate) -> RepoResult<User> {
        let cols = ProfileColumns::from(update);

        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            UPDATE users
            SET username = $2, display_name = $3, email = $4, bio = $5,
                profile_image = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(cols.username)
        .bind(cols.display_name)
        .bind(cols.email)
        .bind(cols.bio)
        .bind(cols.profile_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AccountAlreadyExists))?;

        model.map(User::from).ok_or(DomainError::UserNotFound(id))
    }

    #[instrument(skip(self))]
    async fn set_active_channel(&self, id: UserId, channel_id: ChannelId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET active_channel_id = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(channel_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::ChannelNotFound(channel_id)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
