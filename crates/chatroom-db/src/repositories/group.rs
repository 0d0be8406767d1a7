//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chatroom_core::entities::{Group, NewGroup};
use chatroom_core::error::DomainError;
use chatroom_core::traits::{GroupRepository, RepoResult};
use chatroom_core::value_objects::GroupId;

use crate::models::GroupModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of GroupRepository
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GroupId) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, name, description, owner_id, created_at
            FROM groups
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, group: &NewGroup) -> RepoResult<Group> {
        let owner = group.owner_id.map(|id| id.into_inner());

        let model = sqlx::query_as::<_, GroupModel>(
            r"
            INSERT INTO groups (name, description, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, owner_id, created_at
            ",
        )
        .bind(&group.name)
        .bind(&group.description)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || match group.owner_id {
                Some(id) => DomainError::UserNotFound(id),
                None => DomainError::InternalError("group insert violated a foreign key".into()),
            })
        })?;

        Ok(Group::from(model))
    }
}
