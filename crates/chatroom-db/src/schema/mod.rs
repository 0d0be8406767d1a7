//! Schema bootstrap
//!
//! Tables are created with `IF NOT EXISTS` so startup is idempotent. A
//! default "Lobby" group with a "general" channel is seeded when no group
//! exists yet; on a fresh database it receives id 1. The whole bootstrap
//! runs in one transaction under an advisory lock.

use sqlx::PgPool;
use tracing::{info, instrument};

/// DDL for every table, safe to run repeatedly
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id            BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    display_name  TEXT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    bio           TEXT,
    profile_image TEXT,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS groups (
    id          BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT,
    owner_id    BIGINT REFERENCES users(id) ON DELETE SET NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS channels (
    id               BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    group_id         BIGINT NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
    name             TEXT NOT NULL,
    description      TEXT,
    slowmode_seconds INTEGER NOT NULL DEFAULT 0 CHECK (slowmode_seconds >= 0),
    created_at       TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_channels_group_id ON channels (group_id);

ALTER TABLE users
    ADD COLUMN IF NOT EXISTS active_channel_id BIGINT REFERENCES channels(id) ON DELETE SET NULL;

CREATE TABLE IF NOT EXISTS messages (
    id                   BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    sender_id            BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    recipient_user_id    BIGINT REFERENCES users(id) ON DELETE CASCADE,
    recipient_channel_id BIGINT REFERENCES channels(id) ON DELETE CASCADE,
    content              TEXT NOT NULL,
    silent               BOOLEAN NOT NULL DEFAULT FALSE,
    created_at           TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT messages_single_recipient
        CHECK ((recipient_user_id IS NULL) <> (recipient_channel_id IS NULL))
);

CREATE INDEX IF NOT EXISTS idx_messages_channel
    ON messages (recipient_channel_id, id DESC) WHERE recipient_channel_id IS NOT NULL;
CREATE INDEX IF NOT EXISTS idx_messages_recipient_user
    ON messages (recipient_user_id, id DESC) WHERE recipient_user_id IS NOT NULL;
CREATE INDEX IF NOT EXISTS idx_messages_sender_channel
    ON messages (sender_id, recipient_channel_id, created_at DESC);
";

/// Seeds the default group and channel when the groups table is empty
const SEED_SQL: &str = r"
WITH lobby AS (
    INSERT INTO groups (name, description)
    SELECT 'Lobby', 'Default group'
    WHERE NOT EXISTS (SELECT 1 FROM groups)
    RETURNING id
)
INSERT INTO channels (group_id, name, description)
SELECT id, 'general', 'Default channel' FROM lobby
";

/// Serializes concurrent bootstraps from several server processes
const BOOTSTRAP_LOCK_KEY: i64 = 0x6368_6174;

/// Create missing tables and seed the default channel
#[instrument(skip_all)]
pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(BOOTSTRAP_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;
    let seeded = sqlx::query(SEED_SQL).execute(&mut *tx).await?.rows_affected();

    tx.commit().await?;

    if seeded > 0 {
        info!("Seeded default group and channel");
    }
    info!("Database schema ready");
    Ok(())
}
