//! # chatroom-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `chatroom-core`. It handles:
//!
//! - Connection pool management
//! - Idempotent schema bootstrap at startup
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chatroom_common::AppConfig;
//! use chatroom_db::{bootstrap_schema, create_pool, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     bootstrap_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, ping, PgPool};
pub use repositories::{
    PgChannelRepository, PgGroupRepository, PgMessageRepository, PgUserRepository,
};
pub use schema::bootstrap_schema;
