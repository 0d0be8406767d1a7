//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chatroom-core.
//! Each repository handles database operations for a specific domain entity.

mod channel;
mod error;
mod group;
mod message;
mod user;

pub use channel::PgChannelRepository;
pub use group::PgGroupRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
