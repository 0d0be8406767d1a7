//! Database models - SQLx-compatible structs for PostgreSQL tables

mod channel;
mod group;
mod message;
mod user;

pub use channel::ChannelModel;
pub use group::GroupModel;
pub use message::MessageModel;
pub use user::UserModel;
