//! # chatroom-core
//!
//! Domain layer containing entities, typed identifiers, the input sanitizer,
//! the chat command parser, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod command;
pub mod entities;
pub mod error;
pub mod sanitize;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use command::{parse_input, ChatCommand, ChatInput, CommandError, COMMAND_PREFIX, HELP_TEXT};
pub use entities::{
    Channel, Group, Message, NewChannel, NewGroup, NewMessage, NewUser, ProfileUpdate, Recipient,
    User,
};
pub use error::DomainError;
pub use sanitize::{is_allowed, sanitize, MAX_INPUT_LEN};
pub use traits::{
    ChannelRepository, GroupRepository, MessageRepository, RepoResult, UserRepository,
};
pub use value_objects::{ChannelId, GroupId, IdParseError, MessageId, UserId};
