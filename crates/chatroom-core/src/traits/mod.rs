//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChannelRepository, GroupRepository, MessageRepository, RepoResult, UserRepository,
};
