//! In-memory repositories for service tests

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chatroom_common::{ChatConfig, JwtService};
use chatroom_core::entities::{
    Channel, Group, Message, NewChannel, NewGroup, NewMessage, NewUser, ProfileUpdate, User,
};
use chatroom_core::traits::{
    ChannelRepository, GroupRepository, MessageRepository, RepoResult, UserRepository,
};
use chatroom_core::{ChannelId, DomainError, GroupId, MessageId, Recipient, UserId};
use chrono::{DateTime, Utc};

use crate::services::{ServiceContext, ServiceContextBuilder};

/// Seeded channel every user starts in
pub const LOBBY_CHANNEL: ChannelId = ChannelId::new(1);

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    groups: Vec<Group>,
    channels: Vec<Channel>,
    messages: Vec<Message>,
    next_id: i64,
    writes: usize,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn username_or_email_taken(&self, except: Option<UserId>, username: &str, email: &str) -> bool {
        self.users.iter().any(|(u, _)| {
            Some(u.id) != except && (u.username == username || u.email == email)
        })
    }
}

/// All four repositories backed by one mutex-guarded state
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Store seeded with an ownerless lobby group and its channel
    pub fn new() -> Arc<Self> {
        let now = Utc::now();
        let group_id = GroupId::new(1);
        let state = State {
            groups: vec![Group {
                id: group_id,
                name: "Lobby".to_string(),
                description: None,
                owner_id: None,
                created_at: now,
            }],
            channels: vec![Channel {
                id: LOBBY_CHANNEL,
                group_id,
                name: "general".to_string(),
                description: None,
                slowmode_seconds: 0,
                created_at: now,
            }],
            next_id: 1,
            ..State::default()
        };

        Arc::new(Self {
            state: Mutex::new(state),
        })
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Number of mutating repository calls so far
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    pub fn user(&self, id: UserId) -> User {
        let state = self.lock();
        state
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone())
            .unwrap()
    }

    pub fn channel(&self, id: ChannelId) -> Channel {
        let state = self.lock();
        state.channels.iter().find(|c| c.id == id).cloned().unwrap()
    }

    /// Insert a user directly, without a usable password
    pub fn seed_user(&self, username: &str) -> User {
        let mut state = self.lock();
        let now = Utc::now();
        let user = User {
            id: UserId::new(state.next_id()),
            username: username.to_string(),
            display_name: None,
            email: format!("{username}@example.com"),
            bio: None,
            profile_image: None,
            active_channel_id: None,
            created_at: now,
            updated_at: now,
        };
        state.users.push((user.clone(), String::new()));
        user
    }

    /// Insert a group owned by `owner` with one channel
    pub fn seed_owned_channel(&self, owner: UserId, slowmode_seconds: u32) -> ChannelId {
        let mut state = self.lock();
        let now = Utc::now();
        let group_id = GroupId::new(state.next_id());
        state.groups.push(Group {
            id: group_id,
            name: "owned".to_string(),
            description: None,
            owner_id: Some(owner),
            created_at: now,
        });
        let channel_id = ChannelId::new(state.next_id());
        state.channels.push(Channel {
            id: channel_id,
            group_id,
            name: "owned-general".to_string(),
            description: None,
            slowmode_seconds,
            created_at: now,
        });
        channel_id
    }

    pub fn set_active(&self, user: UserId, channel: ChannelId) {
        let mut state = self.lock();
        if let Some((u, _)) = state.users.iter_mut().find(|(u, _)| u.id == user) {
            u.active_channel_id = Some(channel);
        }
    }
}

/// Service context wired to the in-memory store
pub fn context(store: &Arc<InMemoryStore>) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(store.clone())
        .group_repo(store.clone())
        .channel_repo(store.clone())
        .message_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
        .chat_config(ChatConfig::default())
        .build()
        .unwrap()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut state = self.lock();
        state.writes += 1;
        if state.username_or_email_taken(None, &user.username, &user.email) {
            return Err(DomainError::AccountAlreadyExists);
        }
        let now = Utc::now();
        let created = User {
            id: UserId::new(state.next_id()),
            username: user.username.clone(),
            display_name: None,
            email: user.email.clone(),
            bio: None,
            profile_image: None,
            active_channel_id: None,
            created_at: now,
            updated_at: now,
        };
        state.users.push((created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn update_profile(&self, id: UserId, update: &ProfileUpdate) -> RepoResult<User> {
        let mut state = self.lock();
        state.writes += 1;
        if state.username_or_email_taken(Some(id), &update.username, &update.email) {
            return Err(DomainError::AccountAlreadyExists);
        }
        let (user, _) = state
            .users
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        user.apply_profile(update.clone());
        Ok(user.clone())
    }

    async fn set_active_channel(&self, id: UserId, channel_id: ChannelId) -> RepoResult<()> {
        let mut state = self.lock();
        state.writes += 1;
        if !state.channels.iter().any(|c| c.id == channel_id) {
            return Err(DomainError::ChannelNotFound(channel_id));
        }
        let (user, _) = state
            .users
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        user.active_channel_id = Some(channel_id);
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone())
            .filter(|hash| !hash.is_empty()))
    }
}

#[async_trait]
impl GroupRepository for InMemoryStore {
    async fn find_by_id(&self, id: GroupId) -> RepoResult<Option<Group>> {
        Ok(self.lock().groups.iter().find(|g| g.id == id).cloned())
    }

    async fn create(&self, group: &NewGroup) -> RepoResult<Group> {
        let mut state = self.lock();
        state.writes += 1;
        let created = Group {
            id: GroupId::new(state.next_id()),
            name: group.name.clone(),
            description: group.description.clone(),
            owner_id: group.owner_id,
            created_at: Utc::now(),
        };
        state.groups.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ChannelRepository for InMemoryStore {
    async fn find_by_id(&self, id: ChannelId) -> RepoResult<Option<Channel>> {
        Ok(self.lock().channels.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_group(&self, group_id: GroupId) -> RepoResult<Vec<Channel>> {
        Ok(self
            .lock()
            .channels
            .iter()
            .filter(|c| c.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn create(&self, channel: &NewChannel) -> RepoResult<Channel> {
        let mut state = self.lock();
        state.writes += 1;
        if !state.groups.iter().any(|g| g.id == channel.group_id) {
            return Err(DomainError::GroupNotFound(channel.group_id));
        }
        let created = Channel {
            id: ChannelId::new(state.next_id()),
            group_id: channel.group_id,
            name: channel.name.clone(),
            description: channel.description.clone(),
            slowmode_seconds: 0,
            created_at: Utc::now(),
        };
        state.channels.push(created.clone());
        Ok(created)
    }

    async fn set_slowmode(&self, id: ChannelId, seconds: u32) -> RepoResult<()> {
        let mut state = self.lock();
        state.writes += 1;
        let channel = state
            .channels
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::ChannelNotFound(id))?;
        channel.slowmode_seconds = seconds;
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let mut state = self.lock();
        state.writes += 1;
        match message.recipient {
            Recipient::Channel(id) if !state.channels.iter().any(|c| c.id == id) => {
                return Err(DomainError::ChannelNotFound(id));
            }
            Recipient::User(id) if !state.users.iter().any(|(u, _)| u.id == id) => {
                return Err(DomainError::UserNotFound(id));
            }
            _ => {}
        }
        let created = message.clone().into_message(MessageId::new(state.next_id()));
        state.messages.push(created.clone());
        Ok(created)
    }

    async fn find_channel_messages(
        &self,
        channel_id: ChannelId,
        viewer: UserId,
        limit: i64,
    ) -> RepoResult<Vec<Message>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .lock()
            .messages
            .iter()
            .rev()
            .filter(|m| m.recipient.channel_id() == Some(channel_id))
            .filter(|m| m.is_visible_to(viewer))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_whispers(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .lock()
            .messages
            .iter()
            .rev()
            .filter(|m| {
                m.recipient.user_id() == Some(user_id) || (m.is_whisper() && m.sender_id == user_id)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn last_channel_post_at(
        &self,
        sender_id: UserId,
        channel_id: ChannelId,
    ) -> RepoResult<Option<DateTime<Utc>>> {
        Ok(self
            .lock()
            .messages
            .iter()
            .filter(|m| m.sender_id == sender_id && m.recipient == Recipient::Channel(channel_id))
            .map(|m| m.created_at)
            .max())
    }
}
