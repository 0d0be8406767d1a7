//! Service context - dependency container for services
//!
//! Holds the repositories, the session token service, and chat settings.

use std::sync::Arc;

use chatroom_common::{ChatConfig, JwtService};
use chatroom_core::traits::{ChannelRepository, GroupRepository, MessageRepository, UserRepository};
use chatroom_core::ChannelId;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    group_repo: Arc<dyn GroupRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    chat: Arc<ChatConfig>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        group_repo: Arc<dyn GroupRepository>,
        channel_repo: Arc<dyn ChannelRepository>,
        message_repo: Arc<dyn MessageRepository>,
        jwt_service: Arc<JwtService>,
        chat: ChatConfig,
    ) -> Self {
        Self {
            user_repo,
            group_repo,
            channel_repo,
            message_repo,
            jwt_service,
            chat: Arc::new(chat),
        }
    }

    // =========================================================================
    // Repository Getters
    // =========================================================================

    /// Get user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get group repository
    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    /// Get channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    // =========================================================================
    // Service Getters
    // =========================================================================

    /// Get JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Chat behaviour settings
    pub fn chat(&self) -> &ChatConfig {
        &self.chat
    }

    /// Channel used by users who never swapped channels
    pub fn default_channel(&self) -> ChannelId {
        ChannelId::new(self.chat.default_channel_id)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("chat", &self.chat)
            .finish_non_exhaustive()
    }
}

/// Builder for ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    chat: ChatConfig,
}

impl ServiceContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            user_repo: None,
            group_repo: None,
            channel_repo: None,
            message_repo: None,
            jwt_service: None,
            chat: ChatConfig::default(),
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Override the default chat settings
    pub fn chat_config(mut self, chat: ChatConfig) -> Self {
        self.chat = chat;
        self
    }

    /// Build the service context
    ///
    /// Returns an error if any required dependency is missing.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::MissingDependency("user_repo"))?,
            self.group_repo
                .ok_or_else(|| ServiceError::MissingDependency("group_repo"))?,
            self.channel_repo
                .ok_or_else(|| ServiceError::MissingDependency("channel_repo"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::MissingDependency("message_repo"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::MissingDependency("jwt_service"))?,
            self.chat,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
