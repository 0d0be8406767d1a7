//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Identifiers serialize as plain integers: users type channel ids into `$swapchannel`.

use chatroom_core::{ChannelId, GroupId, MessageId, Recipient, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Notifications
// ============================================================================

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Flash-style message shown to the user after an action
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// Where the client should navigate next, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            redirect: None,
        }
    }

    #[must_use]
    pub fn with_redirect(mut self, to: impl Into<String>) -> Self {
        self.redirect = Some(to.into());
        self
    }
}

// ============================================================================
// Chat Responses
// ============================================================================

/// Outcome of a chat submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    /// Command that ran, absent for plain messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
}

impl SubmitResponse {
    pub fn new(command: Option<&'static str>, notification: Notification) -> Self {
        Self {
            command,
            notification,
            message: None,
            channel: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: MessageResponse) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel: ChannelResponse) -> Self {
        self.channel = Some(channel);
        self
    }
}

/// Message as shown in the chat view
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: MessageId,
    pub sender_id: UserId,
    pub recipient: Recipient,
    pub content: String,
    pub silent: bool,
    pub created_at: DateTime<Utc>,
}

/// Everything the chat page renders for one user
#[derive(Debug, Clone, Serialize)]
pub struct ChatViewResponse {
    pub channel: ChannelResponse,
    /// Channel history, oldest first
    pub messages: Vec<MessageResponse>,
    /// Whispers sent or received, oldest first
    pub whispers: Vec<MessageResponse>,
}

// ============================================================================
// Account Responses
// ============================================================================

/// Account details of the signed-in user
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: UserId,
    pub username: String,
    pub display_name: Option<String>,
    pub email: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub active_channel_id: Option<ChannelId>,
    pub created_at: DateTime<Utc>,
}

/// Authentication response with the session token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AccountResponse,
}

/// Description of an HTML form, served on GET for form routes
#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    pub form: &'static str,
    pub action: &'static str,
    pub method: &'static str,
    pub fields: Vec<FormField>,
}

/// One input of a form
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
}

impl FormField {
    const fn new(name: &'static str, kind: &'static str, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
        }
    }
}

impl FormResponse {
    pub fn login() -> Self {
        Self {
            form: "login",
            action: "/login",
            method: "POST",
            fields: vec![
                FormField::new("username", "text", true),
                FormField::new("password", "password", true),
            ],
        }
    }

    pub fn register() -> Self {
        Self {
            form: "register",
            action: "/register",
            method: "POST",
            fields: vec![
                FormField::new("username", "text", true),
                FormField::new("email", "email", true),
                FormField::new("password", "password", true),
            ],
        }
    }
}

// ============================================================================
// Group / Channel Responses
// ============================================================================

/// Channel details
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub id: ChannelId,
    pub group_id: GroupId,
    pub name: String,
    pub description: Option<String>,
    pub slowmode_seconds: u32,
    pub created_at: DateTime<Utc>,
}

/// Group with its channels
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: GroupId,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub channels: Vec<ChannelResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
