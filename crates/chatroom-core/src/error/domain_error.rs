//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::command::CommandError;
use crate::value_objects::{ChannelId, GroupId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User {0} not found")]
    UsernameNotFound(String),

    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Channel not found: {0}")]
    ChannelNotFound(ChannelId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Message is empty after removing unsupported characters")]
    EmptyMessage,

    #[error("Slowmode must be between 0 and {max} seconds")]
    InvalidSlowmode { max: u32 },

    #[error("You cannot whisper to yourself")]
    CannotWhisperSelf,

    #[error(transparent)]
    Command(#[from] CommandError),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the group owner can moderate this channel")]
    NotGroupOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username or email already exists.")]
    AccountAlreadyExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Slowmode is active: wait {remaining_seconds} more seconds")]
    SlowmodeActive { remaining_seconds: i64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UsernameNotFound(_) => "UNKNOWN_USER",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::InvalidSlowmode { .. } => "INVALID_SLOWMODE",
            Self::CannotWhisperSelf => "CANNOT_WHISPER_SELF",
            Self::Command(CommandError::Unknown { .. } | CommandError::MissingArguments { .. }) => {
                "UNKNOWN_COMMAND"
            }
            Self::Command(_) => "INVALID_COMMAND_ARGUMENT",

            // Authorization
            Self::NotGroupOwner => "NOT_GROUP_OWNER",

            // Conflict
            Self::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",

            // Business Rules
            Self::SlowmodeActive { .. } => "SLOWMODE_ACTIVE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UsernameNotFound(_)
                | Self::GroupNotFound(_)
                | Self::ChannelNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyMessage
                | Self::InvalidSlowmode { .. }
                | Self::CannotWhisperSelf
                | Self::Command(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotGroupOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AccountAlreadyExists)
    }

    /// Check if the caller is posting too fast
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::SlowmodeActive { .. })
    }
}
