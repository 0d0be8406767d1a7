//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for form and JSON inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateChannelRequest, CreateGroupRequest, LoginRequest, RegisterRequest, SendMessageRequest,
    UpdateAccountRequest,
};

// Re-export commonly used response types
pub use responses::{
    AccountResponse, AuthResponse, ChannelResponse, ChatViewResponse, FormField, FormResponse,
    GroupResponse, HealthChecks, HealthResponse, MessageResponse, Notification,
    NotificationLevel, ReadinessResponse, SubmitResponse,
};
