//! # chatroom-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use dto::*;
pub use services::{
    AccountService, ChannelService, ChatService, MessageService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
