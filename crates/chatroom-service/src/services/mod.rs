//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod channel;
pub mod chat;
pub mod context;
pub mod error;
mod input;
pub mod message;

// Re-export all services for convenience
pub use account::AccountService;
pub use channel::ChannelService;
pub use chat::ChatService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
