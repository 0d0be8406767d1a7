//! Route handlers
//!
//! All HTTP request handlers organized by page.

pub mod account;
pub mod auth;
pub mod chat;
pub mod groups;
pub mod health;
