//! Integration test utilities for the chatroom server
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP API with real sessions.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
