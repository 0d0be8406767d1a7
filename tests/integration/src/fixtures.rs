//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data, stable across concurrent test binaries
pub fn unique_suffix() -> String {
    format!(
        "{}_{}",
        chrono::Utc::now().timestamp_micros() % 1_000_000_000_000,
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Credentials of a test account
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn unique() -> Self {
        let username = format!("u{}", unique_suffix());
        Self {
            email: format!("{username}@example.com"),
            username,
            password: "password123".to_string(),
        }
    }

    pub fn register_form(&self) -> [(&'static str, &str); 3] {
        [
            ("username", self.username.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
        ]
    }

    pub fn login_form(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.as_str()), ("password", self.password.as_str())]
    }
}

/// Flash notification
#[derive(Debug, Deserialize)]
pub struct Notification {
    pub level: String,
    pub message: String,
    pub redirect: Option<String>,
}

/// Outcome of POST /send
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
    pub command: Option<String>,
    pub notification: Notification,
    pub message: Option<serde_json::Value>,
    pub channel: Option<serde_json::Value>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub redirect: Option<String>,
}

/// Message entry of the chat view
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub id: i64,
    pub sender_id: i64,
    pub content: String,
    pub silent: bool,
}

/// Chat view
#[derive(Debug, Deserialize)]
pub struct ChatView {
    pub channel: serde_json::Value,
    pub messages: Vec<MessageBody>,
    pub whispers: Vec<MessageBody>,
}

impl ChatView {
    pub fn contents(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}
