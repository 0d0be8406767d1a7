//! Route definitions
//!
//! Page routes for the chat front end plus JSON routes for groups and channels.

use axum::{routing::get, routing::post, Router};

use crate::handlers::{account, auth, chat, groups, health};
use crate::state::AppState;

/// Create the main router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(chat_routes())
        .merge(account_routes())
        .merge(auth_routes())
        .merge(group_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Chat page and submission
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(chat::index))
        .route("/send", post(chat::send))
}

/// Account page
fn account_routes() -> Router<AppState> {
    Router::new().route(
        "/account",
        get(account::get_account).post(account::update_account),
    )
}

/// Session routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/logout", get(auth::logout))
}

/// Group and channel routes
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups", post(groups::create_group))
        .route("/groups/:group_id", get(groups::get_group))
        .route(
            "/groups/:group_id/channels",
            get(groups::list_channels).post(groups::create_channel),
        )
        .route("/channels/:channel_id", get(groups::get_channel))
}
