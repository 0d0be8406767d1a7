//! Chat handlers
//!
//! The chat page and the single submission endpoint for messages and commands.

use axum::{extract::State, Json};
use chatroom_service::{ChatService, ChatViewResponse, SendMessageRequest, SubmitResponse};

use crate::extractors::{AuthUser, ValidatedForm};
use crate::response::ApiResult;
use crate::state::AppState;

/// Chat view for the signed-in user
///
/// GET /
pub async fn index(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ChatViewResponse>> {
    let service = ChatService::new(state.service_context());
    let response = service.view(auth.user_id).await?;
    Ok(Json(response))
}

/// Submit a plain message or a `$command`
///
/// POST /send
pub async fn send(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedForm(request): ValidatedForm<SendMessageRequest>,
) -> ApiResult<Json<SubmitResponse>> {
    let service = ChatService::new(state.service_context());
    let response = service.submit(auth.user_id, &request.message).await?;
    Ok(Json(response))
}
