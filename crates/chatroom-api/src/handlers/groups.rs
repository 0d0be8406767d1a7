//! Group and channel handlers
//!
//! JSON endpoints for creating groups and channels and browsing them.

use axum::{extract::State, Json};
use chatroom_core::{ChannelId, GroupId};
use chatroom_service::{
    ChannelResponse, ChannelService, CreateChannelRequest, CreateGroupRequest, GroupResponse,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a group owned by the caller
///
/// POST /groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGroupRequest>,
) -> ApiResult<Created<Json<GroupResponse>>> {
    let service = ChannelService::new(state.service_context());
    let response = service.create_group(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a group with its channels
///
/// GET /groups/{group_id}
pub async fn get_group(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(group_id): IdPath<GroupId>,
) -> ApiResult<Json<GroupResponse>> {
    let service = ChannelService::new(state.service_context());
    let response = service.get_group(group_id).await?;
    Ok(Json(response))
}

/// List a group's channels
///
/// GET /groups/{group_id}/channels
pub async fn list_channels(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(group_id): IdPath<GroupId>,
) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let service = ChannelService::new(state.service_context());
    let response = service.list_channels(group_id).await?;
    Ok(Json(response))
}

/// Add a channel to a group the caller owns
///
/// POST /groups/{group_id}/channels
pub async fn create_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(group_id): IdPath<GroupId>,
    ValidatedJson(request): ValidatedJson<CreateChannelRequest>,
) -> ApiResult<Created<Json<ChannelResponse>>> {
    let service = ChannelService::new(state.service_context());
    let response = service
        .create_channel(auth.user_id, group_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Get channel by ID
///
/// GET /channels/{channel_id}
pub async fn get_channel(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(channel_id): IdPath<ChannelId>,
) -> ApiResult<Json<ChannelResponse>> {
    let service = ChannelService::new(state.service_context());
    let response = service.get_channel(channel_id).await?;
    Ok(Json(response))
}
