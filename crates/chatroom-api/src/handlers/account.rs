//! Account handlers

use axum::{extract::State, Json};
use chatroom_service::{AccountResponse, AccountService, Notification, UpdateAccountRequest};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedForm};
use crate::response::{ApiError, ApiResult, Flash};
use crate::state::AppState;

/// Current profile
///
/// GET /account
pub async fn get_account(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
) -> ApiResult<Json<AccountResponse>> {
    let auth = auth.ok_or(ApiError::LoginRequired(
        "Please log in to access your account.",
    ))?;

    let service = AccountService::new(state.service_context());
    let response = service.get_account(auth.user_id).await?;
    Ok(Json(response))
}

/// Overwrite the editable profile fields
///
/// POST /account
pub async fn update_account(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedForm(request): ValidatedForm<UpdateAccountRequest>,
) -> ApiResult<Json<Flash<AccountResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_account(auth.user_id, request).await?;
    Ok(Json(Flash::new(
        Notification::success("Account updated!"),
        response,
    )))
}
