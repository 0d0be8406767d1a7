//! Authentication extractor
//!
//! Reads the session token from the `Authorization: Bearer` header or,
//! failing that, from the session cookie, and validates it.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chatroom_common::{AppError, JwtService};
use chatroom_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the session token
    pub user_id: UserId,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Session token from the request, header first
async fn session_token<S>(parts: &mut Parts, state: &S, cookie_name: &str) -> Option<String>
where
    S: Send + Sync,
{
    if let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    {
        return Some(bearer.token().to_owned());
    }
    cookie_token(&parts.headers, cookie_name)
}

fn cookie_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

fn authenticate(jwt: &JwtService, token: &str) -> Result<AuthUser, ApiError> {
    let claims = jwt.validate(token).map_err(|e| {
        tracing::warn!(error = %e, "Invalid session token");
        e
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in session token");
        AppError::InvalidToken
    })?;

    Ok(AuthUser::new(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = session_token(parts, state, app_state.session_cookie_name())
            .await
            .ok_or(ApiError::App(AppError::MissingAuth))?;

        authenticate(app_state.jwt_service(), &token)
    }
}

/// Optional authenticated user
///
/// Returns None if no session token is present,
/// or an error if the token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        match session_token(parts, state, app_state.session_cookie_name()).await {
            Some(token) => authenticate(app_state.jwt_service(), &token).map(|u| Self(Some(u))),
            None => Ok(Self(None)),
        }
    }
}
