//! Authentication handlers
//!
//! Login, registration, and logout. The session token is returned in the body
//! and also set as an HttpOnly cookie.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chatroom_service::{
    AccountResponse, AccountService, AuthResponse, FormResponse, LoginRequest, Notification,
    RegisterRequest,
};

use crate::extractors::ValidatedForm;
use crate::response::{ApiResult, Created, Flash, Notice, LOGIN_PAGE};
use crate::state::AppState;

/// Login form description
///
/// GET /login
pub async fn login_form() -> Json<FormResponse> {
    Json(FormResponse::login())
}

/// Login with username and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(request): ValidatedForm<LoginRequest>,
) -> ApiResult<(CookieJar, Json<Flash<AuthResponse>>)> {
    let service = AccountService::new(state.service_context());
    let response = service.login(request).await?;

    let cookie = session_cookie(&state, response.token.clone());
    let body = Flash::new(
        Notification::success("Logged in successfully!").with_redirect("/"),
        response,
    );
    Ok((jar.add(cookie), Json(body)))
}

/// Registration form description
///
/// GET /register
pub async fn register_form() -> Json<FormResponse> {
    Json(FormResponse::register())
}

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<RegisterRequest>,
) -> ApiResult<Created<Json<Flash<AccountResponse>>>> {
    let service = AccountService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(Flash::new(
        Notification::success("Registration successful! Please log in.")
            .with_redirect(LOGIN_PAGE),
        response,
    ))))
}

/// Clear the session cookie
///
/// GET /logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Notice>) {
    let jar = jar.remove(Cookie::build(state.session_cookie_name().to_owned()).path("/"));
    let body = Notice::only(
        Notification::success("Logged out successfully.").with_redirect(LOGIN_PAGE),
    );
    (jar, Json(body))
}

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let session = &state.config().session;
    Cookie::build((session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(session.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}
