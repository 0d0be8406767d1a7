//! Account service
//!
//! Handles registration, login, and account details.

use chatroom_common::{hash_password, verify_password, AppError};
use chatroom_core::entities::{NewUser, ProfileUpdate, User};
use chatroom_core::{sanitize, DomainError, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{AccountResponse, AuthResponse, LoginRequest, RegisterRequest, UpdateAccountRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input::{email, optional_text, username};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user. The caller logs in separately.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AccountResponse> {
        let new_user = NewUser {
            username: username(&request.username)?,
            email: email(&request.email)?,
        };

        let password_hash = hash_password(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&new_user, &password_hash)
            .await
            .inspect_err(|e| {
                if matches!(e, DomainError::AccountAlreadyExists) {
                    warn!(username = %new_user.username, "Registration rejected: account exists");
                }
            })?;

        info!(user_id = %user.id, "User registered successfully");
        Ok(AccountResponse::from(user))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let username = sanitize(&request.username);

        let user = self
            .ctx
            .user_repo()
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                warn!(username = %username, "Login failed: user not found");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        let session = self.ctx.jwt_service().issue(user.id)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(AuthResponse {
            token: session.token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            user: AccountResponse::from(user),
        })
    }

    /// Load the signed-in user
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Account details of the signed-in user
    pub async fn get_account(&self, user_id: UserId) -> ServiceResult<AccountResponse> {
        self.current_user(user_id).await.map(AccountResponse::from)
    }

    /// Overwrite every editable account field
    #[instrument(skip(self, request))]
    pub async fn update_account(
        &self,
        user_id: UserId,
        request: UpdateAccountRequest,
    ) -> ServiceResult<AccountResponse> {
        let update = ProfileUpdate {
            username: username(&request.username)?,
            display_name: optional_text(Some(&request.displayname)),
            email: email(&request.email)?,
            bio: optional_text(Some(&request.bio)),
            profile_image: optional_text(Some(&request.profile_image)),
        };

        let user = self
            .ctx
            .user_repo()
            .update_profile(user_id, &update)
            .await
            .inspect_err(|e| {
                if matches!(e, DomainError::AccountAlreadyExists) {
                    warn!(user_id = %user_id, "Account update rejected: username or email taken");
                }
            })?;

        info!(user_id = %user.id, "Account updated");
        Ok(AccountResponse::from(user))
    }
}
