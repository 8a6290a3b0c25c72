use validator::Validate;

use crate::entities::token::AuthSession;
use crate::entities::user::{AuthUser, LoginRequest, RegisterRequest};
use crate::errors::{AppError, AuthError};
use crate::interfaces::repositories::user::UserRepository;
use crate::auth::password::{hash_password, verify_password};
use crate::repositories::token::TokenServiceRepository;

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T) -> Self {
        AuthHandler {
            user_repo,
            token_service
        }
    }

    /// Registers a new account and signs it straight in. The duplicate
    /// check runs against the lowercased email, so casing variants of an
    /// existing address are rejected.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthSession, AppError> {
        request.validate()?;

        let email = request.normalized_email();
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let hashed_password = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(hashed_password);
        let user_id = self.user_repo.create_user(&user_insert).await?.to_hex();

        let token = self
            .token_service
            .create_jwt(&user_id, &email)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(AuthSession {
            user: AuthUser {
                id: user_id,
                email,
                name: None,
            },
            token,
        })
    }

    /// Checks credentials and issues a session token. Unknown emails and
    /// wrong passwords produce the same error; only storage trouble is
    /// reported differently.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, AuthError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let email = request.email.trim().to_lowercase();
        let user = self.user_repo.find_by_email(&email)
            .await
            .map_err(|e| {
                tracing::error!("Login lookup failed: {}", e);
                AuthError::LoginFailed
            })?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let user_id = user.id.map(|id| id.to_hex()).unwrap_or_default();
        let token = self.token_service.create_jwt(&user_id, &user.email)?;

        tracing::info!("User logged in successfully");
        Ok(AuthSession {
            user: AuthUser {
                id: user_id,
                email: user.email,
                name: user.name,
            },
            token,
        })
    }
}
