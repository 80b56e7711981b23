//! Auth service - sign-in state on top of the auth API and session store

use std::sync::Arc;

use log::debug;

use super::validation;
use crate::client::AuthApi;
use crate::client::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::{ApiError, Result};
use crate::session::{AuthSession, SessionStore, UserInfo};

/// Result of a register or login call
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    /// Identity recorded for the user
    pub user: UserInfo,

    /// Whether a token was stored; registration may succeed without one
    pub signed_in: bool,

    /// Message from the server, if any
    pub message: Option<String>,
}

/// Registration, login and logout against a session store
pub struct AuthService {
    client: Arc<dyn AuthApi>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(client: Arc<dyn AuthApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// Create an account. A token in the response signs the user in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<AuthOutcome> {
        let name = validation::validate_name(name)?;
        let email = validation::validate_email(email)?;
        validation::validate_password(password)?;
        validation::validate_password_confirmation(password, confirmation)?;

        let request = RegisterRequest {
            name: name.clone(),
            email: email.clone(),
            password: password.to_string(),
        };
        let response = self.client.register(&request).await?;

        if response.token.as_deref().is_none_or(str::is_empty) {
            debug!("Registration accepted without a token; user must log in");
            return Ok(AuthOutcome {
                user: UserInfo {
                    id: String::new(),
                    email,
                    name,
                },
                signed_in: false,
                message: response.message,
            });
        }

        self.store_session(response, &email, &name)
    }

    /// Exchange credentials for a token and store it
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let email = validation::validate_email(email)?;
        validation::validate_password(password)?;

        let request = LoginRequest {
            email: email.clone(),
            password: password.to_string(),
        };
        let response = self.client.login(&request).await?;

        if response.token.as_deref().is_none_or(str::is_empty) {
            return Err(ApiError::InvalidResponse(
                "Login response did not include a token".to_string(),
            )
            .into());
        }

        self.store_session(response, &email, "")
    }

    /// Forget the stored token and user info
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        debug!("Session cleared");
        Ok(())
    }

    /// A token is stored and has not expired
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.current_session()?.is_some_and(|s| !s.is_expired()))
    }

    /// Stored session with decoded claims, expired or not
    pub fn current_session(&self) -> Result<Option<AuthSession>> {
        Ok(AuthSession::load(self.store.as_ref())?)
    }

    pub fn user_info(&self) -> Result<Option<UserInfo>> {
        Ok(self.store.user_info()?)
    }

    fn store_session(
        &self,
        response: AuthResponse,
        email: &str,
        name: &str,
    ) -> Result<AuthOutcome> {
        let token = response.token.unwrap_or_default();
        let claims_id = AuthSession::from_token(&token)
            .map(|s| s.claims.id)
            .unwrap_or_default();
        let profile = response.user.unwrap_or_default();

        let pick = |preferred: String, fallback: &str| {
            if preferred.is_empty() {
                fallback.to_string()
            } else {
                preferred
            }
        };

        let user = UserInfo {
            id: pick(profile.id, &claims_id),
            email: pick(profile.email, email),
            name: pick(profile.name, name),
        };

        self.store.save_token(&token)?;
        self.store.save_user_info(&user)?;
        debug!("Signed in as {}", user.email);

        Ok(AuthOutcome {
            user,
            signed_in: true,
            message: response.message,
        })
    }
}
