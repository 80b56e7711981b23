//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::Result;

/// Authentication operations for the Centavo API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an account; the response may already carry a token
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;

    /// Exchange credentials for a bearer token
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;
}
