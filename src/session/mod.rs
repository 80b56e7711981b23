//! Local session storage
//!
//! The session is a bearer token plus a little cached profile data kept in a
//! key-value store. Stores are constructed explicitly and handed to whatever
//! needs them; there is no process-wide instance.

use serde::Serialize;

use crate::error::SessionError;
use crate::token::{self, JwtClaims};

#[cfg(test)]
pub mod memory;
pub mod sqlite;

#[cfg(test)]
pub use memory::MemorySessionStore;
pub use sqlite::SqliteSessionStore;

type Result<T> = std::result::Result<T, SessionError>;

const TOKEN_KEY: &str = "user_token";
const USER_ID_KEY: &str = "user_id";
const USER_EMAIL_KEY: &str = "user_email";
const USER_NAME_KEY: &str = "user_name";
const LOGGED_IN_KEY: &str = "is_logged_in";

/// Cached identity of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Key-value storage for session data.
///
/// Implementors supply the three primitive operations; the typed accessors
/// are built on top of them.
pub trait SessionStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Remove every stored value
    fn clear(&self) -> Result<()>;

    /// Stored bearer token, if any non-empty one exists
    fn token(&self) -> Result<Option<String>> {
        Ok(self.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// Persist the bearer token
    fn save_token(&self, token: &str) -> Result<()> {
        self.put(TOKEN_KEY, token)
    }

    /// Persist the signed-in user's identity
    fn save_user_info(&self, user: &UserInfo) -> Result<()> {
        self.put(USER_ID_KEY, &user.id)?;
        self.put(USER_EMAIL_KEY, &user.email)?;
        self.put(USER_NAME_KEY, &user.name)?;
        self.put(LOGGED_IN_KEY, "true")
    }

    /// Cached identity, present only after [`SessionStore::save_user_info`]
    fn user_info(&self) -> Result<Option<UserInfo>> {
        if !self.is_logged_in()? {
            return Ok(None);
        }

        Ok(Some(UserInfo {
            id: self.get(USER_ID_KEY)?.unwrap_or_default(),
            email: self.get(USER_EMAIL_KEY)?.unwrap_or_default(),
            name: self.get(USER_NAME_KEY)?.unwrap_or_default(),
        }))
    }

    /// Whether user info has been recorded since the last clear
    fn is_logged_in(&self) -> Result<bool> {
        Ok(self.get(LOGGED_IN_KEY)?.as_deref() == Some("true"))
    }
}

/// A bearer token together with the claims decoded from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub claims: JwtClaims,
}

impl AuthSession {
    /// Build a session from a raw token; `None` if the token is malformed
    pub fn from_token(token: &str) -> Option<Self> {
        token::parse_token(token).map(|claims| Self {
            token: token.to_string(),
            claims,
        })
    }

    /// Load the current session from a store, if a token is stored
    pub fn load(store: &dyn SessionStore) -> Result<Option<Self>> {
        Ok(store.token()?.as_deref().and_then(Self::from_token))
    }

    /// Whether the session's token has passed its expiry
    pub fn is_expired(&self) -> bool {
        token::is_expired(&self.token)
    }
}
