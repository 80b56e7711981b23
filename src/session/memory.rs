//! In-memory session store for tests

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Result, SessionStore};
use crate::error::SessionError;

/// Session store backed by a `HashMap`; nothing survives the process
#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token
    pub fn with_token(token: &str) -> Self {
        Self {
            values: Mutex::new(HashMap::from([(
                super::TOKEN_KEY.to_string(),
                token.to_string(),
            )])),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| SessionError::Storage("session lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}
