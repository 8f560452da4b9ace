//! In-memory session store.

use std::sync::{PoisonError, RwLock};

use crate::traits::SessionStore;
use crate::{AccessToken, Result};

/// A session store that lives only as long as the value itself.
///
/// Each instance is isolated, which makes it the store of choice for tests
/// and for embedding the flows without touching disk.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<AccessToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a credential.
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<AccessToken>> {
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        Ok(token.clone())
    }

    fn set(&self, token: &AccessToken) -> Result<()> {
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        Ok(())
    }
}
