//! Session store trait.

use crate::{AccessToken, Result};

/// Holds the single bearer credential of the client.
///
/// At most one credential exists at a time: `set` replaces whatever was
/// stored before. Implementations must not validate the token's shape.
pub trait SessionStore: Send + Sync {
    /// Returns the stored credential, if any.
    fn get(&self) -> Result<Option<AccessToken>>;

    /// Persist a credential, replacing any previous one.
    fn set(&self, token: &AccessToken) -> Result<()>;

    /// Remove the stored credential. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;

    /// Returns true if a credential is stored.
    fn is_present(&self) -> Result<bool> {
        Ok(self.get()?.is_some())
    }
}
