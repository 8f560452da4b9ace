//! File-backed session store.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use specdraft_core::error::StorageError;
use specdraft_core::{AccessToken, Result, SessionStore};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Open options that create files readable by the owner only.
fn owner_only() -> OpenOptions {
    let mut options = OpenOptions::new();
    #[cfg(unix)]
    options.mode(0o600);
    options
}

/// On-disk session record.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    saved_at: DateTime<Utc>,
}

/// A session store persisted as a JSON file.
///
/// The credential outlives the process, so a restarted client picks up
/// where the previous one left off.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns when the stored credential was saved, if any.
    pub fn saved_at(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.read()?.map(|stored| stored.saved_at))
    }

    fn read(&self) -> Result<Option<StoredSession>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let stored = serde_json::from_str(&json).map_err(|e| StorageError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Some(stored))
    }

    /// Path next to the session file with an extra extension.
    fn sibling(&self, extension: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(extension);
        self.path.with_file_name(name)
    }

    /// Write `contents` to a temporary file and rename it over the session
    /// file. Must be called with the writer lock held.
    fn replace_with(&self, contents: &[u8]) -> Result<()> {
        let tmp = self.sibling("tmp");

        let mut file = owner_only()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp)
            .map_err(|e| self.io_error(e))?;

        // A leftover temp file keeps its old mode, so tighten it before writing
        #[cfg(unix)]
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| self.io_error(e))?;

        file.write_all(contents)
            .and_then(|()| file.sync_all())
            .map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, err: io::Error) -> specdraft_core::Error {
        StorageError::Io {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
        .into()
    }
}

impl SessionStore for FileSessionStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn get(&self) -> Result<Option<AccessToken>> {
        let token = self.read()?.map(|stored| AccessToken::new(stored.access_token));
        debug!(present = token.is_some(), "Read session file");
        Ok(token)
    }

    #[instrument(skip(self, token), fields(path = %self.path.display()))]
    fn set(&self, token: &AccessToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let stored = StoredSession {
            access_token: token.as_str().to_string(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(|e| StorageError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        // Serializes writers; readers never block and see either file whole
        let lock = owner_only()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.sibling("lock"))
            .map_err(|e| self.io_error(e))?;
        lock.lock_exclusive().map_err(|e| self.io_error(e))?;

        let written = self.replace_with(json.as_bytes());

        lock.unlock().map_err(|e| self.io_error(e))?;
        written?;

        debug!("Saved session file");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed session file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
