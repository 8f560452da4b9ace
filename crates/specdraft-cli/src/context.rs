//! Wiring of the session store and backend for one CLI invocation.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use tracing::debug;

use specdraft_core::{ApiUrl, App};
use specdraft_file::FileSessionStore;
use specdraft_http::HttpBackend;

/// Shared state for a command: where the session lives and which backend
/// to talk to.
#[derive(Debug)]
pub struct Context {
    pub store: Arc<FileSessionStore>,
    pub backend: Arc<HttpBackend>,
}

impl Context {
    pub fn new(api: ApiUrl, session_file: Option<PathBuf>) -> Result<Self> {
        let path = match session_file {
            Some(path) => path,
            None => default_session_path()?,
        };

        debug!(session_file = %path.display(), api = %api, "Configured client");

        let store = Arc::new(FileSessionStore::new(path));
        let backend = Arc::new(
            HttpBackend::new(api, store.clone()).context("Failed to create HTTP client")?,
        );

        Ok(Self { store, backend })
    }

    /// Start the root controller from the stored session.
    pub fn app(&self) -> App {
        App::init(self.backend.clone(), self.store.clone())
    }
}

/// Get the default session file path.
fn default_session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "specdraft").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}
