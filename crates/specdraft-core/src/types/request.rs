//! Generation request types.

use std::fmt;
use std::path::Path;

use tracing::{debug, instrument};

use crate::Result;
use crate::error::{InvalidInputError, ValidationError};

/// A requirements document to upload alongside (or instead of) raw text.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    content_type: &'static str,
    bytes: Vec<u8>,
}

impl UploadFile {
    /// Create an upload from in-memory bytes.
    ///
    /// The content type is derived from the file name's extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read an upload from disk.
    #[instrument]
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| InvalidInputError::File {
                path: path.display().to_string(),
                reason: "path has no file name".to_string(),
            })?
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| InvalidInputError::File {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(file_name, size = bytes.len(), "Loaded upload file");
        Ok(Self::new(file_name, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// File contents stay out of Debug output
impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        _ => "application/octet-stream",
    }
}

/// Input for one call to the generation endpoint.
///
/// Holds requirement text, a file, or both. At least one is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    text: Option<String>,
    file: Option<UploadFile>,
}

impl GenerationRequest {
    /// Build a request from optional text and an optional file.
    ///
    /// Empty text counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyGenerationInput`] if neither is present.
    pub fn new(text: Option<String>, file: Option<UploadFile>) -> Result<Self> {
        let text = text.filter(|t| !t.is_empty());

        if text.is_none() && file.is_none() {
            return Err(ValidationError::EmptyGenerationInput.into());
        }

        Ok(Self { text, file })
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }
}
