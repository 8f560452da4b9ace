//! Error types for the SpecDraft client.
//!
//! This module provides a unified error type with explicit variants for
//! local validation, backend rejections, transport failures, session storage
//! and malformed input.

use std::fmt;
use thiserror::Error;

/// The unified error type for SpecDraft operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected locally before any network call.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Non-2xx response from the backend.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// Network transport errors (DNS, TLS, connection, timeout, decoding).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Session persistence errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Malformed configuration or arguments (invalid URL, unreadable file).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Convert the error into a message suitable for display to the user.
    ///
    /// Validation errors and backend-supplied details are shown verbatim;
    /// everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Validation(err) => err.to_string(),
            Error::Request(err) => err
                .detail
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
            Error::InvalidInput(err) => err.to_string(),
            Error::Transport(_) | Error::Storage(_) => fallback.to_string(),
        }
    }
}

/// Local validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither requirement text nor a file was supplied.
    #[error("Add requirement text or a file to generate from.")]
    EmptyGenerationInput,

    /// A required form field was left empty.
    #[error("The {0} field is required.")]
    MissingField(&'static str),
}

/// A non-2xx response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    /// HTTP status code.
    pub status: u16,
    /// Detail extracted from the backend's error payload, if any.
    pub detail: Option<String>,
}

impl RequestError {
    /// Create a new request error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestError {}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// A 2xx response whose body could not be decoded.
    #[error("invalid response body: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Session persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing storage failed.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// The stored session could not be parsed.
    #[error("corrupt session data in {path}: {message}")]
    Corrupt { path: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid backend base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// An upload file could not be read.
    #[error("cannot read file '{path}': {reason}")]
    File { path: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
