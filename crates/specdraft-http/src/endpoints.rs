//! Backend endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use specdraft_core::GenerationResult;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Account creation.
pub const SIGNUP: &str = "/auth/signup";

/// Password login, returns the session.
pub const LOGIN: &str = "/auth/login";

/// Specification generation from text and/or a file.
pub const GENERATE: &str = "/api/generate";

// ============================================================================
// Multipart Field Names
// ============================================================================

/// Requirement text part of a generation request.
pub const RAW_TEXT_FIELD: &str = "raw_text";

/// Uploaded file part of a generation request.
pub const FILE_FIELD: &str = "file";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for signup and login.
#[derive(Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from signup.
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub message: Option<String>,
}

/// Response from login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: Option<String>,
    pub session: Option<SessionPayload>,
}

/// The session object embedded in a login response.
#[derive(Deserialize)]
pub struct SessionPayload {
    pub access_token: Option<String>,
}

impl std::fmt::Debug for SessionPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPayload")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Response from generate.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub message: Option<String>,
    pub data: Option<GenerationResult>,
}
