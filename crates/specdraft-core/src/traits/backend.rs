//! Backend trait.

use async_trait::async_trait;

use crate::types::{GenerationRequest, GenerationResult};
use crate::{AccessToken, Credentials, Result};

/// Output from a successful signup.
#[derive(Debug, Clone, Default)]
pub struct SignupOutput {
    /// Confirmation message from the backend, if any.
    pub message: Option<String>,
}

/// Output from a successful login.
#[derive(Debug, Clone, Default)]
pub struct LoginOutput {
    /// Confirmation message from the backend, if any.
    pub message: Option<String>,
    /// The session credential, absent if the payload did not carry one.
    pub access_token: Option<AccessToken>,
}

/// Output from a successful generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerateOutput {
    /// Confirmation message from the backend, if any.
    pub message: Option<String>,
    /// The generated specification.
    pub result: GenerationResult,
}

/// The remote service that owns accounts and generates specifications.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Create a new account. Does not authenticate the session.
    async fn signup(&self, credentials: &Credentials) -> Result<SignupOutput>;

    /// Authenticate and obtain a session credential.
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutput>;

    /// Generate a specification from requirement text and/or a file.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateOutput>;
}
