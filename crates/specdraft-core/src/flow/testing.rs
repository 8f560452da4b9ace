//! Scripted backend for flow tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{RequestError, TransportError};
use crate::traits::{Backend, GenerateOutput, LoginOutput, SignupOutput};
use crate::types::{GenerationRequest, GenerationResult};
use crate::{AccessToken, Credentials, Result};

/// Answers every call the same way and counts them.
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    token: Option<String>,
    failure: Option<(u16, Option<String>)>,
    unreachable: bool,
    result: GenerationResult,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl FakeBackend {
    /// Logins succeed and return `token`.
    pub(crate) fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..Self::default()
        }
    }

    /// Every call fails with the given status and detail.
    pub(crate) fn failing(status: u16, detail: Option<&str>) -> Self {
        Self {
            failure: Some((status, detail.map(str::to_string))),
            ..Self::default()
        }
    }

    /// Every call fails before reaching the backend.
    pub(crate) fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_result(mut self, result: GenerationResult) -> Self {
        self.result = result;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }

    fn answer(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unreachable {
            return Err(TransportError::Connection {
                message: "connection refused".to_string(),
            }
            .into());
        }

        match &self.failure {
            Some((status, detail)) => Err(RequestError::new(*status, detail.clone()).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn signup(&self, _credentials: &Credentials) -> Result<SignupOutput> {
        self.answer()?;
        Ok(SignupOutput {
            message: Some("User created successfully!".to_string()),
        })
    }

    async fn login(&self, _credentials: &Credentials) -> Result<LoginOutput> {
        self.answer()?;
        Ok(LoginOutput {
            message: Some("Login successful".to_string()),
            access_token: self.token.clone().map(AccessToken::new),
        })
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateOutput> {
        self.answer()?;
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(GenerateOutput {
            message: Some("Specifications generated successfully.".to_string()),
            result: self.result.clone(),
        })
    }
}
