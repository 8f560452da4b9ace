//! HTTP implementation of the backend trait.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use specdraft_core::error::TransportError;
use specdraft_core::{
    AccessToken, ApiUrl, Backend, Credentials, Error, GenerateOutput, GenerationRequest,
    LoginOutput, Result, SessionStore, SignupOutput,
};

use crate::client::HttpClient;
use crate::endpoints::*;

/// The SpecDraft backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: HttpClient,
}

impl HttpBackend {
    /// Create a backend for `api`, authorizing requests from `store`.
    pub fn new(api: ApiUrl, store: Arc<dyn SessionStore>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(api, store)?,
        })
    }

    /// Returns the backend URL.
    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }

    fn auth_body(credentials: &Credentials) -> Result<serde_json::Value> {
        let request = AuthRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        serde_json::to_value(&request).map_err(|e| {
            Error::Transport(TransportError::Http {
                message: e.to_string(),
            })
        })
    }

    fn generation_form(request: &GenerationRequest) -> Result<Form> {
        let mut form = Form::new();

        if let Some(text) = request.text() {
            form = form.text(RAW_TEXT_FIELD, text.to_string());
        }

        if let Some(file) = request.file() {
            let part = Part::bytes(file.bytes().to_vec())
                .file_name(file.file_name().to_string())
                .mime_str(file.content_type())
                .map_err(|e| {
                    Error::Transport(TransportError::Http {
                        message: e.to_string(),
                    })
                })?;
            form = form.part(FILE_FIELD, part);
        }

        Ok(form)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    async fn signup(&self, credentials: &Credentials) -> Result<SignupOutput> {
        debug!("Creating account");
        let response: SignupResponse = self
            .client
            .post_json(SIGNUP, Self::auth_body(credentials)?)
            .await?;

        Ok(SignupOutput {
            message: response.message,
        })
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutput> {
        debug!("Creating session");
        let response: LoginResponse = self
            .client
            .post_json(LOGIN, Self::auth_body(credentials)?)
            .await?;

        let access_token = response
            .session
            .and_then(|session| session.access_token)
            .filter(|token| !token.is_empty())
            .map(AccessToken::new);

        Ok(LoginOutput {
            message: response.message,
            access_token,
        })
    }

    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateOutput> {
        debug!(
            has_text = request.text().is_some(),
            file = request.file().map(|f| f.file_name()),
            "Submitting requirements"
        );
        let form = Self::generation_form(request)?;
        let response: GenerateResponse = self.client.post_multipart(GENERATE, form).await?;

        Ok(GenerateOutput {
            message: response.message,
            result: response.data.unwrap_or_default(),
        })
    }
}
