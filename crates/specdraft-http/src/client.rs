//! HTTP client for the SpecDraft backend.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};

use specdraft_core::error::{InvalidInputError, RequestError, TransportError};
use specdraft_core::{ApiUrl, Error, Result, SessionStore};

use crate::error::{extract_detail, transport_error};

/// Body of an outgoing request. The variant decides the content type.
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

/// HTTP client bound to one backend base URL.
///
/// Reads the session store before every request and, when a credential is
/// present, sends it as `Authorization: Bearer <token>`. The store is never
/// written here.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
    store: Arc<dyn SessionStore>,
}

impl HttpClient {
    /// Create a new client for the given backend.
    pub fn new(api: ApiUrl, store: Arc<dyn SessionStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("specdraft/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, api, store })
    }

    /// Returns the backend URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Non-2xx responses become [`RequestError`] with the backend's detail
    /// when one can be extracted.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn request<R>(&self, method: Method, path: &str, body: RequestBody) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%method, %url, "Sending request");

        let builder = self.client.request(method, &url);
        let builder = self.authorize(builder)?;
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// POST a JSON body.
    pub async fn post_json<R>(&self, path: &str, body: serde_json::Value) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, RequestBody::Json(body)).await
    }

    /// POST a multipart form.
    pub async fn post_multipart<R>(&self, path: &str, form: Form) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, RequestBody::Multipart(form))
            .await
    }

    /// Attach the stored credential, if any.
    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = match self.store.get() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Failed to read session store, sending without credential");
                None
            }
        };

        let Some(token) = token else {
            trace!("No stored credential");
            return Ok(builder);
        };

        let mut value = HeaderValue::from_str(&token.bearer()).map_err(|_| {
            Error::from(InvalidInputError::Other {
                message: "stored session token contains invalid header characters".to_string(),
            })
        })?;
        value.set_sensitive(true);

        trace!("Attaching bearer credential");
        Ok(builder.header(AUTHORIZATION, value))
    }

    /// Handle a response, decoding the body or the error payload.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "Response received");

        let body = response.bytes().await.map_err(transport_error)?;

        if status.is_success() {
            serde_json::from_slice(&body).map_err(|e| {
                Error::Transport(TransportError::Decode {
                    message: e.to_string(),
                })
            })
        } else {
            let detail = extract_detail(&body);
            debug!(status = status.as_u16(), ?detail, "Backend rejected request");
            Err(Error::Request(RequestError::new(status.as_u16(), detail)))
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}
