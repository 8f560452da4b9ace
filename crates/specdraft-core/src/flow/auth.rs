//! Signup and login flow.
//!
//! [`AuthState`] holds the form and its status and moves between states
//! through consuming transition functions. [`AuthFlow`] drives those
//! transitions against a [`Backend`] and writes the session credential to
//! the [`SessionStore`] on a successful login.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::Credentials;
use crate::traits::{Backend, LoginOutput, SessionStore};

/// Shown when the backend gives no usable error detail.
pub const AUTH_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown after a successful signup.
pub const SIGNUP_NOTICE: &str = "Signup successful! Log in to continue.";

/// Shown when a login succeeds without returning a session credential.
pub const MISSING_TOKEN_MESSAGE: &str = "Login response did not include a session token.";

/// Which form is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Where the flow is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Submitting,
    Authenticated,
    AnonymousWithError(String),
}

impl AuthStatus {
    pub fn error(&self) -> Option<&str> {
        match self {
            AuthStatus::AnonymousWithError(message) => Some(message),
            _ => None,
        }
    }
}

/// Form contents plus status.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    mode: AuthMode,
    email: String,
    password: String,
    status: AuthStatus,
    notice: Option<String>,
}

impl AuthState {
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn status(&self) -> &AuthStatus {
        &self.status
    }

    /// Confirmation shown after signup, cleared by the next submission.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The submit control is enabled only while nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !matches!(
            self.status,
            AuthStatus::Submitting | AuthStatus::Authenticated
        )
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Switch between login and signup.
    ///
    /// Clears any error, the notice and the password. The email is kept.
    pub fn toggle_mode(mut self) -> Self {
        self.mode = self.mode.toggled();
        self.password.clear();
        self.notice = None;
        if let AuthStatus::AnonymousWithError(_) = self.status {
            self.status = AuthStatus::Anonymous;
        }
        self
    }

    /// Switch to `mode`, toggling only if it differs from the current one.
    pub fn with_mode(self, mode: AuthMode) -> Self {
        if self.mode == mode {
            self
        } else {
            self.toggle_mode()
        }
    }

    /// Start a submission.
    ///
    /// Returns the credentials to send, or `None` when the submit control is
    /// disabled or a required field is empty (the latter sets an error).
    pub fn begin_submit(mut self) -> (Self, Option<Credentials>) {
        if !self.can_submit() {
            return (self, None);
        }

        match Credentials::new(self.email.clone(), self.password.clone()) {
            Ok(credentials) => {
                self.status = AuthStatus::Submitting;
                self.notice = None;
                (self, Some(credentials))
            }
            Err(err) => {
                self.status = AuthStatus::AnonymousWithError(err.user_message(AUTH_FALLBACK_MESSAGE));
                (self, None)
            }
        }
    }

    /// Signup went through: back to the login form with the password cleared.
    pub fn signup_succeeded(mut self) -> Self {
        self.mode = AuthMode::Login;
        self.password.clear();
        self.status = AuthStatus::Anonymous;
        self.notice = Some(SIGNUP_NOTICE.to_string());
        self
    }

    /// Login went through and the credential is stored.
    pub fn login_succeeded(mut self) -> Self {
        self.password.clear();
        self.status = AuthStatus::Authenticated;
        self
    }

    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.status = AuthStatus::AnonymousWithError(message.into());
        self
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("mode", &self.mode)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("status", &self.status)
            .field("notice", &self.notice)
            .finish()
    }
}

/// Orchestrates signup and login requests.
pub struct AuthFlow {
    backend: Arc<dyn Backend>,
    store: Arc<dyn SessionStore>,
    state: AuthState,
}

impl AuthFlow {
    pub fn new(backend: Arc<dyn Backend>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            backend,
            store,
            state: AuthState::default(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn status(&self) -> &AuthStatus {
        &self.state.status
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.set_email(email);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.state.set_password(password);
    }

    pub fn toggle_mode(&mut self) {
        self.transition(AuthState::toggle_mode);
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.transition(|state| state.with_mode(mode));
    }

    /// Fill in the signup form and submit it.
    pub async fn signup(&mut self, email: &str, password: &str) -> &AuthStatus {
        self.set_mode(AuthMode::Signup);
        self.set_email(email);
        self.set_password(password);
        self.submit().await
    }

    /// Fill in the login form and submit it.
    pub async fn login(&mut self, email: &str, password: &str) -> &AuthStatus {
        self.set_mode(AuthMode::Login);
        self.set_email(email);
        self.set_password(password);
        self.submit().await
    }

    /// Submit the form in its current mode.
    #[instrument(skip(self), fields(mode = ?self.state.mode, email = %self.state.email))]
    pub async fn submit(&mut self) -> &AuthStatus {
        let (state, credentials) = std::mem::take(&mut self.state).begin_submit();
        self.state = state;

        let Some(credentials) = credentials else {
            debug!(status = ?self.state.status, "Submission not started");
            return &self.state.status;
        };

        match self.state.mode {
            AuthMode::Signup => match self.backend.signup(&credentials).await {
                Ok(_) => {
                    info!("Signup succeeded");
                    self.transition(AuthState::signup_succeeded);
                }
                Err(err) => {
                    debug!(error = %err, "Signup failed");
                    self.fail(err.user_message(AUTH_FALLBACK_MESSAGE));
                }
            },
            AuthMode::Login => match self.backend.login(&credentials).await {
                Ok(output) => self.complete_login(output),
                Err(err) => {
                    debug!(error = %err, "Login failed");
                    self.fail(err.user_message(AUTH_FALLBACK_MESSAGE));
                }
            },
        }

        &self.state.status
    }

    fn complete_login(&mut self, output: LoginOutput) {
        let Some(token) = output.access_token else {
            warn!("Login response carried no session token");
            self.fail(MISSING_TOKEN_MESSAGE);
            return;
        };

        match self.store.set(&token) {
            Ok(()) => {
                info!("Login succeeded");
                self.transition(AuthState::login_succeeded);
            }
            Err(err) => {
                warn!(error = %err, "Failed to store session");
                self.fail(err.user_message(AUTH_FALLBACK_MESSAGE));
            }
        }
    }

    fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.transition(|state| state.failed(message));
    }

    fn transition(&mut self, f: impl FnOnce(AuthState) -> AuthState) {
        self.state = f(std::mem::take(&mut self.state));
    }
}

impl fmt::Debug for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthFlow")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
