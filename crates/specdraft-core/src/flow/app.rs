//! Root controller.
//!
//! Chooses between the auth and generation screens from session presence
//! and owns logout.

use std::sync::Arc;

use tracing::{info, warn};

use super::auth::{AuthFlow, AuthStatus};
use super::generation::GenerationFlow;
use crate::Result;
use crate::traits::{Backend, SessionStore};

/// The screen currently shown.
#[derive(Debug)]
pub enum Screen {
    Auth(AuthFlow),
    Generator(GenerationFlow),
}

/// Composes the session store, the backend and the two flows.
pub struct App {
    backend: Arc<dyn Backend>,
    store: Arc<dyn SessionStore>,
    screen: Screen,
}

impl App {
    /// Start the application from whatever the session store holds.
    ///
    /// A stored credential is trusted without contacting the backend. A store
    /// that cannot be read is treated as empty.
    pub fn init(backend: Arc<dyn Backend>, store: Arc<dyn SessionStore>) -> Self {
        let authenticated = match store.is_present() {
            Ok(present) => present,
            Err(err) => {
                warn!(error = %err, "Failed to read session store, starting anonymous");
                false
            }
        };

        let screen = if authenticated {
            Screen::Generator(GenerationFlow::new(backend.clone()))
        } else {
            Screen::Auth(AuthFlow::new(backend.clone(), store.clone()))
        };

        Self {
            backend,
            store,
            screen,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.screen, Screen::Generator(_))
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The auth flow, when the user is anonymous.
    pub fn auth(&mut self) -> Option<&mut AuthFlow> {
        match &mut self.screen {
            Screen::Auth(flow) => Some(flow),
            Screen::Generator(_) => None,
        }
    }

    /// The generation flow, when the user is authenticated.
    pub fn generator(&mut self) -> Option<&mut GenerationFlow> {
        match &mut self.screen {
            Screen::Generator(flow) => Some(flow),
            Screen::Auth(_) => None,
        }
    }

    /// Submit the auth form, switching to the generator on login.
    ///
    /// Returns `None` if the user is already authenticated.
    pub async fn submit_auth(&mut self) -> Option<AuthStatus> {
        let flow = self.auth()?;
        let status = flow.submit().await.clone();
        self.on_auth_status(&status);
        Some(status)
    }

    /// Log in with the given credentials.
    ///
    /// Returns `None` if the user is already authenticated.
    pub async fn login(&mut self, email: &str, password: &str) -> Option<AuthStatus> {
        let flow = self.auth()?;
        let status = flow.login(email, password).await.clone();
        self.on_auth_status(&status);
        Some(status)
    }

    /// Create an account. Never authenticates the session.
    ///
    /// Returns `None` if the user is already authenticated.
    pub async fn signup(&mut self, email: &str, password: &str) -> Option<AuthStatus> {
        let flow = self.auth()?;
        Some(flow.signup(email, password).await.clone())
    }

    /// Clear the session and return to the auth screen.
    ///
    /// The transition happens even if clearing the store fails; the error is
    /// still returned so callers can report it.
    pub fn logout(&mut self) -> Result<()> {
        let cleared = self.store.clear();
        if let Err(ref err) = cleared {
            warn!(error = %err, "Failed to clear session store");
        }

        self.screen = Screen::Auth(AuthFlow::new(self.backend.clone(), self.store.clone()));
        info!("Logged out");
        cleared
    }

    fn on_auth_status(&mut self, status: &AuthStatus) {
        if *status == AuthStatus::Authenticated {
            self.screen = Screen::Generator(GenerationFlow::new(self.backend.clone()));
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}
