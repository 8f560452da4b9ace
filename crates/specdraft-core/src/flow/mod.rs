//! User-facing flows and the root controller that composes them.

mod app;
mod auth;
mod generation;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{App, Screen};
pub use auth::{
    AUTH_FALLBACK_MESSAGE, AuthFlow, AuthMode, AuthState, AuthStatus, MISSING_TOKEN_MESSAGE,
    SIGNUP_NOTICE,
};
pub use generation::{GENERATION_FALLBACK_MESSAGE, GenerationFlow, GenerationState};
