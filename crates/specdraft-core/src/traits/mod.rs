//! Core traits for session storage and backend access.

mod backend;
mod session_store;

pub use backend::{Backend, GenerateOutput, LoginOutput, SignupOutput};
pub use session_store::SessionStore;
