//! specdraft-core - Core types, traits and flows for the SpecDraft client.
//!
//! The client authenticates against the SpecDraft backend, keeps a single
//! bearer credential in a [`SessionStore`], and submits requirement notes to
//! be turned into developer specifications.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use specdraft_core::{App, Backend, MemorySessionStore};
//!
//! # async fn example(backend: Arc<dyn Backend>) {
//! let mut app = App::init(backend, Arc::new(MemorySessionStore::new()));
//! app.login("alice@example.com", "hunter22").await;
//!
//! if let Some(generator) = app.generator() {
//!     let state = generator
//!         .generate(Some("Users can reset password via email".into()), None)
//!         .await;
//!     println!("{:?}", state.result());
//! }
//! # }
//! ```

pub mod credentials;
pub mod error;
pub mod flow;
pub mod memory;
pub mod tokens;
pub mod traits;
pub mod types;
pub mod view;

pub use credentials::Credentials;
pub use error::Error;
pub use flow::{
    App, AuthFlow, AuthMode, AuthState, AuthStatus, GenerationFlow, GenerationState, Screen,
};
pub use memory::MemorySessionStore;
pub use tokens::AccessToken;
pub use traits::{Backend, GenerateOutput, LoginOutput, SessionStore, SignupOutput};
pub use types::{
    ApiEndpoint, ApiUrl, DEFAULT_API_URL, GenerationRequest, GenerationResult, TableSchema,
    UploadFile,
};
pub use view::{Section, SpecView};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
