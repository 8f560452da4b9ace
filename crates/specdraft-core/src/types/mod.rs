//! Core SpecDraft types.
//!
//! Construction-time validation keeps invalid requests and URLs from
//! reaching the network.

mod api_url;
mod request;
mod result;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use request::{GenerationRequest, UploadFile};
pub use result::{ApiEndpoint, GenerationResult, TableSchema};
