//! specdraft-http - HTTP-backed SpecDraft backend.

mod backend;
mod client;
mod endpoints;
mod error;

pub use backend::HttpBackend;
pub use client::{HttpClient, RequestBody};
pub use endpoints::{FILE_FIELD, GENERATE, LOGIN, RAW_TEXT_FIELD, SIGNUP};
