//! specdraft-file - Filesystem-backed session storage.

mod store;

pub use store::FileSessionStore;
