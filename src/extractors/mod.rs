//! Request extractors: the per-request store session and rejection-mapping wrappers.

mod rejection;
mod session;

pub use rejection::{ValidJson, ValidPath, ValidQuery};
pub use session::Session;
