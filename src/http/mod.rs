//! HTTP Protocol types.
mod method;
mod status;
mod version;

pub use method::{Method, UnknownMethod};
pub use version::Version;
pub use status::StatusCode;
