//! Custom extractors for Axum handlers.
//!
//! These keep request decoding failures on the shared error body.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
