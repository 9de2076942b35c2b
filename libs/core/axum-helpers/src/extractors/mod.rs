//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with an [`AppError`](crate::AppError), so a bad
//! request never produces a body.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
