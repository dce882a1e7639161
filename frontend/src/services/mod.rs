//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - multipart file upload to the `/upload` endpoint

pub mod upload;

pub use upload::*;
