//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the upload backend.

pub mod server;
pub mod types;

pub use server::{analyze_upload, build_router, serve, start_server};
pub use types::*;
