//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion clients (OpenAI-compatible HTTP, canned mock)
//! - HTTP API (axum router, controllers, dependency container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
