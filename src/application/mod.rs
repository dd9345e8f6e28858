//! # Application Layer
//!
//! Prompt construction and the per-request flows that tie the completion
//! client to the response parser.

pub mod interfaces;
pub mod prompts;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
