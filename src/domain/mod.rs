//! # Domain Layer
//!
//! Request/response models and the text extraction that turns free-form
//! model output into structured fields. Nothing here performs I/O.

mod error;
pub mod models;
pub mod parsing;

pub use error::*;
pub use models::*;
