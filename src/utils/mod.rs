//! Utilities
//!
//! Error types and input validation shared by every layer.

pub mod errors;
pub mod validation;

pub use errors::AppError;
