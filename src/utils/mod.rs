//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Non-fatal warning carriers

pub mod error;

// Re-export commonly used items
pub use error::{RenderError, RenderOutput, RenderResult, RenderWarning};
