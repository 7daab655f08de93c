//! Error handling for table rendering
//!
//! This module provides a unified error type and result type for all
//! rendering operations, plus non-fatal warning carriers.

use std::fmt;

/// Rendering error type
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Input has more than two dimensions
    InvalidDimension { ndim: usize },
    /// Rows of unequal length, or labels that do not match the grid shape
    MalformedGrid { message: String },
    /// A cell that the selected layout cannot render
    UnsupportedCell {
        row: usize,
        col: usize,
        detail: String,
    },
    /// Format template could not be parsed
    InvalidFormat { template: String },
    /// Clipboard backend missing or failed (non-fatal at the API surface)
    ClipboardUnavailable { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidDimension { ndim } => {
                write!(
                    f,
                    "Invalid dimension: expected at most 2 dimensions, got {}",
                    ndim
                )
            }
            RenderError::MalformedGrid { message } => {
                write!(f, "Malformed grid: {}", message)
            }
            RenderError::UnsupportedCell { row, col, detail } => {
                write!(f, "Unsupported cell at ({}, {}): {}", row, col, detail)
            }
            RenderError::InvalidFormat { template } => {
                write!(f, "Invalid format template: '{}'", template)
            }
            RenderError::ClipboardUnavailable { message } => {
                write!(f, "Clipboard unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Rendering warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq)]
pub struct RenderWarning {
    pub message: String,
    pub suggestion: Option<String>,
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: {}", self.message)?;
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Rendered markup with optional warnings
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The rendered markup
    pub content: String,
    /// Any warnings generated while producing or delivering it
    pub warnings: Vec<RenderWarning>,
}

impl RenderOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<RenderWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl RenderError {
    pub fn invalid_dimension(ndim: usize) -> Self {
        RenderError::InvalidDimension { ndim }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        RenderError::MalformedGrid {
            message: message.into(),
        }
    }

    pub fn unsupported_cell(row: usize, col: usize, detail: impl Into<String>) -> Self {
        RenderError::UnsupportedCell {
            row,
            col,
            detail: detail.into(),
        }
    }

    pub fn invalid_format(template: impl Into<String>) -> Self {
        RenderError::InvalidFormat {
            template: template.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        RenderError::ClipboardUnavailable {
            message: message.into(),
        }
    }
}

impl RenderWarning {
    pub fn new(message: impl Into<String>) -> Self {
        RenderWarning {
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        RenderWarning {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}
