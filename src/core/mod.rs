//! Core rendering modules
//!
//! This module contains the conversion engine:
//! - `grid`: cell and grid data model
//! - `format`: numeric format templates
//! - `render`: matrix and tabular renderers

pub mod format;
pub mod grid;
pub mod render;

// Re-export main types and functions
pub use format::{rewrite_exponent, FormatSpec, Notation};
pub use grid::{Cell, Grid, LabeledGrid, Orientation, Table};
pub use render::{render, RenderOptions};
