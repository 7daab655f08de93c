//! # arraytex
//!
//! Render numeric arrays and labeled tables as LaTeX matrices and tabulars.
//!
//! ## Features
//!
//! - **Matrix environments**: `bmatrix`, `pmatrix`, `array` (with its column
//!   spec), or any name
//! - **Coordinate lists**: the `coords` environment emits `{(1.23,23.46),...}`
//! - **Labeled tabulars**: column headers, row labels, ruled layout
//! - **Format templates**: `{:6.2f}`-style fixed, scientific, and general notation
//! - **Complex numbers**: `re + imj` rendering with a selectable imaginary unit
//! - **Alignment**: sign placeholders and decimal-point padding keep columns lined up
//! - **Exponent rewriting**: `1.23e+04` → `1.23\times10^{+04}`, on by default
//! - **Clipboard**: injected capability, degrades to a warning when unavailable
//!
//! ## Usage Examples
//!
//! ### Matrix rendering
//!
//! ```rust
//! use arraytex::matrix_to_latex;
//!
//! let latex = matrix_to_latex(&[vec![1.0, -1.0]]).unwrap();
//! assert_eq!(latex, "\\begin{bmatrix}\n 1.00 & -1.00\\\\\n\\end{bmatrix}\n");
//! ```
//!
//! ### Custom format and environment
//!
//! ```rust
//! use arraytex::{to_latex, Grid, RenderOptions, Table};
//!
//! let grid = Grid::from_reals(&[vec![1.23456, 23.45678], vec![456.23, 8.239521]]).unwrap();
//! let latex = to_latex(
//!     &Table::Numeric(grid),
//!     "{:6.2f}",
//!     &RenderOptions::environment("array"),
//! )
//! .unwrap();
//! assert!(latex.starts_with("\\begin{array}{ c, c}\n"));
//! assert!(latex.contains(" 456.23 &    8.24\\\\"));
//! ```
//!
//! ### Copying to a clipboard
//!
//! ```rust
//! use arraytex::{to_clipboard, Grid, MemoryClipboard, RenderOptions, Table};
//!
//! let table = Table::Numeric(Grid::from_reals(&[vec![1.0]]).unwrap());
//! let mut clipboard = MemoryClipboard::new();
//! let output =
//!     to_clipboard(&table, "{:1.2f}", &RenderOptions::default(), &mut clipboard).unwrap();
//! assert!(!output.has_warnings());
//! assert_eq!(clipboard.contents(), Some(output.content.as_str()));
//! ```

/// Core rendering modules
pub mod core;

/// Feature modules - optional collaborators
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the core model and renderer
pub use core::format::{rewrite_exponent, FormatSpec, Notation};
pub use core::grid::{Cell, Grid, LabeledGrid, Orientation, Table};
pub use core::render::{render, RenderOptions};

// Re-export the clipboard capability
pub use features::clipboard::{MemoryClipboard, NoopClipboard, TextClipboard};

#[cfg(feature = "clipboard")]
pub use features::clipboard::SystemClipboard;

// Re-export utilities
pub use utils::error::{RenderError, RenderOutput, RenderResult, RenderWarning};

/// Render a table under a `{:6.2f}`-style format template
///
/// # Arguments
/// * `table` - numeric grid or labeled table
/// * `template` - numeric format template
/// * `options` - environment, imaginary unit, orientation, exponent rewriting
///
/// # Returns
/// The LaTeX markup, ending in exactly one newline
pub fn to_latex(table: &Table, template: &str, options: &RenderOptions) -> RenderResult<String> {
    let spec = FormatSpec::parse(template)?;
    render(table, &spec, options)
}

/// Render a 2-D grid of reals with the default template and environment
pub fn matrix_to_latex(rows: &[Vec<f64>]) -> RenderResult<String> {
    let table = Table::Numeric(Grid::from_reals(rows)?);
    render(&table, &FormatSpec::default(), &RenderOptions::default())
}

/// Render a 1-D sequence of reals as a single row or column
pub fn vector_to_latex(values: &[f64], orientation: Orientation) -> RenderResult<String> {
    let cells = values.iter().copied().map(Cell::from).collect();
    let table = Table::Numeric(Grid::from_vector(cells, orientation));
    render(&table, &FormatSpec::default(), &RenderOptions::default())
}

/// Render a table and place the markup on the given clipboard
///
/// An unavailable clipboard is not an error: the markup is still returned,
/// with a warning attached describing why the copy was skipped.
pub fn to_clipboard(
    table: &Table,
    template: &str,
    options: &RenderOptions,
    clipboard: &mut dyn TextClipboard,
) -> RenderResult<RenderOutput> {
    let content = to_latex(table, template, options)?;
    match clipboard.copy_text(&content) {
        Ok(()) => Ok(RenderOutput::new(content)),
        Err(RenderError::ClipboardUnavailable { message }) => Ok(RenderOutput::with_warnings(
            content,
            vec![RenderWarning::with_suggestion(
                format!("clipboard copy skipped: {}", message),
                "use the returned string instead",
            )],
        )),
        Err(other) => Err(other),
    }
}
