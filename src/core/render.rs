//! Matrix, tabular, and coordinate-list renderers
//!
//! Walks a [`Table`] row-major and assembles the markup column-by-column,
//! joining cells with `&` and terminating every row with `\\`. Numeric
//! cells get a sign placeholder so minus signs line up, and cells whose
//! formatted text has no decimal point get one trailing pad space. The
//! `coords` environment skips all of that and emits bare tuples.

use std::fmt::Write;

use crate::core::format::{rewrite_exponent, FormatSpec};
use crate::core::grid::{Cell, Grid, LabeledGrid, Orientation, Table};
use crate::utils::error::{RenderError, RenderResult};

/// Options controlling the rendered markup
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Environment name for numeric tables, e.g. `bmatrix` or `array`
    pub environment: String,
    /// Suffix for imaginary components
    pub imaginary_unit: char,
    /// Layout for 1-D input
    pub orientation: Orientation,
    /// Rewrite `e+NN` into `\times10^{+NN}` (on by default)
    pub rewrite_exponent: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            environment: "bmatrix".to_string(),
            imaginary_unit: 'j',
            orientation: Orientation::Row,
            rewrite_exponent: true,
        }
    }
}

impl RenderOptions {
    /// Options with a different environment name, defaults otherwise
    pub fn environment(name: impl Into<String>) -> Self {
        RenderOptions {
            environment: name.into(),
            ..Default::default()
        }
    }
}

/// Render a table under the given format spec and options
///
/// Dispatches on the table tag: numeric grids become a matrix-like
/// environment (or a coordinate list when the environment is `coords`),
/// labeled grids a ruled tabular.
pub fn render(table: &Table, spec: &FormatSpec, options: &RenderOptions) -> RenderResult<String> {
    match table {
        Table::Numeric(grid) if options.environment == "coords" => {
            render_coords(grid, spec, options)
        }
        Table::Numeric(grid) => render_matrix(grid, spec, options),
        Table::Labeled(labeled) => render_tabular(labeled, spec, options),
    }
}

fn render_matrix(grid: &Grid, spec: &FormatSpec, options: &RenderOptions) -> RenderResult<String> {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\\begin{{{}}}{}",
        options.environment,
        column_spec(&options.environment, grid.n_cols())
    );

    for (i, row) in grid.rows().iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len());
        for (j, cell) in row.iter().enumerate() {
            cells.push(format_numeric_cell(cell, i, j, spec, options)?);
        }
        let _ = writeln!(out, "{}\\\\", cells.join(" & "));
    }

    let _ = writeln!(out, "\\end{{{}}}", options.environment);
    Ok(out)
}

/// The `array` environment requires a column layout, `{ c, c}` per its
/// width; bracket environments carry none
fn column_spec(environment: &str, n_cols: usize) -> String {
    if environment == "array" {
        format!("{{{}}}", vec![" c"; n_cols].join(","))
    } else {
        String::new()
    }
}

/// Coordinate-list layout: one parenthesized tuple per row, comma-joined
/// and wrapped in braces, e.g. `{(1.23,23.46),(456.23,8.24)}`. No sign
/// placeholder or decimal padding applies here.
fn render_coords(grid: &Grid, spec: &FormatSpec, options: &RenderOptions) -> RenderResult<String> {
    let mut tuples = Vec::with_capacity(grid.n_rows());
    for (i, row) in grid.rows().iter().enumerate() {
        let mut values = Vec::with_capacity(row.len());
        for (j, cell) in row.iter().enumerate() {
            let text = match cell {
                Cell::Real(x) => formatted(*x, spec, options),
                Cell::Complex(z) => format!(
                    "{} + {}{}",
                    formatted(z.re, spec, options),
                    formatted(z.im, spec, options),
                    options.imaginary_unit
                ),
                Cell::Text(_) => {
                    return Err(RenderError::unsupported_cell(
                        i,
                        j,
                        "text cell in a coordinate list",
                    ))
                }
            };
            values.push(text);
        }
        tuples.push(format!("({})", values.join(",")));
    }
    Ok(format!("{{{}}}\n", tuples.join(",")))
}

fn render_tabular(
    labeled: &LabeledGrid,
    spec: &FormatSpec,
    options: &RenderOptions,
) -> RenderResult<String> {
    let grid = &labeled.grid;
    let label_width = labeled
        .row_labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    // Widest text cell per column, for left-aligned padding
    let mut text_widths = vec![0usize; grid.n_cols()];
    for row in grid.rows() {
        for (j, cell) in row.iter().enumerate() {
            if let Cell::Text(s) = cell {
                text_widths[j] = text_widths[j].max(s.chars().count());
            }
        }
    }

    let mut out = String::new();
    let cols: String = "r".repeat(grid.n_cols());
    let _ = writeln!(out, "\\begin{{tabular}}{{l{}}}", cols);
    let _ = writeln!(out, "\\toprule");

    // Column labels behind a blank label column
    let mut header = vec![format!("{:width$}", "", width = label_width)];
    header.extend(labeled.col_labels.iter().cloned());
    let _ = writeln!(out, "{}\\\\", header.join(" & "));
    let _ = writeln!(out, "\\midrule");

    for (i, row) in grid.rows().iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len() + 1);
        cells.push(format!(
            "{:<width$}",
            labeled.row_labels[i],
            width = label_width
        ));
        for (j, cell) in row.iter().enumerate() {
            let text = match cell {
                Cell::Text(s) => format!("{:<width$}", s, width = text_widths[j]),
                _ => format_numeric_cell(cell, i, j, spec, options)?,
            };
            cells.push(text);
        }
        let _ = writeln!(out, "{}\\\\", cells.join(" & "));
    }

    let _ = writeln!(out, "\\bottomrule");
    let _ = writeln!(out, "\\end{{tabular}}");
    Ok(out)
}

/// Format one numeric cell: sign placeholder, formatted value, optional
/// imaginary part, decimal-alignment padding
fn format_numeric_cell(
    cell: &Cell,
    row: usize,
    col: usize,
    spec: &FormatSpec,
    options: &RenderOptions,
) -> RenderResult<String> {
    let mut text = match cell {
        Cell::Real(x) => {
            format!("{}{}", sign_placeholder(*x), formatted(*x, spec, options))
        }
        Cell::Complex(z) => {
            format!(
                "{}{} + {}{}",
                sign_placeholder(z.re),
                formatted(z.re, spec, options),
                formatted(z.im, spec, options),
                options.imaginary_unit
            )
        }
        Cell::Text(_) => {
            return Err(RenderError::unsupported_cell(
                row,
                col,
                "text cell in a numeric table",
            ))
        }
    };

    // Cells without a decimal point get one pad space so siblings align
    if !text.contains('.') {
        text.push(' ');
    }
    Ok(text)
}

/// A negative real part brings its own minus sign; everything else gets a
/// space in that column
fn sign_placeholder(real: f64) -> &'static str {
    if real < 0.0 {
        ""
    } else {
        " "
    }
}

fn formatted(value: f64, spec: &FormatSpec, options: &RenderOptions) -> String {
    let text = spec.format(value);
    if options.rewrite_exponent {
        rewrite_exponent(&text)
    } else {
        text
    }
}
