//! Cell and grid data model
//!
//! A [`Grid`] is a rectangular block of [`Cell`]s; rectangularity is
//! enforced at construction so rendering never has to recover from ragged
//! input. A [`Table`] tags the grid as plain numeric data or as a labeled
//! table with header strings, and rendering dispatches on that tag.

use num_complex::Complex64;

use crate::utils::error::{RenderError, RenderResult};

/// How a 1-D sequence is laid out on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// A single row (the default)
    #[default]
    Row,
    /// A single column
    Column,
}

/// A single grid entry
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A real value
    Real(f64),
    /// A complex value, rendered as `re + imj`
    Complex(Complex64),
    /// Pre-formatted text; only legal in labeled tables
    Text(String),
}

impl Cell {
    /// The real component used for sign-placeholder decisions
    pub fn real_part(&self) -> Option<f64> {
        match self {
            Cell::Real(x) => Some(*x),
            Cell::Complex(z) => Some(z.re),
            Cell::Text(_) => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Real(value)
    }
}

impl From<Complex64> for Cell {
    fn from(value: Complex64) -> Self {
        Cell::Complex(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// A rectangular block of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    n_cols: usize,
}

impl Grid {
    /// Build a grid from rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> RenderResult<Self> {
        let n_cols = rows.first().map_or(0, |row| row.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(RenderError::malformed(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
        }
        Ok(Grid { rows, n_cols })
    }

    /// Build a grid of real values
    pub fn from_reals(rows: &[Vec<f64>]) -> RenderResult<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(Cell::from).collect())
                .collect(),
        )
    }

    /// Build a grid from flat storage plus an explicit shape
    ///
    /// Shapes of zero or one dimension normalize to a single row; a
    /// two-dimensional shape splits the storage row-major. Anything
    /// higher-dimensional is rejected.
    pub fn from_flat(cells: Vec<Cell>, shape: &[usize]) -> RenderResult<Self> {
        match *shape {
            [] => Self::from_rows(if cells.is_empty() {
                Vec::new()
            } else {
                vec![cells]
            }),
            [n] => {
                if cells.len() != n {
                    return Err(RenderError::malformed(format!(
                        "shape [{}] does not match {} cells",
                        n,
                        cells.len()
                    )));
                }
                Ok(Grid::from_vector(cells, Orientation::Row))
            }
            [r, c] => {
                if cells.len() != r * c {
                    return Err(RenderError::malformed(format!(
                        "shape [{}, {}] does not match {} cells",
                        r,
                        c,
                        cells.len()
                    )));
                }
                let rows = cells
                    .chunks(c.max(1))
                    .map(|chunk| chunk.to_vec())
                    .collect();
                Self::from_rows(rows)
            }
            _ => Err(RenderError::invalid_dimension(shape.len())),
        }
    }

    /// Normalize a 1-D sequence to a single row or a single column
    pub fn from_vector(cells: Vec<Cell>, orientation: Orientation) -> Self {
        if cells.is_empty() {
            return Grid {
                rows: Vec::new(),
                n_cols: 0,
            };
        }
        match orientation {
            Orientation::Row => {
                let n_cols = cells.len();
                Grid {
                    rows: vec![cells],
                    n_cols,
                }
            }
            Orientation::Column => Grid {
                rows: cells.into_iter().map(|cell| vec![cell]).collect(),
                n_cols: 1,
            },
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A grid with column headers and row labels
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledGrid {
    pub grid: Grid,
    pub col_labels: Vec<String>,
    pub row_labels: Vec<String>,
}

impl LabeledGrid {
    /// Pair a grid with its labels, validating the counts
    pub fn new(
        grid: Grid,
        col_labels: Vec<String>,
        row_labels: Vec<String>,
    ) -> RenderResult<Self> {
        if col_labels.len() != grid.n_cols() {
            return Err(RenderError::malformed(format!(
                "{} column labels for {} columns",
                col_labels.len(),
                grid.n_cols()
            )));
        }
        if row_labels.len() != grid.n_rows() {
            return Err(RenderError::malformed(format!(
                "{} row labels for {} rows",
                row_labels.len(),
                grid.n_rows()
            )));
        }
        Ok(LabeledGrid {
            grid,
            col_labels,
            row_labels,
        })
    }
}

/// A table tagged by its rendering layout
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    /// Bare numbers, rendered inside a matrix-like environment
    Numeric(Grid),
    /// Labeled data, rendered as a ruled tabular
    Labeled(LabeledGrid),
}

impl From<Grid> for Table {
    fn from(grid: Grid) -> Self {
        Table::Numeric(grid)
    }
}

impl From<LabeledGrid> for Table {
    fn from(labeled: LabeledGrid) -> Self {
        Table::Labeled(labeled)
    }
}
