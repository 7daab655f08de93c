//! Integration tests for arraytex rendering

use arraytex::{
    matrix_to_latex, to_clipboard, to_latex, vector_to_latex, Cell, Grid, LabeledGrid,
    MemoryClipboard, NoopClipboard, Orientation, RenderError, RenderOptions, Table,
};
use num_complex::Complex64;
use pretty_assertions::assert_eq;

fn numeric(rows: &[Vec<f64>]) -> Table {
    Table::Numeric(Grid::from_reals(rows).unwrap())
}

// ============================================================================
// Matrix rendering
// ============================================================================

mod matrix_rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed_width_scenario() {
        let table = numeric(&[vec![1.23456, 23.45678], vec![456.23, 8.239521]]);
        let latex = to_latex(&table, "{:6.2f}", &RenderOptions::environment("array")).unwrap();
        assert_eq!(
            latex,
            "\\begin{array}{ c, c}\n   1.23 &   23.46\\\\\n 456.23 &    8.24\\\\\n\\end{array}\n"
        );
    }

    #[test]
    fn test_default_environment_is_bmatrix() {
        let latex = matrix_to_latex(&[vec![1.0]]).unwrap();
        assert!(latex.starts_with("\\begin{bmatrix}\n"));
        assert!(latex.ends_with("\\end{bmatrix}\n"));
    }

    #[test]
    fn test_scientific_notation_rewritten_by_default() {
        let table = numeric(&[vec![1.23456, 23.45678], vec![456.23, 8.239521]]);
        let latex = to_latex(&table, "{:6.2e}", &RenderOptions::environment("array")).unwrap();
        assert!(latex.contains("1.23\\times10^{+00}"));
        assert!(latex.contains("2.35\\times10^{+01}"));
        assert!(latex.contains("4.56\\times10^{+02}"));
        assert!(latex.contains("8.24\\times10^{+00}"));
    }

    #[test]
    fn test_scientific_notation_plain_markers() {
        let table = numeric(&[vec![1.23456, 23.45678], vec![456.23, 8.239521]]);
        let options = RenderOptions {
            environment: "array".to_string(),
            rewrite_exponent: false,
            ..Default::default()
        };
        let latex = to_latex(&table, "{:6.2e}", &options).unwrap();
        assert!(latex.contains("1.23e+00"));
        assert!(latex.contains("2.35e+01"));
        assert!(latex.contains("4.56e+02"));
        assert!(latex.contains("8.24e+00"));
    }

    #[test]
    fn test_general_notation_matches_doctest_values() {
        let table = numeric(&[vec![1.23456, 23.45678], vec![456.23, 8.239521]]);
        let latex = to_latex(&table, "{:.3g}", &RenderOptions::environment("array")).unwrap();
        assert_eq!(
            latex,
            "\\begin{array}{ c, c}\n 1.23 &  23.5\\\\\n 456  &  8.24\\\\\n\\end{array}\n"
        );
    }

    #[test]
    fn test_terminators_and_separators_count() {
        for (rows, cols) in [(1usize, 1usize), (2, 3), (4, 2)] {
            let data: Vec<Vec<f64>> = (0..rows)
                .map(|i| (0..cols).map(|j| (i * cols + j) as f64).collect())
                .collect();
            let latex = matrix_to_latex(&data).unwrap();
            assert_eq!(latex.matches("\\\\\n").count(), rows, "rows {}x{}", rows, cols);
            for line in latex.lines().filter(|l| l.ends_with("\\\\")) {
                assert_eq!(line.matches(" & ").count(), cols - 1);
            }
        }
    }

    #[test]
    fn test_column_widths_align_with_signs() {
        let table = numeric(&[vec![1.2, -3.4], vec![-5.6, 7.8]]);
        let latex = to_latex(&table, "{:1.2f}", &RenderOptions::default()).unwrap();
        let body: Vec<&str> = latex
            .lines()
            .filter(|l| l.ends_with("\\\\"))
            .map(|l| l.trim_end_matches("\\\\"))
            .collect();
        let widths: Vec<Vec<usize>> = body
            .iter()
            .map(|row| row.split(" & ").map(|cell| cell.len()).collect())
            .collect();
        assert_eq!(widths[0], widths[1]);
    }

    #[test]
    fn test_rendering_is_byte_identical_across_runs() {
        let table = numeric(&[vec![1.23456, 23.45678], vec![456.23, 8.239521]]);
        let options = RenderOptions::default();
        let first = to_latex(&table, "{:6.2f}", &options).unwrap();
        let second = to_latex(&table, "{:6.2f}", &options).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Exponent rewriting
// ============================================================================

mod exponent_rewriting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rewrites_marker_by_default() {
        let table = numeric(&[vec![12345.6789]]);
        let latex = to_latex(&table, "{:1.2e}", &RenderOptions::default()).unwrap();
        assert!(latex.contains("1.23\\times10^{+04}"));
        assert!(!latex.contains("e+04"));
    }

    #[test]
    fn test_leaves_marker_when_disabled() {
        let table = numeric(&[vec![12345.6789]]);
        let options = RenderOptions {
            rewrite_exponent: false,
            ..Default::default()
        };
        let latex = to_latex(&table, "{:1.2e}", &options).unwrap();
        assert!(latex.contains("1.23e+04"));
        assert!(!latex.contains("\\times"));
    }
}

// ============================================================================
// Coordinate lists
// ============================================================================

mod coordinate_lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coords_environment() {
        let table = numeric(&[vec![1.23456, 23.45678], vec![456.23, 8.239521]]);
        let latex = to_latex(&table, "{:1.2f}", &RenderOptions::environment("coords")).unwrap();
        assert_eq!(latex, "{(1.23,23.46),(456.23,8.24)}\n");
    }

    #[test]
    fn test_coords_single_row() {
        let table = numeric(&[vec![1.0, -2.0]]);
        let latex = to_latex(&table, "{:1.2f}", &RenderOptions::environment("coords")).unwrap();
        assert_eq!(latex, "{(1.00,-2.00)}\n");
    }
}

// ============================================================================
// 1-D orientation
// ============================================================================

mod orientation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_orientation() {
        let latex = vector_to_latex(&[1.0, 2.0, 3.0], Orientation::Row).unwrap();
        assert_eq!(
            latex,
            "\\begin{bmatrix}\n 1.00 &  2.00 &  3.00\\\\\n\\end{bmatrix}\n"
        );
    }

    #[test]
    fn test_column_orientation() {
        let latex = vector_to_latex(&[1.0, 2.0, 3.0], Orientation::Column).unwrap();
        assert_eq!(
            latex,
            "\\begin{bmatrix}\n 1.00\\\\\n 2.00\\\\\n 3.00\\\\\n\\end{bmatrix}\n"
        );
    }
}

// ============================================================================
// Complex numbers
// ============================================================================

mod complex_numbers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_imaginary_symbol_per_complex_cell() {
        let grid = Grid::from_rows(vec![vec![
            Cell::Complex(Complex64::new(1.0, 2.0)),
            Cell::Complex(Complex64::new(3.0, -4.0)),
        ]])
        .unwrap();
        let latex = to_latex(
            &Table::Numeric(grid),
            "{:1.2f}",
            &RenderOptions::environment("array"),
        )
        .unwrap();
        let body = latex.lines().nth(1).unwrap();
        assert_eq!(body.matches('j').count(), 2);
        assert_eq!(body, " 1.00 + 2.00j &  3.00 + -4.00j\\\\");
    }

    #[test]
    fn test_imaginary_unit_follows_number_without_space() {
        let grid = Grid::from_rows(vec![vec![Cell::Complex(Complex64::new(0.5, 1.5))]]).unwrap();
        let options = RenderOptions {
            imaginary_unit: 'i',
            environment: "array".to_string(),
            ..Default::default()
        };
        let latex = to_latex(&Table::Numeric(grid), "{:1.2f}", &options).unwrap();
        assert!(latex.contains("1.50i"));
        assert!(!latex.contains("1.50 i"));
    }
}

// ============================================================================
// Labeled tabulars
// ============================================================================

mod labeled_tables {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ruled_layout_with_labels() {
        let grid = Grid::from_reals(&[vec![1.0, 2.5], vec![3.25, 4.0]]).unwrap();
        let labeled = LabeledGrid::new(
            grid,
            vec!["alpha".to_string(), "beta".to_string()],
            vec!["one".to_string(), "two".to_string()],
        )
        .unwrap();
        let latex = to_latex(
            &Table::Labeled(labeled),
            "{:1.2f}",
            &RenderOptions::default(),
        )
        .unwrap();

        assert!(latex.starts_with("\\begin{tabular}{lrr}\n"));
        assert!(latex.ends_with("\\bottomrule\n\\end{tabular}\n"));
        assert_eq!(latex.matches("\\toprule\n").count(), 1);
        assert_eq!(latex.matches("\\midrule\n").count(), 1);
        assert_eq!(latex.matches("\\bottomrule\n").count(), 1);
        assert!(latex.contains("    & alpha & beta\\\\\n"));
        assert!(latex.contains("one &  1.00 &  2.50\\\\\n"));
        assert!(latex.contains("two &  3.25 &  4.00\\\\\n"));
    }

    #[test]
    fn test_text_cells_bypass_numeric_formatting() {
        let grid = Grid::from_rows(vec![
            vec![Cell::from("pending"), Cell::from(0.5)],
            vec![Cell::from("done"), Cell::from(-1.5)],
        ])
        .unwrap();
        let labeled = LabeledGrid::new(
            grid,
            vec!["state".to_string(), "score".to_string()],
            vec!["a".to_string(), "b".to_string()],
        )
        .unwrap();
        let latex = to_latex(
            &Table::Labeled(labeled),
            "{:1.2f}",
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(latex.contains("a & pending &  0.50\\\\\n"));
        assert!(latex.contains("b & done    & -1.50\\\\\n"));
    }
}

// ============================================================================
// Validation
// ============================================================================

mod validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_dimensions_rejected() {
        let cells: Vec<Cell> = (0..8).map(|n| Cell::from(n as f64)).collect();
        let err = Grid::from_flat(cells, &[2, 2, 2]).unwrap_err();
        assert_eq!(err, RenderError::InvalidDimension { ndim: 3 });
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_reals(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, RenderError::MalformedGrid { .. }));
    }

    #[test]
    fn test_text_cell_in_numeric_table_rejected() {
        let grid = Grid::from_rows(vec![vec![Cell::from("oops")]]).unwrap();
        let err = to_latex(
            &Table::Numeric(grid),
            "{:1.2f}",
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedCell { .. }));
    }

    #[test]
    fn test_bad_template_rejected() {
        let table = numeric(&[vec![1.0]]);
        let err = to_latex(&table, "{:q}", &RenderOptions::default()).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidFormat {
                template: "{:q}".to_string()
            }
        );
    }
}

// ============================================================================
// Clipboard collaborator
// ============================================================================

mod clipboard {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_copy_delivers_rendered_markup() {
        let table = numeric(&[vec![1.0, 2.0]]);
        let mut clipboard = MemoryClipboard::new();
        let output =
            to_clipboard(&table, "{:1.2f}", &RenderOptions::default(), &mut clipboard).unwrap();
        assert!(!output.has_warnings());
        assert_eq!(clipboard.contents(), Some(output.content.as_str()));
    }

    #[test]
    fn test_unavailable_clipboard_still_returns_markup() {
        let table = numeric(&[vec![1.0, 2.0]]);
        let mut clipboard = NoopClipboard;
        let output =
            to_clipboard(&table, "{:1.2f}", &RenderOptions::default(), &mut clipboard).unwrap();
        assert!(output.has_warnings());
        assert!(output.warnings[0].message.contains("clipboard"));
        assert!(output.content.starts_with("\\begin{bmatrix}"));
    }
}
