//! arraytex CLI - render numeric arrays as LaTeX matrices and tabulars

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
use arraytex::{Cell, Grid, Orientation, RenderOptions, Table, TextClipboard};

#[cfg(feature = "cli")]
use num_complex::Complex64;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "a2t")]
#[command(version)]
#[command(about = "Render numeric arrays as LaTeX matrices and tabulars", long_about = None)]
struct Cli {
    /// Input file with one row of numbers per line (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Numeric format template, e.g. "{:6.2f}" or "{:.3g}"
    #[arg(short, long, default_value = "{:1.2f}")]
    format: String,

    /// LaTeX environment name, or "coords" for a coordinate list
    #[arg(short, long, default_value = "bmatrix")]
    environment: String,

    /// Imaginary-unit suffix for complex entries
    #[arg(short, long, default_value = "j")]
    imaginary_unit: String,

    /// Render single-row input as a column
    #[arg(short, long)]
    column: bool,

    /// Keep the plain e+NN marker instead of rewriting into \times10^{..}
    #[arg(short = 'p', long)]
    plain_exponent: bool,

    /// Copy the rendered markup to the system clipboard
    #[arg(long)]
    copy: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let table = match parse_table(&input, cli.column) {
        Ok(table) => table,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    let options = RenderOptions {
        environment: cli.environment.clone(),
        imaginary_unit: cli.imaginary_unit.chars().next().unwrap_or('j'),
        orientation: if cli.column {
            Orientation::Column
        } else {
            Orientation::Row
        },
        rewrite_exponent: !cli.plain_exponent,
    };

    let result = match arraytex::to_latex(&table, &cli.format, &options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.copy {
        copy_to_clipboard(&result);
    }

    // Output; the markup already carries its trailing newline
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            write!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            print!("{}", result);
        }
    }

    Ok(())
}

/// Parse whitespace-separated rows of real or complex numbers
#[cfg(feature = "cli")]
fn parse_table(input: &str, column: bool) -> Result<Table, String> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            row.push(parse_cell(token).ok_or_else(|| {
                format!("line {}: cannot parse '{}' as a number", line_no + 1, token)
            })?);
        }
        rows.push(row);
    }

    if rows.len() == 1 && column {
        let cells = rows.into_iter().next().unwrap_or_default();
        return Ok(Table::Numeric(Grid::from_vector(cells, Orientation::Column)));
    }

    Grid::from_rows(rows)
        .map(Table::Numeric)
        .map_err(|e| e.to_string())
}

#[cfg(feature = "cli")]
fn parse_cell(token: &str) -> Option<Cell> {
    if let Ok(x) = token.parse::<f64>() {
        return Some(Cell::Real(x));
    }
    // Accept the engineering convention "1+2j" alongside "1+2i"
    let normalized = token.replace('j', "i");
    normalized.parse::<Complex64>().ok().map(Cell::Complex)
}

#[cfg(feature = "cli")]
fn copy_to_clipboard(markup: &str) {
    #[cfg(feature = "clipboard")]
    let mut clipboard = arraytex::SystemClipboard::new();
    #[cfg(not(feature = "clipboard"))]
    let mut clipboard = arraytex::NoopClipboard;

    match clipboard.copy_text(markup) {
        Ok(()) => eprintln!("✓ Copied to clipboard"),
        Err(e) => eprintln!("Warning: {}", e),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install arraytex --features cli");
    eprintln!("  a2t [OPTIONS] [INPUT_FILE]");
}
