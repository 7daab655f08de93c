//! Numeric format templates and value formatting
//!
//! Parses `{:6.2f}`-style templates and formats real values in fixed,
//! scientific, or general notation. Scientific output follows the
//! `1.23e+04` convention (signed exponent, two digits minimum), and the
//! exponent marker can be rewritten into LaTeX math form.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::{RenderError, RenderResult};

lazy_static! {
    /// `{:[width][.precision][type]}` — the accepted template shape
    static ref TEMPLATE_RE: Regex =
        Regex::new(r"^\{:(?P<width>\d+)?(?:\.(?P<prec>\d+))?(?P<kind>[fFeEgG])?\}$").unwrap();

    /// Scientific-notation marker with its signed exponent, e.g. `e+04`
    static ref EXPONENT_RE: Regex = Regex::new(r"[eE](?P<exp>[+-]?\d+)").unwrap();
}

/// Numeric notation selected by the template's type character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `f` — fixed-point
    #[default]
    Fixed,
    /// `e` — scientific
    Scientific,
    /// `g` — general: fixed or scientific depending on magnitude
    General,
}

/// A parsed numeric format template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatSpec {
    /// Minimum field width; shorter results are left-padded with spaces
    pub width: usize,
    /// Digits after the point (fixed/scientific) or significant digits (general)
    pub precision: usize,
    pub notation: Notation,
    /// Emit `E` instead of `e` as the exponent marker
    pub uppercase: bool,
}

impl Default for FormatSpec {
    /// The default template, `{:1.2f}`
    fn default() -> Self {
        FormatSpec {
            width: 1,
            precision: 2,
            notation: Notation::Fixed,
            uppercase: false,
        }
    }
}

impl FormatSpec {
    /// Parse a `{:6.2f}`-style template
    ///
    /// Width and precision are both optional; the type character selects
    /// fixed (`f`), scientific (`e`), or general (`g`) notation, with the
    /// uppercase variants switching the exponent marker to `E`. A missing
    /// type character means fixed, a missing precision means 6.
    pub fn parse(template: &str) -> RenderResult<Self> {
        let caps = TEMPLATE_RE
            .captures(template.trim())
            .ok_or_else(|| RenderError::invalid_format(template))?;

        let width = match caps.name("width") {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| RenderError::invalid_format(template))?,
            None => 1,
        };
        let precision = match caps.name("prec") {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| RenderError::invalid_format(template))?,
            None => 6,
        };
        let (notation, uppercase) = match caps.name("kind").map(|m| m.as_str()) {
            None | Some("f") => (Notation::Fixed, false),
            Some("F") => (Notation::Fixed, true),
            Some("e") => (Notation::Scientific, false),
            Some("E") => (Notation::Scientific, true),
            Some("g") => (Notation::General, false),
            Some("G") => (Notation::General, true),
            Some(_) => return Err(RenderError::invalid_format(template)),
        };

        Ok(FormatSpec {
            width,
            precision,
            notation,
            uppercase,
        })
    }

    /// Format a real value under this spec, left-padding to the field width
    pub fn format(&self, value: f64) -> String {
        let body = match self.notation {
            Notation::Fixed => format!("{:.*}", self.precision, value),
            Notation::Scientific => scientific(value, self.precision, self.uppercase),
            Notation::General => general(value, self.precision, self.uppercase),
        };
        format!("{:>width$}", body, width = self.width)
    }
}

/// Scientific notation with a signed, zero-padded exponent: `4.56e+02`
fn scientific(value: f64, precision: usize, uppercase: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*e}", precision, value);
    let (mantissa, exp) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    format_exponent(mantissa, exp, uppercase)
}

/// General notation: fixed for exponents in `[-4, precision)`, scientific
/// otherwise, with trailing zeros stripped either way
fn general(value: f64, precision: usize, uppercase: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sig = precision.max(1);
    let raw = format!("{:.*e}", sig - 1, value);
    let (mantissa, exp) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp >= -4 && exp < sig as i32 {
        let frac_digits = (sig as i32 - 1 - exp).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", frac_digits, value))
    } else {
        format_exponent(&strip_trailing_zeros(mantissa), exp, uppercase)
    }
}

fn format_exponent(mantissa: &str, exp: i32, uppercase: bool) -> String {
    let marker = if uppercase { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, marker, sign, exp.abs())
}

/// Remove trailing fractional zeros and a dangling decimal point
fn strip_trailing_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Rewrite the scientific-notation marker into LaTeX math form:
/// `1.23e+04` becomes `1.23\times10^{+04}`
pub fn rewrite_exponent(text: &str) -> String {
    EXPONENT_RE
        .replace_all(text, r"\times10^{${exp}}")
        .to_string()
}
