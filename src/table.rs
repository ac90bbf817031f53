//! Two-column text tables of `(x, y)` samples.
//!
//! The format is a header line `x\t\ty` followed by one line per sample,
//! with both columns in C-style scientific notation (`%e`) and separated
//! by two tabs:
//!
//! ```text
//! x		y
//! 0.000000e+00		1.000000e+01
//! 1.000000e+00		1.000000e+01
//! ```
use std::io::{self, BufRead, Write};

use itertools::Itertools;

const HEADER: &str = "x\t\ty";
const SEPARATOR: &str = "\t\t";

/// Format a value like C's `%e`: six digits after the decimal point
/// and an exponent with an explicit sign and at least two digits.
pub fn format_sci(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let s = format!("{v:.6e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => s,
    }
}

/// Write samples as a table, header first.
///
/// # Errors
/// * If `x` and `y` differ in length
/// * If writing to the sink fails
pub fn write_table<W: Write>(sink: &mut W, x: &[f64], y: &[f64]) -> io::Result<()> {
    if x.len() != y.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Length mismatch: {} x values, {} y values", x.len(), y.len()),
        ));
    }

    writeln!(sink, "{HEADER}")?;
    for (&xi, &yi) in x.iter().zip_eq(y) {
        writeln!(sink, "{}{SEPARATOR}{}", format_sci(xi), format_sci(yi))?;
    }
    sink.flush()
}

/// Read a table written by [`write_table`], skipping the header line and any blank lines.
///
/// # Errors
/// * If reading fails
/// * If a line does not hold two parseable columns
pub fn read_table<R: BufRead>(reader: R) -> io::Result<(Vec<f64>, Vec<f64>)> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (lineno, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let bad_line = || {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Bad table entry at line {}: {line:?}", lineno + 1),
            )
        };
        let (xs, ys) = line.split_once(SEPARATOR).ok_or_else(bad_line)?;
        x.push(xs.trim().parse::<f64>().map_err(|_| bad_line())?);
        y.push(ys.trim().parse::<f64>().map_err(|_| bad_line())?);
    }

    Ok((x, y))
}
