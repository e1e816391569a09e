//! Common small functions used throughout the crate
//!
//! These are left public for the convenience of the user. For example
//! stripping comments from a line or using 2DM-style formatting for
//! scientific numbers.

use std::fmt::LowerExp;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumberFmt {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// Works for anything that can be represented as scientific using the
    /// LowerExp trait. Values without an exponent (`inf`, `NaN`) are returned
    /// unchanged.
    ///
    /// ```rust
    /// # use mesh2dm::utils::NumberFmt;
    /// let number: f64 = -1.0;
    /// assert_eq!(number.sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(1.0_f64.sci(5, 2), "1.00000e+00".to_string());
    /// assert_eq!(f64::INFINITY.sci(5, 2), "inf".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumberFmt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        let exp = match num.find('e') {
            Some(position) => num.split_off(position),
            None => return num,
        };
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

/// Format a coordinate or float material the way 2DM files usually do
///
/// Scientific with `decimals` decimal places and a two digit exponent.
/// Non-negative values get a leading space so that columns line up with
/// negative ones.
///
/// ```rust
/// # use mesh2dm::utils::format_float;
/// assert_eq!(format_float(0.5, 8), " 5.00000000e-01");
/// assert_eq!(format_float(-1250.0, 3), "-1.250e+03");
/// ```
pub fn format_float(value: f64, decimals: usize) -> String {
    let prefix = if value >= 0.0 { " " } else { "" };
    f!("{prefix}{}", value.sci(decimals, 2))
}

/// Data portion of a line, without comments or surrounding whitespace
///
/// ```rust
/// # use mesh2dm::utils::clean_line;
/// assert_eq!(clean_line("  MESH2D # written by hand\n"), "MESH2D");
/// assert_eq!(clean_line("#comment only"), "");
/// ```
pub fn clean_line(line: &str) -> &str {
    match line.split_once('#') {
        Some((data, _)) => data.trim(),
        None => line.trim(),
    }
}

/// Strip one pair of surrounding double quotes, if present
///
/// ```rust
/// # use mesh2dm::utils::unquote;
/// assert_eq!(unquote("\"Inflow\""), "Inflow");
/// assert_eq!(unquote("Outflow"), "Outflow");
/// ```
pub fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_exponents() {
        assert_eq!(1.0e100_f64.sci(2, 2), "1.00e+100");
        assert_eq!(1.0e-5_f64.sci(1, 3), "1.0e-005");
        assert_eq!(f64::NAN.sci(3, 2), "NaN");
    }

    #[test]
    fn floats() {
        assert_eq!(format_float(0.0, 2), " 0.00e+00");
        assert_eq!(format_float(f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn quotes() {
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"half"), "\"half");
    }
}
