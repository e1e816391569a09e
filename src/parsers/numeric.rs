//! Fault-tolerant numeric literal coercion
//!
//! The grammars are deliberately narrow. Integers are an optional sign and
//! base-10 digits only, floats are the usual decimal/scientific forms plus the
//! `inf`, `infinity` and `nan` special values in any case.

// internal modules
use crate::error::{Error, Result};

// external crates
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::number::complete::recognize_float;
use nom::sequence::pair;
use nom::IResult;

/// Parse a field to an integer
///
/// Accepts an optional leading `+`/`-` followed by at least one digit. Values
/// that do not fit in an `i64` are rejected rather than wrapped.
///
/// ```rust
/// # use mesh2dm::parsers::string_to_integer;
/// assert_eq!(string_to_integer("+42").unwrap(), 42);
/// assert_eq!(string_to_integer("-7").unwrap(), -7);
/// assert!(string_to_integer("4.2").is_err());
/// ```
pub fn string_to_integer(field: &str) -> Result<i64> {
    let (_, literal) =
        integer_literal(field).map_err(|_| Error::IntegerLiteral(field.to_string()))?;
    literal
        .parse::<i64>()
        .map_err(|_| Error::IntegerLiteral(field.to_string()))
}

/// Parse a field to a double precision float
///
/// ```rust
/// # use mesh2dm::parsers::string_to_float;
/// assert_eq!(string_to_float("-1.5e3").unwrap(), -1500.0);
/// assert_eq!(string_to_float(".5").unwrap(), 0.5);
/// assert!(string_to_float("Infinity").unwrap().is_infinite());
/// assert!(string_to_float("1,5").is_err());
/// ```
pub fn string_to_float(field: &str) -> Result<f64> {
    if let Ok((_, special)) = special_float(field) {
        return Ok(special);
    }

    let (_, literal) =
        float_literal(field).map_err(|_| Error::FloatLiteral(field.to_string()))?;
    literal
        .parse::<f64>()
        .map_err(|_| Error::FloatLiteral(field.to_string()))
}

/// Recognise `[+-]?[0-9]+` spanning the whole input
fn integer_literal(i: &str) -> IResult<&str, &str> {
    all_consuming(recognize(pair(opt(one_of("+-")), digit1)))(i)
}

/// Recognise a decimal or scientific literal spanning the whole input
fn float_literal(i: &str) -> IResult<&str, &str> {
    all_consuming(recognize_float)(i)
}

/// Signed `inf`, `infinity` and `nan` in any case
fn special_float(i: &str) -> IResult<&str, f64> {
    let (i, sign) = opt(one_of("+-"))(i)?;
    let (i, word) = all_consuming(alt((
        tag_no_case("infinity"),
        tag_no_case("inf"),
        tag_no_case("nan"),
    )))(i)?;

    let value = match word.to_ascii_lowercase().as_str() {
        "nan" => f64::NAN,
        _ => f64::INFINITY,
    };

    match sign {
        Some('-') => Ok((i, -value)),
        _ => Ok((i, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("17", 17)]
    #[case("+17", 17)]
    #[case("-17", -17)]
    #[case("007", 7)]
    #[case("9223372036854775807", i64::MAX)]
    #[case("-9223372036854775808", i64::MIN)]
    fn valid_integers(#[case] field: &str, #[case] expected: i64) {
        assert_eq!(string_to_integer(field).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("+")]
    #[case("-")]
    #[case("1.0")]
    #[case("1e3")]
    #[case("1_000")]
    #[case("12a")]
    #[case("0x10")]
    #[case("--1")]
    #[case("9223372036854775808")]
    #[case("-9223372036854775809")]
    fn invalid_integers(#[case] field: &str) {
        let error = string_to_integer(field).unwrap_err();
        assert_eq!(error, Error::IntegerLiteral(field.to_string()));
        assert_eq!(error.kind(), ErrorKind::NumericLiteral);
    }

    #[rstest]
    #[case("1", 1.0)]
    #[case("1.", 1.0)]
    #[case(".25", 0.25)]
    #[case("-0.5", -0.5)]
    #[case("+2.5", 2.5)]
    #[case("1e3", 1000.0)]
    #[case("1.5E-2", 0.015)]
    #[case("-2.0e+01", -20.0)]
    #[case("5.00000000e-01", 0.5)]
    fn valid_floats(#[case] field: &str, #[case] expected: f64) {
        assert_eq!(string_to_float(field).unwrap(), expected);
    }

    #[rstest]
    #[case("inf", f64::INFINITY)]
    #[case("-INF", f64::NEG_INFINITY)]
    #[case("Infinity", f64::INFINITY)]
    #[case("+infinity", f64::INFINITY)]
    fn infinite_floats(#[case] field: &str, #[case] expected: f64) {
        assert_eq!(string_to_float(field).unwrap(), expected);
    }

    #[rstest]
    #[case("nan")]
    #[case("NaN")]
    #[case("-nan")]
    fn nan_floats(#[case] field: &str) {
        assert!(string_to_float(field).unwrap().is_nan());
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("e5")]
    #[case("1e")]
    #[case("1.2.3")]
    #[case("1,5")]
    #[case("infinit")]
    #[case("nana")]
    #[case("0x1p3")]
    #[case("abc")]
    fn invalid_floats(#[case] field: &str) {
        assert_eq!(
            string_to_float(field).unwrap_err(),
            Error::FloatLiteral(field.to_string())
        );
    }
}
