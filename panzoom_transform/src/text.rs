// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Textual transform codec.
//!
//! Grammar, after trimming surrounding whitespace:
//! - `none` (any ASCII case): the identity matrix.
//! - `matrix(a, b, c, d, e, f)`: six numbers inside `matrix( … )`.
//! - `a b c d e f` or `a, b, c, d, e, f`: six bare numbers separated by
//!   commas and/or whitespace.
//!
//! Numbers are formatted with six fractional digits and trailing zeros
//! trimmed, so parsing a formatted matrix reproduces it within `1e-6`.

use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::Affine;

/// Number of fractional digits kept when formatting matrix components.
const PRECISION: usize = 6;

/// Error returned when a textual transform cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or whitespace only.
    Empty,
    /// A `matrix(` prefix was not followed by a matching `)`.
    UnbalancedParen,
    /// A transform function other than `matrix()` was used.
    UnsupportedFunction,
    /// Two separating commas with nothing between them.
    EmptyComponent {
        /// Zero-based position of the missing component.
        index: usize,
    },
    /// A component was not a number.
    InvalidNumber {
        /// Zero-based position of the offending component.
        index: usize,
    },
    /// A component parsed to infinity or NaN.
    NonFinite {
        /// Zero-based position of the offending component.
        index: usize,
    },
    /// The input did not contain exactly six components.
    WrongCount {
        /// Number of components found.
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty transform"),
            Self::UnbalancedParen => f.write_str("unbalanced parenthesis in matrix()"),
            Self::UnsupportedFunction => f.write_str("only matrix() transforms are supported"),
            Self::EmptyComponent { index } => write!(f, "component {index} is empty"),
            Self::InvalidNumber { index } => write!(f, "component {index} is not a number"),
            Self::NonFinite { index } => write!(f, "component {index} is not finite"),
            Self::WrongCount { found } => {
                write!(f, "expected 6 matrix components, found {found}")
            }
        }
    }
}

impl core::error::Error for ParseError {}

/// Parses a textual transform into a matrix.
///
/// See the module docs for the accepted grammar.
pub fn parse_transform(input: &str) -> Result<Affine, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    if text.eq_ignore_ascii_case("none") {
        return Ok(Affine::IDENTITY);
    }

    let body = match strip_matrix_prefix(text) {
        Some(rest) => {
            let inner = rest
                .trim_start()
                .strip_prefix('(')
                .and_then(|inner| inner.strip_suffix(')'))
                .ok_or(ParseError::UnbalancedParen)?;
            if inner.contains(['(', ')']) {
                return Err(ParseError::UnbalancedParen);
            }
            inner
        }
        None if text.contains(['(', ')']) => return Err(ParseError::UnsupportedFunction),
        None => text,
    };

    let mut coeffs = [0.0; 6];
    let mut found = 0;
    let has_commas = body.contains(',');
    for part in body.split(',') {
        let mut tokens = part.split_ascii_whitespace().peekable();
        if has_commas && tokens.peek().is_none() {
            return Err(ParseError::EmptyComponent { index: found });
        }
        for token in tokens {
            let value: f64 = token
                .parse()
                .map_err(|_| ParseError::InvalidNumber { index: found })?;
            if !value.is_finite() {
                return Err(ParseError::NonFinite { index: found });
            }
            if let Some(slot) = coeffs.get_mut(found) {
                *slot = value;
            }
            found += 1;
        }
    }
    if found != 6 {
        return Err(ParseError::WrongCount { found });
    }
    Ok(Affine::new(coeffs))
}

fn strip_matrix_prefix(text: &str) -> Option<&str> {
    const PREFIX: &str = "matrix";
    let head = text.get(..PREFIX.len())?;
    head.eq_ignore_ascii_case(PREFIX).then(|| &text[PREFIX.len()..])
}

/// Formats a single matrix component.
///
/// Six fractional digits, trailing zeros and a trailing dot trimmed, and
/// negative zero printed as `0`.
#[must_use]
pub fn format_component(value: f64) -> String {
    let mut out = format!("{:.*}", PRECISION, value);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out.remove(0);
    }
    out
}

/// Formats all six components of `matrix`, in `[a, b, c, d, e, f]` order.
#[must_use]
pub fn format_components(matrix: &Affine) -> [String; 6] {
    matrix.as_coeffs().map(format_component)
}

/// Formats `matrix` as `matrix(a, b, c, d, e, f)`.
#[must_use]
pub fn to_css(matrix: &Affine) -> String {
    let [a, b, c, d, e, f] = format_components(matrix);
    format!("matrix({a}, {b}, {c}, {d}, {e}, {f})")
}

#[cfg(test)]
mod tests {
    use kurbo::Affine;

    use super::{ParseError, format_component, format_components, parse_transform, to_css};

    #[test]
    fn none_is_identity() {
        assert_eq!(parse_transform("none"), Ok(Affine::IDENTITY));
        assert_eq!(parse_transform("  NONE\n"), Ok(Affine::IDENTITY));
    }

    #[test]
    fn matrix_function_syntax() {
        let m = parse_transform("matrix(2, 0, 0, 2, -15.5, 30)").unwrap();
        assert_eq!(m.as_coeffs(), [2.0, 0.0, 0.0, 2.0, -15.5, 30.0]);

        let m = parse_transform("MATRIX ( 1 0 0 1 5 6 )").unwrap();
        assert_eq!(m.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 5.0, 6.0]);
    }

    #[test]
    fn bare_lists() {
        let spaced = parse_transform("1 0 0 1 10 -10").unwrap();
        let commas = parse_transform("1,0,0,1,10,-10").unwrap();
        let mixed = parse_transform("1, 0 , 0,1,  10 ,-10").unwrap();
        assert_eq!(spaced, commas);
        assert_eq!(commas, mixed);
        assert_eq!(mixed.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 10.0, -10.0]);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_transform(""), Err(ParseError::Empty));
        assert_eq!(parse_transform("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_transform("matrix(1, 0, 0, 1, 0, 0"),
            Err(ParseError::UnbalancedParen)
        );
        assert_eq!(
            parse_transform("1, 0,, 1, 0, 0"),
            Err(ParseError::EmptyComponent { index: 2 })
        );
        assert_eq!(
            parse_transform("1 0 zero 1 0 0"),
            Err(ParseError::InvalidNumber { index: 2 })
        );
        assert_eq!(
            parse_transform("1 0 0 inf 0 0"),
            Err(ParseError::NonFinite { index: 3 })
        );
        assert_eq!(
            parse_transform("1 0 0 1 0"),
            Err(ParseError::WrongCount { found: 5 })
        );
        assert_eq!(
            parse_transform("1 0 0 1 0 0 7"),
            Err(ParseError::WrongCount { found: 7 })
        );
        assert_eq!(
            parse_transform("translate(10px, 20px)"),
            Err(ParseError::UnsupportedFunction)
        );
    }

    #[test]
    fn component_formatting() {
        assert_eq!(format_component(1.0), "1");
        assert_eq!(format_component(-10.0), "-10");
        assert_eq!(format_component(0.5), "0.5");
        assert_eq!(format_component(1.0 / 3.0), "0.333333");
        assert_eq!(format_component(-0.0), "0");
        assert_eq!(format_component(-0.000_000_1), "0");
        assert_eq!(format_component(120.25), "120.25");
    }

    #[test]
    fn css_form_parses_back() {
        let m = Affine::new([1.25, 0.0, 0.0, 0.75, -3.125, 48.0]);
        let css = to_css(&m);
        assert_eq!(css, "matrix(1.25, 0, 0, 0.75, -3.125, 48)");
        assert_eq!(parse_transform(&css), Ok(m));
    }

    #[test]
    fn formatted_components_are_within_precision() {
        let m = Affine::new([1.0 / 3.0, 0.0, 0.0, 2.0 / 3.0, 1e-7, -12.345_678_9]);
        let joined = format_components(&m).join(" ");
        let back = parse_transform(&joined).unwrap();
        for (x, y) in m.as_coeffs().iter().zip(back.as_coeffs()) {
            assert!((x - y).abs() <= 1e-6, "{x} vs {y}");
        }
    }
}
