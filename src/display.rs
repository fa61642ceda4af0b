//! Utilities for displaying fitted polynomials
//!
//! Every basis knows how to render one of its terms; [`PolynomialDisplay::format_polynomial`]
//! stitches the terms together into `y(x) = ...`, highest degree first.
//!
//! # Helpers
//! - [`format_coefficient`]: Formats a numeric coefficient, skipping zeros.
//! - [`format_variable`]: Attaches subscripts and superscript exponents to a variable name.
#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

use crate::value::Value;

pub mod unicode;

/// Default precision for formatting used by the provided implementations of [`PolynomialDisplay`]
pub const DEFAULT_PRECISION: usize = 2;

/// Range in which coefficients are written in fixed notation
fn fixed_range<T: Value>() -> Option<std::ops::Range<T>> {
    let start = T::try_cast(1e-3).ok()?;
    let end = T::try_cast(1e3).ok()?;
    Some(start..end)
}

/// Trait for formatting polynomial expressions.
///
/// Implementors control how individual terms are rendered; the provided
/// [`PolynomialDisplay::format_polynomial`] assembles them into a full equation.
pub trait PolynomialDisplay<T: Value> {
    /// Formats a single polynomial term for display.
    ///
    /// Returning `None` indicates the term should be skipped
    /// (typically when the coefficient is zero).
    fn format_term(&self, degree: i32, coef: T) -> Option<Term>;

    /// Formats the change of variable applied before evaluating the basis, if any.
    fn format_scaling_formula(&self) -> Option<String> {
        None
    }

    /// Writes the full polynomial expression into the provided buffer.
    ///
    /// `coefficients[i]` is the coefficient of basis function `i`. Output is prefixed
    /// with `y(x) = `, highest degree first, and zero terms are skipped.
    ///
    /// # Errors
    /// Returns an error if writing to `buffer` fails.
    fn format_polynomial<W: std::fmt::Write>(
        &self,
        buffer: &mut W,
        coefficients: &[T],
    ) -> std::fmt::Result {
        let mut terms = coefficients
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(degree, &coef)| self.format_term(degree as i32, coef));

        if let Some(scaling) = self.format_scaling_formula() {
            write!(buffer, "{scaling}, ")?;
        }

        write!(buffer, "y(x) = ")?;
        let Some(first) = terms.next() else {
            return write!(buffer, "0");
        };

        if first.sign == Sign::Negative {
            write!(buffer, "{}", first.sign.char())?;
        }
        write!(buffer, "{}", first.body)?;

        for term in terms {
            write!(buffer, " {} {}", term.sign.char(), term.body)?;
        }

        Ok(())
    }
}

/// Sign of a polynomial term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}

impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// ```
    /// # use biasvar::display::Sign;
    /// assert_eq!(Sign::from_coef(3.0), Sign::Positive);
    /// assert_eq!(Sign::from_coef(-2.0), Sign::Negative);
    /// ```
    pub fn from_coef<T: Value>(coef: T) -> Self {
        if Value::is_sign_negative(&coef) {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the character representation of the sign.
    #[must_use]
    pub fn char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// A single rendered term: its sign, and the body without the sign (e.g. `"2.00x²"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The sign of the term
    pub sign: Sign,

    /// The body of the term
    pub body: String,
}

impl Term {
    /// Creates a new polynomial term with the given sign and body.
    #[must_use]
    pub fn new(sign: Sign, body: String) -> Self {
        Self { sign, body }
    }
}

/// Formats the magnitude of a coefficient for display in a polynomial term.
///
/// - Returns `None` if the coefficient is zero or effectively zero (≤ epsilon).
/// - Returns an empty string for a unit coefficient on a non-constant term (`x` rather than `1.00x`).
/// - Formats as a decimal if the magnitude is between `1e-3` and `1e3`, in scientific notation otherwise.
///
/// ```
/// # use biasvar::display::format_coefficient;
/// assert_eq!(format_coefficient(0.0, 1, 2), None);
/// assert_eq!(format_coefficient(-2.5, 1, 2), Some("2.50".to_string()));
/// assert_eq!(format_coefficient(1e5, 1, 2), Some("1.00e5".to_string()));
/// ```
pub fn format_coefficient<T: Value>(coef: T, degree: i32, precision: usize) -> Option<String> {
    let abs = Value::abs(coef);
    if abs <= T::epsilon() {
        return None;
    }

    if Value::abs_sub(abs, T::one()) <= T::epsilon() && degree != 0 {
        return Some(String::new());
    }

    Some(unicode::float(abs, fixed_range(), precision))
}

/// Formats the variable part of a term: name, optional subscript, and exponent.
///
/// An exponent of 0 gives an empty string, 1 gives the bare name.
///
/// ```
/// # use biasvar::display::format_variable;
/// assert_eq!(format_variable("x", None, 0), "");
/// assert_eq!(format_variable("x", None, 1), "x");
/// assert_eq!(format_variable("x", Some("1"), 2), "x₁²");
/// ```
#[must_use]
pub fn format_variable(base: &str, subscript: Option<&str>, exp: i32) -> String {
    match exp {
        0 => String::new(),
        1 => base.to_string(),
        _ => {
            let lbl = unicode::subscript(subscript.unwrap_or_default());
            let sup = unicode::superscript(&exp.to_string());
            format!("{base}{lbl}{sup}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainPowers;
    impl PolynomialDisplay<f64> for PlainPowers {
        fn format_term(&self, degree: i32, coef: f64) -> Option<Term> {
            let coef_str = format_coefficient(coef, degree, DEFAULT_PRECISION)?;
            let body = format!("{coef_str}{}", format_variable("x", None, degree));
            Some(Term::new(Sign::from_coef(coef), body))
        }
    }

    fn render(coefs: &[f64]) -> String {
        let mut buf = String::new();
        PlainPowers.format_polynomial(&mut buf, coefs).unwrap();
        buf
    }

    #[test]
    fn highest_degree_first() {
        assert_eq!(render(&[2.0, -3.0, 0.0, 4.0]), "y(x) = 4.00x³ - 3.00x + 2.00");
    }

    #[test]
    fn all_zero() {
        assert_eq!(render(&[0.0, 0.0, 0.0]), "y(x) = 0");
        assert_eq!(render(&[]), "y(x) = 0");
    }

    #[test]
    fn leading_negative_and_unit_coefficients() {
        assert_eq!(render(&[1.0, -1.0]), "y(x) = -x + 1.00");
        assert_eq!(render(&[0.0, 0.0, 5.0]), "y(x) = 5.00x²");
    }

    #[test]
    fn tiny_coefficients_skipped() {
        assert_eq!(format_coefficient(1e-20, 1, 2), None);
        assert_eq!(format_coefficient(1e-5, 2, 2), Some("1.00e-5".to_string()));
    }
}
