use nalgebra::MatrixViewMut;

use crate::{
    basis::Basis,
    display::{self, PolynomialDisplay, Sign, DEFAULT_PRECISION},
    value::Value,
};

/// Standard (non-normalized) monomial basis: `1, x, x², …, xⁿ`.
///
/// These are the plain polynomial features. Coefficients read directly as the
/// polynomial `c₀ + c₁x + c₂x² + …`, which makes fits easy to interpret, at the cost
/// of numerical conditioning for high degrees.
///
/// Inputs are not centered or scaled. On a domain far from zero, such as `[100, 101]`, the
/// columns `1, x, x²` are nearly parallel and the solve loses precision: even a noise-free
/// polynomial target of the fitted degree comes out with visible bias and variance.
/// Use [`ChebyshevBasis`](crate::basis::ChebyshevBasis) there, which maps the domain
/// onto `[-1, 1]` first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonomialBasis<T: Value = f64>(std::marker::PhantomData<T>);
impl<T: Value> MonomialBasis<T> {
    /// Creates a new monomial basis.
    #[must_use]
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

fn power<T: Value>(x: T, j: usize) -> T {
    match j {
        0 => T::one(),
        1 => x,
        _ => Value::powi(x, i32::try_from(j).unwrap_or(i32::MAX)),
    }
}

impl<T: Value> Basis<T> for MonomialBasis<T> {
    fn from_range(_x_range: std::ops::RangeInclusive<T>) -> Self {
        Self::new()
    }

    fn name(&self) -> &'static str {
        "monomial"
    }

    #[inline(always)]
    fn fill_matrix_row<R: nalgebra::Dim, C: nalgebra::Dim, RS: nalgebra::Dim, CS: nalgebra::Dim>(
        &self,
        start_index: usize,
        x: T,
        mut row: MatrixViewMut<T, R, C, RS, CS>,
    ) {
        for j in start_index..row.ncols() {
            row[j] = match j {
                0 => T::one(),
                _ if j > start_index && j > 0 => row[j - 1] * x,
                _ => power(x, j),
            };
        }
    }

    #[inline(always)]
    fn normalize_x(&self, x: T) -> T {
        x
    }

    #[inline(always)]
    fn solve_function(&self, j: usize, x: T) -> T {
        power(x, j)
    }

    /// Horner's method
    fn evaluate(&self, coefficients: &[T], x: T) -> T {
        coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }
}

impl<T: Value> PolynomialDisplay<T> for MonomialBasis<T> {
    fn format_term(&self, degree: i32, coef: T) -> Option<display::Term> {
        let sign = Sign::from_coef(coef);

        let base = display::format_variable("x", None, degree);
        let coef = display::format_coefficient(coef, degree, DEFAULT_PRECISION)?;

        Some(display::Term::new(sign, format!("{coef}{base}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, assert_close, basis::polynomial_features};

    #[test]
    fn vandermonde_rows() {
        let basis = MonomialBasis::new();
        let m = polynomial_features(&[2.0, -1.0], 4, &basis).unwrap();
        let row0: Vec<f64> = m.row(0).iter().copied().collect();
        let row1: Vec<f64> = m.row(1).iter().copied().collect();
        assert_all_close!(row0, [1.0, 2.0, 4.0, 8.0, 16.0]);
        assert_all_close!(row1, [1.0, -1.0, 1.0, -1.0, 1.0]);
    }

    #[test]
    fn partial_row_fill() {
        let basis = MonomialBasis::new();
        let mut m = nalgebra::DMatrix::from_element(1, 4, -7.0);
        basis.fill_matrix_row(2, 3.0, m.row_mut(0));
        let row: Vec<f64> = m.row(0).iter().copied().collect();
        assert_all_close!(row, [-7.0, -7.0, 9.0, 27.0]);
    }

    #[test]
    fn horner_matches_basis_sum() {
        let basis = MonomialBasis::new();
        let coefs = [1.0, -2.0, 0.5, 3.0];
        let x = 1.7;
        let direct: f64 = coefs
            .iter()
            .enumerate()
            .map(|(j, c)| c * basis.solve_function(j, x))
            .sum();
        assert_close!(basis.evaluate(&coefs, x), direct, 1e-12);
    }

    #[test]
    fn display() {
        let mut buf = String::new();
        MonomialBasis::new()
            .format_polynomial(&mut buf, &[-5.0, 3.0, 2.0])
            .unwrap();
        assert_eq!(buf, "y(x) = 2.00x² + 3.00x - 5.00");
    }
}
