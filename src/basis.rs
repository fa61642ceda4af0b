//! Polynomial feature bases
//!
//! A [`Basis`] turns a scalar input `x` into the row of features a least squares
//! fit regresses against. Column `j` of that row is basis function `φⱼ(x)`.
//!
//! # Provided Bases
//! - [`MonomialBasis`]: `1, x, x², …, xⁿ`. The textbook polynomial features. Becomes
//!   ill-conditioned for high degrees or wide input ranges.
//! - [`ChebyshevBasis`]: Chebyshev polynomials of the first kind, evaluated after mapping
//!   the domain onto [-1, 1]. Spans the same space of polynomials, but stays well
//!   conditioned at the high degrees where overfitting experiments live.
//!
//! Both bases describe exactly the same family of models for a given degree, so a
//! bias-variance experiment gives the same answers with either, up to rounding.
use nalgebra::{DMatrix, MatrixViewMut};
use serde::{Deserialize, Serialize};

use crate::{
    display::PolynomialDisplay,
    error::{Error, Result},
    value::Value,
};

mod monomial;
pub use monomial::MonomialBasis;

mod chebyshev;
pub use chebyshev::ChebyshevBasis;

/// A set of basis functions used to expand scalar inputs into polynomial features.
///
/// # Type Parameters
/// - `T`: The numeric type used for coefficients and evaluation (e.g., `f64`).
pub trait Basis<T: Value>: PolynomialDisplay<T> + Sized + Clone + std::fmt::Debug + Send + Sync {
    /// Create a new basis for inputs over the given range
    ///
    /// Initializes any needed metadata for normalization
    fn from_range(x_range: std::ops::RangeInclusive<T>) -> Self;

    /// Short human readable name of the basis
    fn name(&self) -> &'static str;

    /// Returns the number of basis functions needed for a polynomial of a given degree.
    #[inline(always)]
    fn k(&self, degree: usize) -> usize {
        degree + 1
    }

    /// Populates a row of the design matrix with this basis evaluated at `x`.
    ///
    /// Basis functions `start_index..row.ncols()` are written. `x` has already been
    /// passed through [`Basis::normalize_x`] by the caller.
    fn fill_matrix_row<R: nalgebra::Dim, C: nalgebra::Dim, RS: nalgebra::Dim, CS: nalgebra::Dim>(
        &self,
        start_index: usize,
        x: T,
        row: MatrixViewMut<T, R, C, RS, CS>,
    );

    /// Maps an input value into the coordinate the basis functions are defined on.
    fn normalize_x(&self, x: T) -> T;

    /// Evaluates basis function `j` at an already normalized `x`.
    fn solve_function(&self, j: usize, x: T) -> T;

    /// Evaluates a polynomial with the given coefficients in this basis at a raw (un-normalized) `x`.
    fn evaluate(&self, coefficients: &[T], x: T) -> T {
        let x = self.normalize_x(x);
        coefficients
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (j, &c)| acc + c * self.solve_function(j, x))
    }
}

/// Basis selection for configuration files and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasisKind {
    /// [`MonomialBasis`]
    ///
    /// Poorly conditioned on domains far from zero; prefer `chebyshev` there.
    #[default]
    Monomial,

    /// [`ChebyshevBasis`]
    Chebyshev,
}
impl std::fmt::Display for BasisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasisKind::Monomial => write!(f, "monomial"),
            BasisKind::Chebyshev => write!(f, "chebyshev"),
        }
    }
}
impl std::str::FromStr for BasisKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monomial" => Ok(BasisKind::Monomial),
            "chebyshev" => Ok(BasisKind::Chebyshev),
            other => Err(Error::InvalidConfig(format!("unknown basis `{other}`"))),
        }
    }
}

/// Expands scalar inputs into a polynomial design matrix.
///
/// The result has one row per input and `degree + 1` columns; entry `(i, j)` is basis
/// function `j` evaluated at `xs[i]`. For the [`MonomialBasis`] this is the Vandermonde
/// matrix `[1, x, x², …, x^degree]`.
///
/// # Errors
/// Returns [`Error::NoData`] if `xs` is empty.
///
/// # Example
/// ```
/// # use biasvar::basis::{polynomial_features, MonomialBasis};
/// let features = polynomial_features(&[2.0, 3.0], 2, &MonomialBasis::default()).unwrap();
/// assert_eq!(features.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 4.0]);
/// assert_eq!(features.row(1).iter().copied().collect::<Vec<_>>(), vec![1.0, 3.0, 9.0]);
/// ```
pub fn polynomial_features<T: Value, B: Basis<T>>(
    xs: &[T],
    degree: usize,
    basis: &B,
) -> Result<DMatrix<T>> {
    if xs.is_empty() {
        return Err(Error::NoData);
    }

    let mut matrix = DMatrix::zeros(xs.len(), basis.k(degree));
    for (row, &x) in matrix.row_iter_mut().zip(xs) {
        basis.fill_matrix_row(0, basis.normalize_x(x), row);
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_all_close;

    #[test]
    fn features_shape() {
        let xs = [0.0, 0.5, 1.0, 1.5];
        let m = polynomial_features(&xs, 3, &MonomialBasis::default()).unwrap();
        assert_eq!(m.shape(), (4, 4));

        let m = polynomial_features(&xs, 0, &MonomialBasis::default()).unwrap();
        assert_eq!(m.shape(), (4, 1));
        assert!(m.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn features_empty_input() {
        let xs: [f64; 0] = [];
        assert!(matches!(
            polynomial_features(&xs, 2, &MonomialBasis::default()),
            Err(Error::NoData)
        ));
    }

    #[test]
    fn rows_match_solve_function() {
        let basis = ChebyshevBasis::from_range(-3.0..=5.0);
        let xs = [-3.0, -1.0, 0.25, 4.0];
        let m = polynomial_features(&xs, 5, &basis).unwrap();
        for (i, &x) in xs.iter().enumerate() {
            let x = basis.normalize_x(x);
            let expected: Vec<f64> = (0..6).map(|j| basis.solve_function(j, x)).collect();
            let row: Vec<f64> = m.row(i).iter().copied().collect();
            assert_all_close!(row, expected, 1e-12);
        }
    }

    #[test]
    fn basis_kind_parses() {
        assert_eq!("Chebyshev".parse::<BasisKind>().unwrap(), BasisKind::Chebyshev);
        assert_eq!("monomial".parse::<BasisKind>().unwrap(), BasisKind::Monomial);
        assert!("fourier".parse::<BasisKind>().is_err());
        assert_eq!(BasisKind::default().to_string(), "monomial");
    }
}
