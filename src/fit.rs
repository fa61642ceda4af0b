//! Least squares polynomial fitting
//!
//! A fit expands every input into the basis features of [`crate::basis`] and solves the
//! resulting linear system for the coefficients that minimize the squared error.
//!
//! # Fitting
//! - [`fit_polynomial`]: Fits a polynomial of a given degree in the monomial basis.
//! - [`PolynomialFit::new`]: Fits in any basis, normalized to the range of the data.
//! - [`PolynomialFit::with_basis`]: Fits in a basis that was built ahead of time, such as one
//!   normalized to a fixed domain.
//!
//! # Evaluating a Fit
//! - [`PolynomialFit::y`], [`PolynomialFit::predict`] and [`PolynomialFit::solve`] evaluate the
//!   fitted polynomial.
//! - [`PolynomialFit::training_error`] and [`PolynomialFit::mean_squared_error`] measure it on
//!   its own data or on new data.
//! - [`PolynomialFit::properties`] collects a serializable summary.
//!
//! <div class="warning">
//!
//! **Technical Details**
//!
//! For `n` points and `k = degree + 1` basis functions the design matrix `X` is `n × k`, and
//! the coefficients solve
//! ```math
//! min ‖Xc - y‖²
//! ```
//! by singular value decomposition. Singular values below `ε · max(n, k) · σ_max` are treated
//! as zero, so rank-deficient problems still return the minimum-norm solution.
//! </div>
//!
//! # Example
//! ```rust
//! use biasvar::fit_polynomial;
//!
//! let data: Vec<(f64, f64)> = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
//! let fit = fit_polynomial(&data, 1).unwrap();
//! assert!((fit.y(3.0) - 7.0).abs() < 1e-9);
//! ```
use std::{borrow::Cow, ops::RangeInclusive};

use nalgebra::{DMatrix, DVector, SVD};

use crate::{
    basis::{Basis, ChebyshevBasis, MonomialBasis},
    error::{Error, Result},
    statistics,
    value::{CoordExt, Value},
};

/// Ordinary least squares fit in the plain monomial basis `1, x, x², …`
///
/// Coefficients read directly as the polynomial `c₀ + c₁x + c₂x² + …`.
pub type MonomialFit<'data, T = f64> = PolynomialFit<'data, MonomialBasis<T>, T>;

/// Ordinary least squares fit in a Chebyshev basis normalized to the fitted range
///
/// Spans the same polynomials as [`MonomialFit`], but stays well conditioned for high degrees.
pub type ChebyshevFit<'data, T = f64> = PolynomialFit<'data, ChebyshevBasis<T>, T>;

/// A polynomial of fixed degree fitted to a dataset by ordinary least squares.
///
/// The coefficients minimize the squared residuals over the data:
///
/// ```math
/// ĉ = argmin_c Σ (y_i - Σ_j c_j φ_j(x_i))²
/// ```
///
/// where `φ_j` are the functions of the basis `B`. The system is solved with a singular value
/// decomposition of the design matrix, so rank deficient problems (repeated x values, very
/// high degrees) still produce a minimum-norm solution instead of failing.
///
/// # Example
/// ```
/// # use biasvar::MonomialFit;
/// let data = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
/// let fit = MonomialFit::new(data, 2).unwrap();
/// println!("Coefficients: {:?}", fit.coefficients());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit<'data, B, T: Value = f64>
where
    B: Basis<T>,
{
    data: Cow<'data, [(T, T)]>,
    x_range: RangeInclusive<T>,
    basis: B,
    coefficients: Vec<T>,
    degree: usize,
}
impl<'data, T: Value, B> PolynomialFit<'data, B, T>
where
    B: Basis<T>,
{
    /// Turns a dataset into a design matrix and y-values vector.
    fn create_matrix(data: &[(T, T)], basis: &B, k: usize) -> (DMatrix<T>, DVector<T>) {
        let mut bigx = DMatrix::zeros(data.len(), k);
        let b = DVector::from_iterator(data.len(), data.y_iter());

        for (row, x) in bigx.row_iter_mut().zip(data.x_iter()) {
            basis.fill_matrix_row(0, basis.normalize_x(x), row);
        }

        (bigx, b)
    }

    /// Solves the least squares system using SVD.
    fn solve_matrix(matrix: DMatrix<T>, b: &DVector<T>) -> Result<Vec<T>> {
        let size = matrix.shape();

        let decomp = SVD::new_unordered(matrix, true, true);

        // ~= machine_epsilon * max(size) * max_singular
        let machine_epsilon = T::epsilon();
        let max_size = size.0.max(size.1);
        let sigma_max = decomp.singular_values.max();
        let epsilon = machine_epsilon * T::try_cast(max_size)? * sigma_max;

        let big_x = decomp.solve(b, epsilon).map_err(Error::Algebra)?;
        let coefficients: Vec<_> = big_x.data.into();

        if coefficients.iter().any(|c| c.is_nan()) {
            return Err(Error::Algebra("NaN in coefficients"));
        }

        Ok(coefficients)
    }

    /// Fits a polynomial of the given degree, with the basis built from the data's x-range.
    ///
    /// # Errors
    /// - [`Error::NoData`]: `data` is empty.
    /// - [`Error::DegreeTooHigh`]: `degree >= data.len()`.
    /// - [`Error::Algebra`]: the data contains NaN or infinite values, or the linear system could not be solved.
    /// - [`Error::CastFailed`]: a numeric value could not be cast to the target type.
    ///
    /// # Example
    /// ```
    /// # use biasvar::ChebyshevFit;
    /// let data: &[(f64, f64)] = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
    /// let fit = ChebyshevFit::new(data, 2).unwrap();
    /// assert!((fit.y(3.0) - 13.0).abs() < 1e-9);
    /// ```
    pub fn new(data: impl Into<Cow<'data, [(T, T)]>>, degree: usize) -> Result<Self> {
        let data: Cow<_> = data.into();
        let x_range = data.x_range().ok_or(Error::NoData)?;
        Self::with_basis(data, degree, B::from_range(x_range))
    }

    /// Fits a polynomial of the given degree using an explicit basis.
    ///
    /// Use this when several fits must share a normalization, such as every trial of an
    /// experiment over the same domain.
    ///
    /// # Errors
    /// Same as [`PolynomialFit::new`].
    pub fn with_basis(
        data: impl Into<Cow<'data, [(T, T)]>>,
        degree: usize,
        basis: B,
    ) -> Result<Self> {
        let data: Cow<_> = data.into();

        if data.is_empty() {
            return Err(Error::NoData);
        } else if degree >= data.len() {
            return Err(Error::DegreeTooHigh(degree));
        } else if data.iter().any(|&(x, y)| !is_finite(x) || !is_finite(y)) {
            return Err(Error::Algebra("non-finite values in data"));
        }

        let x_range = data.x_range().ok_or(Error::NoData)?;
        let k = basis.k(degree);

        let (m, b) = Self::create_matrix(&data, &basis, k);
        let coefficients = Self::solve_matrix(m, &b)?;

        Ok(Self {
            data,
            x_range,
            basis,
            coefficients,
            degree,
        })
    }

    /// Returns an owned version of this fit, with a full copy of the data.
    #[must_use]
    pub fn to_owned(&self) -> PolynomialFit<'static, B, T> {
        PolynomialFit {
            data: Cow::Owned(self.data.to_vec()),
            x_range: self.x_range.clone(),
            basis: self.basis.clone(),
            coefficients: self.coefficients.clone(),
            degree: self.degree,
        }
    }

    /// Evaluates the fitted polynomial at `x`.
    ///
    /// There is no range check; evaluating far outside the fitted range is allowed but
    /// high degree fits diverge quickly there.
    pub fn y(&self, x: T) -> T {
        self.basis.evaluate(&self.coefficients, x)
    }

    /// Evaluates the fitted polynomial at every `x`.
    pub fn predict(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.y(x)).collect()
    }

    /// Evaluates the fitted polynomial at every `x`, returning `(x, y)` points.
    pub fn solve(&self, xs: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        xs.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// Returns the polynomial's coefficients, one per basis function.
    ///
    /// For example in a monomial expression `y(x) = 2x² - 3x + 1`;
    /// coefficients = [1.0, -3.0, 2.0]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of fitted parameters, `degree + 1`
    pub fn k(&self) -> usize {
        self.coefficients.len()
    }

    /// The basis the coefficients are expressed in
    pub fn basis(&self) -> &B {
        &self.basis
    }

    /// Returns the data points used for fitting.
    pub fn data(&self) -> &[(T, T)] {
        &self.data
    }

    /// Returns the inclusive range of x-values in the fitted data.
    pub fn x_range(&self) -> RangeInclusive<T> {
        self.x_range.clone()
    }

    /// Residuals `(x, y - ŷ)` on the fitted data
    pub fn residuals(&self) -> Vec<(T, T)> {
        self.data.iter().map(|&(x, y)| (x, y - self.y(x))).collect()
    }

    /// Mean squared error on the data the polynomial was fitted to.
    ///
    /// Never increases when the degree grows for the same data, so on its own it cannot
    /// tell a good model from an overfit one.
    pub fn training_error(&self) -> T {
        self.mean_squared_error(&self.data)
    }

    /// Mean squared error against arbitrary `(x, y)` data, such as a held-out test set.
    pub fn mean_squared_error(&self, data: &[(T, T)]) -> T {
        statistics::mean_squared_error(data.y_iter(), data.x_iter().map(|x| self.y(x)))
    }

    /// R² of the fit against arbitrary `(x, y)` data.
    pub fn r_squared(&self, data: &[(T, T)]) -> T {
        statistics::r_squared(data.y_iter(), data.x_iter().map(|x| self.y(x)))
    }

    /// Unbiased estimate of the noise variance from the fitted data's residuals.
    ///
    /// Zero for interpolating fits (`degree = n - 1`).
    pub fn residual_variance(&self) -> T {
        statistics::residual_variance(
            self.data.y_iter(),
            self.data.x_iter().map(|x| self.y(x)),
            self.k(),
        )
    }

    /// Returns the fitted polynomial as a human readable equation.
    pub fn equation(&self) -> String {
        let mut buf = String::new();
        match self.basis.format_polynomial(&mut buf, &self.coefficients) {
            Ok(()) => buf,
            Err(_) => String::from("<unprintable polynomial>"),
        }
    }

    /// Summary of the fit that can be serialized.
    pub fn properties(&self) -> FitProperties<T> {
        FitProperties {
            degree: self.degree,
            basis: self.basis.name().to_string(),
            data_points: self.data.len(),
            coefficients: self.coefficients.clone(),
            equation: self.equation(),
            mse: self.training_error(),
            r_squared: self.r_squared(&self.data),
        }
    }
}

impl<T: Value, B> std::fmt::Display for PolynomialFit<'_, B, T>
where
    B: Basis<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.basis.format_polynomial(f, &self.coefficients)
    }
}

fn is_finite<T: Value>(v: T) -> bool {
    num_traits::float::FloatCore::is_finite(v)
}

/// Fits a polynomial of the given degree in the monomial basis.
///
/// Expands the inputs into the features `1, x, …, x^degree` (see
/// [`crate::basis::polynomial_features`]) and solves ordinary least squares.
///
/// # Errors
/// See [`PolynomialFit::new`].
///
/// # Example
/// ```
/// # use biasvar::fit::fit_polynomial;
/// let data: [(f64, f64); 4] = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
/// let fit = fit_polynomial(&data, 1).unwrap();
/// assert!((fit.coefficients()[1] - 2.0).abs() < 1e-12);
/// ```
pub fn fit_polynomial<T: Value>(data: &[(T, T)], degree: usize) -> Result<MonomialFit<'_, T>> {
    MonomialFit::new(data, degree)
}

/// A set of diagnostic properties for a fit.
///
/// Can be serialized to JSON or other formats.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct FitProperties<T: Value> {
    /// The degree of the fitted polynomial.
    pub degree: usize,

    /// Name of the basis the coefficients are expressed in.
    pub basis: String,

    /// The number of data points used in the fit.
    pub data_points: usize,

    /// The coefficients of the fitted polynomial.
    pub coefficients: Vec<T>,

    /// The fitted polynomial as an equation.
    pub equation: String,

    /// The mean squared error of the fit on its own data.
    pub mse: T,

    /// The R² value of the fit on its own data.
    pub r_squared: T,
}
