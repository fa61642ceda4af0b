//! Error metrics and descriptive statistics
//!
//! Everything a bias-variance experiment measures boils down to a handful of averages:
//! how far predictions land from targets, and how much a set of values spreads out.
//!
//! # Error Metrics
//! - [`estimate_expected_error`]: Validated mean squared error between predictions and targets.
//!   The empirical estimate of a model's expected prediction error.
//! - [`mean_squared_error`]: Average squared difference between observed and predicted values. Lower is better.
//! - [`root_mean_squared_error`]: Square root of MSE, in the units of the observed values. Lower is better.
//! - [`mean_absolute_error`]: Average absolute difference between observed and predicted values. Lower is better.
//!
//! # Model Fit
//! - [`r_squared`]: Proportion of variance explained by the model. Higher is better (at most 1).
//! - [`residual_variance`]: Unbiased estimate of the noise variance left after fitting `k` parameters.
//!
//! # Descriptive Statistics
//! - [`mean`]: Arithmetic mean of a dataset.
//! - [`variance`]: Population variance of a dataset.
//! - [`stddev_and_mean`]: Population standard deviation and mean of a dataset.
//!
//! # Examples
//!
//! ```rust
//! use biasvar::statistics::{estimate_expected_error, r_squared};
//!
//! let y = vec![1.0, 2.0, 3.0];
//! let y_fit = vec![1.1, 1.9, 3.05];
//!
//! let r2 = r_squared(y.iter().copied(), y_fit.iter().copied());
//! println!("R² = {r2}");
//!
//! let error = estimate_expected_error(&y_fit, &y).unwrap();
//! assert!(error < 0.01);
//! ```
use crate::{
    error::{Error, Result},
    value::Value,
};

/// Estimates the expected prediction error of a model from paired predictions and targets.
///
/// This is the mean squared error, with the inputs checked first. Averaged over many
/// independent training sets and test sets, it converges to
/// `bias² + variance + noise`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// Err = (Σ (ŷ_i - y_i)²) / N
/// where
///   ŷ_i = predictions, y_i = targets,
///   N = number of pairs
/// ```
/// </div>
///
/// # Errors
/// - [`Error::NoData`] if there are no predictions.
/// - [`Error::LengthMismatch`] if the slices have different lengths.
///
/// # Example
/// ```rust
/// # use biasvar::statistics::estimate_expected_error;
/// let err = estimate_expected_error(&[1.0, 2.0], &[2.0, 4.0]).unwrap();
/// assert_eq!(err, 2.5);
/// ```
pub fn estimate_expected_error<T: Value>(predictions: &[T], targets: &[T]) -> Result<T> {
    if predictions.is_empty() {
        return Err(Error::NoData);
    }
    if predictions.len() != targets.len() {
        return Err(Error::LengthMismatch {
            expected: predictions.len(),
            actual: targets.len(),
        });
    }

    Ok(mean_squared_error(
        targets.iter().copied(),
        predictions.iter().copied(),
    ))
}

/// Computes the mean squared error (MSE) between two sets of values.
///
/// Pairs are taken until either iterator runs out. Returns zero if there are no pairs.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// MSE = (Σ (y_i - y_fit_i)²) / N
/// ```
/// </div>
///
/// # Example
/// ```
/// # use biasvar::statistics::mean_squared_error;
/// let y = vec![1.0, 2.0, 3.0];
/// let y_fit = vec![1.0, 2.0, 5.0];
/// assert_eq!(mean_squared_error(y.into_iter(), y_fit.into_iter()), 4.0 / 3.0);
/// ```
pub fn mean_squared_error<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    let (total, n) = y.zip(y_fit).fold((T::zero(), 0usize), |(total, n), (y, y_fit)| {
        (total + Value::powi(y - y_fit, 2), n + 1)
    });
    average(total, n)
}

/// Computes the root mean squared error (RMSE) between two sets of values.
///
/// ```math
/// RMSE = √MSE
/// ```
pub fn root_mean_squared_error<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    mean_squared_error(y, y_fit).sqrt()
}

/// Computes the mean absolute error (MAE) between two sets of values.
///
/// Less sensitive to a few large misses than [`mean_squared_error`].
///
/// ```math
/// MAE = (Σ |y_i - y_fit_i|) / N
/// ```
pub fn mean_absolute_error<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    let (total, n) = y.zip(y_fit).fold((T::zero(), 0usize), |(total, n), (y, y_fit)| {
        (total + Value::abs(y - y_fit), n + 1)
    });
    average(total, n)
}

/// Calculate the R-squared value for a set of data.
///
/// - `1` means the model explains all the variation.
/// - `0` means it does no better than predicting the mean.
/// - Negative values mean it does worse than the mean, which happens for
///   overfit models evaluated on fresh data.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_res / SS_tot)
/// where
///   SS_res = Σ (y_i - y_fit_i)²
///   SS_tot = Σ (y_i - y_mean)²
/// ```
/// If `SS_tot` is zero (constant observations) the result is 1 for a perfect fit and 0 otherwise.
/// </div>
///
/// # Example
/// ```rust
/// # use biasvar::statistics::r_squared;
/// let y = vec![1.0, 2.0, 3.0];
/// assert_eq!(r_squared(y.iter().copied(), y.iter().copied()), 1.0);
/// ```
pub fn r_squared<T: Value>(y: impl Iterator<Item = T>, y_fit: impl Iterator<Item = T>) -> T {
    let pairs: Vec<(T, T)> = y.zip(y_fit).collect();
    let y_mean = mean(pairs.iter().map(|(y, _)| *y));

    let (ss_res, ss_tot) = pairs
        .iter()
        .fold((T::zero(), T::zero()), |(res, tot), &(y, y_fit)| {
            (
                res + Value::powi(y - y_fit, 2),
                tot + Value::powi(y - y_mean, 2),
            )
        });

    if ss_tot == T::zero() {
        return if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        };
    }
    T::one() - ss_res / ss_tot
}

/// Computes the residual variance of a model's predictions.
///
/// The unbiased estimate of the noise variance σ² after fitting a model with
/// `k` parameters. Returns zero when there are no degrees of freedom left (`n <= k`),
/// since an interpolating fit leaves no residuals to measure.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// σ² = Σ (y_i - y_fit_i)² / (n - k)
/// ```
/// </div>
pub fn residual_variance<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
    k: usize,
) -> T {
    let (ss_res, n) = y.zip(y_fit).fold((T::zero(), 0usize), |(total, n), (y, y_fit)| {
        (total + Value::powi(y - y_fit, 2), n + 1)
    });

    if n <= k {
        return T::zero();
    }
    ss_res / T::from_positive_int(n - k)
}

/// Computes the arithmetic mean of a sequence of values.
///
/// Returns zero if the iterator yields no elements.
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let m = biasvar::statistics::mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// ```
pub fn mean<T: Value>(data: impl Iterator<Item = T>) -> T {
    let (sum, n) = data.fold((T::zero(), 0usize), |(sum, n), v| (sum + v, n + 1));
    average(sum, n)
}

/// Computes the population variance of a sequence of values (divides by `N`).
///
/// This is the variance used for the spread of model predictions across trials.
///
/// ```math
/// Var = (Σ (x_i - Mean)²) / N
/// ```
pub fn variance<T: Value>(data: impl Iterator<Item = T>) -> T {
    let (dev, _) = stddev_and_mean(data);
    dev * dev
}

/// Computes the standard deviation and mean of a sequence of values.
/// - Uses the population formula (divides by `N`) rather than `N-1`.
///
/// Returns zeros if the iterator yields no elements.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// σ = sqrt( (Σ (x_i - Mean)²) / N )
/// ```
/// </div>
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let (s, m) = biasvar::statistics::stddev_and_mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// assert!((s - (2.0f64 / 3.0).sqrt()).abs() < 1e-15);
/// ```
pub fn stddev_and_mean<T: Value>(data: impl Iterator<Item = T>) -> (T, T) {
    let data: Vec<_> = data.collect();
    let mean = mean(data.iter().copied());
    let sum_sq_diff = data
        .iter()
        .fold(T::zero(), |acc, &v| acc + Value::powi(v - mean, 2));
    let dev = average(sum_sq_diff, data.len()).sqrt();

    (dev, mean)
}

fn average<T: Value>(total: T, n: usize) -> T {
    if n == 0 {
        T::zero()
    } else {
        total / T::from_positive_int(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_expected_error() {
        let predictions = [1.0, 2.0, 3.0, 4.0];
        let targets = [1.5, 2.0, 2.0, 4.0];
        assert_close!(
            estimate_expected_error(&predictions, &targets).unwrap(),
            (0.25 + 1.0) / 4.0
        );

        assert!(matches!(
            estimate_expected_error::<f64>(&[], &[]),
            Err(Error::NoData)
        ));
        assert!(matches!(
            estimate_expected_error(&[1.0, 2.0], &[1.0]),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_error_metrics() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let y_fit = [1.0, 3.0, 3.0, 2.0];
        assert_close!(mean_squared_error(y.into_iter(), y_fit.into_iter()), 5.0 / 4.0);
        assert_close!(
            root_mean_squared_error(y.into_iter(), y_fit.into_iter()),
            (5.0f64 / 4.0).sqrt()
        );
        assert_close!(mean_absolute_error(y.into_iter(), y_fit.into_iter()), 3.0 / 4.0);
        assert_eq!(mean_squared_error(std::iter::empty::<f64>(), std::iter::empty()), 0.0);
    }

    #[test]
    fn test_r_squared() {
        let y = [1.0, 2.0, 3.0];
        assert_close!(r_squared(y.into_iter(), [2.0, 2.0, 2.0].into_iter()), 0.0);
        assert_close!(r_squared(y.into_iter(), [1.0, 2.0, 4.0].into_iter()), 0.5);
        assert!(r_squared(y.into_iter(), [3.0, 2.0, 1.0].into_iter()) < 0.0);
        assert_eq!(r_squared([5.0, 5.0].into_iter(), [5.0, 5.0].into_iter()), 1.0);
        assert_eq!(r_squared([5.0, 5.0].into_iter(), [4.0, 5.0].into_iter()), 0.0);
    }

    #[test]
    fn test_residual_variance() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let y_fit = [1.5, 2.0, 2.5, 4.0];
        assert_close!(residual_variance(y.into_iter(), y_fit.into_iter(), 2), 0.5 / 2.0);
        assert_eq!(residual_variance(y.into_iter(), y_fit.into_iter(), 4), 0.0);
    }

    #[test]
    fn test_descriptive() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let (dev, m) = stddev_and_mean(data.into_iter());
        assert_close!(m, 5.0);
        assert_close!(dev, 2.0);
        assert_close!(variance(data.into_iter()), 4.0);

        assert_eq!(mean(std::iter::empty::<f64>()), 0.0);
        assert_eq!(variance(std::iter::empty::<f64>()), 0.0);
        assert_eq!(variance([3.0, 3.0, 3.0].into_iter()), 0.0);
    }
}
