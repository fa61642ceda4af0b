//! Assertions for numeric tests.
//!
//! Floating point results rarely compare equal, and Monte Carlo results only agree to
//! within sampling error. These macros make both kinds of comparison one-liners.
//!
//! ### [`crate::assert_close`]
//! Asserts that two values are within a tolerance of each other.
//! - Defaults to the machine epsilon for the value's type.
//! - `assert_eq!` equivalent for floats.
//!
//! ### [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] over two sequences of equal length.
//!
//! ### [`crate::assert_decomposes`]
//! Asserts that a [`crate::experiment::DegreeReport`]'s measured expected error agrees with
//! `bias² + variance + noise` to within a relative tolerance.
use crate::value::Value;

/// Machine epsilon for the type of the given value. Used by the assertion macros.
#[doc(hidden)]
pub fn epsilon_of<T: Value>(_: &T) -> T {
    T::epsilon()
}

/// Asserts that two floating-point values are approximately equal.
///
/// # Syntax
/// `assert_close!(a, b [, tolerance [, message...]])`
///
/// The tolerance is absolute and defaults to the machine epsilon of the value type.
///
/// # Examples
/// ```
/// # use biasvar::assert_close;
/// assert_close!(0.1 + 0.2, 0.3, 1e-15);
/// assert_close!(1.0 + 1e-17, 1.0);
/// assert_close!(2.0f32.sqrt(), 1.41421, 1e-5, "sqrt of {}", 2);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr $(,)?) => {{
        let a = $a;
        $crate::assert_close!(a, $b, $crate::test::epsilon_of(&a), "Values not close")
    }};

    ($a:expr, $b:expr, $tol:expr $(,)?) => {
        $crate::assert_close!($a, $b, $tol, "Values not close")
    };

    ($a:expr, $b:expr, $tol:expr, $($msg:tt)+) => {{
        #[allow(clippy::float_cmp)]
        {
            let (a, b, tol) = ($a, $b, $tol);
            let diff = $crate::value::Value::abs(a - b);
            assert!(
                a == b || diff <= tol,
                "{}: {a} != {b} (|a - b| = {diff:e}, tolerance {tol:e})",
                format_args!($($msg)+)
            );
        }
    }};
}

/// Asserts that two sequences of floating-point values are element-wise approximately equal.
///
/// # Syntax
/// `assert_all_close!(src, dst [, tolerance])`
///
/// Both sides are consumed with `IntoIterator`.
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements differs by more than the tolerance.
///
/// # Examples
/// ```
/// # use biasvar::assert_all_close;
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![1.0 + 1e-16, 2.0, 3.0];
/// assert_all_close!(a, b);
/// assert_all_close!([1.0, 2.0], [1.001, 1.999], 1e-2);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr $(,)?) => {{
        let src: Vec<_> = ::std::iter::IntoIterator::into_iter($src).collect();
        let dst: Vec<_> = ::std::iter::IntoIterator::into_iter($dst).collect();
        assert_eq!(src.len(), dst.len(), "length mismatch");
        for (i, (s, d)) in src.into_iter().zip(dst).enumerate() {
            $crate::assert_close!(s, d, $crate::test::epsilon_of(&s), "element {i}");
        }
    }};

    ($src:expr, $dst:expr, $tol:expr $(,)?) => {{
        let src: Vec<_> = ::std::iter::IntoIterator::into_iter($src).collect();
        let dst: Vec<_> = ::std::iter::IntoIterator::into_iter($dst).collect();
        let tol = $tol;
        assert_eq!(src.len(), dst.len(), "length mismatch");
        for (i, (s, d)) in src.into_iter().zip(dst).enumerate() {
            $crate::assert_close!(s, d, tol, "element {i}");
        }
    }};
}

/// Asserts that the empirical expected error of a [`crate::experiment::DegreeReport`]
/// matches its decomposition `bias² + variance + noise`.
///
/// The tolerance is relative to the decomposed error and defaults to `0.1` (10%).
/// Monte Carlo error shrinks with the number of trials, so small experiments need looser bounds.
///
/// # Example
/// ```
/// # use biasvar::{assert_decomposes, experiment::{BiasVarianceExperiment, ExperimentConfig}};
/// let config = ExperimentConfig { trials: 400, degrees: vec![1, 3], seed: Some(7), ..Default::default() };
/// let report = BiasVarianceExperiment::new(config).run().unwrap();
/// for degree in &report.degrees {
///     assert_decomposes!(degree, 0.15);
/// }
/// ```
#[macro_export]
macro_rules! assert_decomposes {
    ($report:expr $(,)?) => {
        $crate::assert_decomposes!($report, 0.1)
    };

    ($report:expr, $rel:expr $(,)?) => {{
        let report = &$report;
        let decomposed = report.decomposed_error;
        let measured = report.expected_error;
        let tol = $rel * decomposed;
        $crate::assert_close!(
            measured,
            decomposed,
            tol,
            "degree {} does not decompose (bias² {}, variance {}, noise {})",
            report.degree,
            report.bias_squared,
            report.variance,
            report.noise
        );
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn close_values_pass() {
        assert_close!(1.0 + 1e-17, 1.0);
        assert_close!(f64::INFINITY, f64::INFINITY);
        assert_close!(10.0, 10.5, 0.5);
    }

    #[test]
    #[should_panic(expected = "Values not close")]
    fn distant_values_fail() {
        assert_close!(1.0, 1.1, 1e-3);
    }

    #[test]
    #[should_panic(expected = "element 1")]
    fn all_close_reports_index() {
        assert_all_close!([1.0, 2.0, 3.0], [1.0, 2.5, 3.0], 1e-6);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn all_close_length_mismatch() {
        assert_all_close!(vec![1.0, 2.0], vec![1.0]);
    }
}
