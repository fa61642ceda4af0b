//! Ground-truth functions that samples are drawn from.
//!
//! A bias-variance experiment needs the noise-free truth `f(x)` so it can measure how
//! far the average model lands from it. Anything implementing [`TargetFunction`] can
//! play that role:
//! - [`Sinusoid`]: `a · sin(2π·freq·x + phase)`. The default target, `sin(2πx)` over [0, 1],
//!   is smooth but not a polynomial, so every degree carries some bias.
//! - [`PolynomialTarget`]: a monomial polynomial. Fits of high enough degree are unbiased.
//! - [`FnTarget`]: any closure.
//!
//! [`TargetKind`] describes the built-ins in configuration files.
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    value::Value,
};

/// A known function `f(x)` used as the ground truth of an experiment.
pub trait TargetFunction<T: Value>: Send + Sync {
    /// Evaluates the function at `x`.
    fn y(&self, x: T) -> T;

    /// Human readable description.
    fn name(&self) -> String;

    /// Evaluates the function at every `x`, returning `(x, f(x))` points.
    fn solve(&self, xs: &[T]) -> Vec<(T, T)> {
        xs.iter().map(|&x| (x, self.y(x))).collect()
    }
}

impl<T: Value, F: TargetFunction<T> + ?Sized> TargetFunction<T> for Box<F> {
    fn y(&self, x: T) -> T {
        (**self).y(x)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// `amplitude · sin(2π · frequency · x + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoid<T: Value = f64> {
    /// Peak value
    pub amplitude: T,

    /// Cycles per unit of x
    pub frequency: T,

    /// Phase offset in radians
    pub phase: T,
}
impl<T: Value> Default for Sinusoid<T> {
    /// `sin(2πx)`
    fn default() -> Self {
        Self {
            amplitude: T::one(),
            frequency: T::one(),
            phase: T::zero(),
        }
    }
}
impl<T: Value> TargetFunction<T> for Sinusoid<T> {
    fn y(&self, x: T) -> T {
        self.amplitude * (T::two_pi() * self.frequency * x + self.phase).sin()
    }

    fn name(&self) -> String {
        format!(
            "{}·sin(2π·{}·x + {})",
            self.amplitude, self.frequency, self.phase
        )
    }
}

/// A polynomial in monomial form, constant term first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialTarget<T: Value = f64> {
    coefficients: Vec<T>,
}
impl<T: Value> PolynomialTarget<T> {
    /// Creates a polynomial target from its coefficients, constant term first.
    ///
    /// # Errors
    /// Returns [`Error::NoData`] if there are no coefficients.
    ///
    /// # Example
    /// ```
    /// # use biasvar::target::{PolynomialTarget, TargetFunction};
    /// let f = PolynomialTarget::new(vec![1.0, 0.0, 2.0]).unwrap(); // 2x² + 1
    /// assert_eq!(f.y(3.0), 19.0);
    /// ```
    pub fn new(coefficients: Vec<T>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::NoData);
        }
        Ok(Self { coefficients })
    }

    /// Coefficients, constant term first
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Degree of the polynomial, ignoring trailing zero coefficients
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|c| *c != T::zero())
            .unwrap_or(0)
    }
}
impl<T: Value> TargetFunction<T> for PolynomialTarget<T> {
    fn y(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    fn name(&self) -> String {
        let mut buf = String::new();
        let basis = crate::basis::MonomialBasis::<T>::new();
        match crate::display::PolynomialDisplay::format_polynomial(
            &basis,
            &mut buf,
            &self.coefficients,
        ) {
            Ok(()) => buf.replacen("y(x)", "f(x)", 1),
            Err(_) => "polynomial".to_string(),
        }
    }
}

/// Wraps a closure as a target function.
///
/// ```
/// # use biasvar::target::{FnTarget, TargetFunction};
/// let f = FnTarget::new("exp(-x)", |x: f64| (-x).exp());
/// assert_eq!(f.y(0.0), 1.0);
/// ```
pub struct FnTarget<F> {
    name: String,
    function: F,
}
impl<F> FnTarget<F> {
    /// Creates a named target from a closure.
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }
}
impl<T: Value, F: Fn(T) -> T + Send + Sync> TargetFunction<T> for FnTarget<F> {
    fn y(&self, x: T) -> T {
        (self.function)(x)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
impl<F> std::fmt::Debug for FnTarget<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTarget").field("name", &self.name).finish()
    }
}

/// Serializable description of a built-in target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TargetKind {
    /// [`Sinusoid`]
    Sine {
        /// Peak value
        #[serde(default = "one")]
        amplitude: f64,

        /// Cycles per unit of x
        #[serde(default = "one")]
        frequency: f64,

        /// Phase offset in radians
        #[serde(default)]
        phase: f64,
    },

    /// [`PolynomialTarget`]
    Polynomial {
        /// Coefficients, constant term first
        coefficients: Vec<f64>,
    },
}
fn one() -> f64 {
    1.0
}
impl Default for TargetKind {
    fn default() -> Self {
        TargetKind::Sine {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
        }
    }
}
impl TargetKind {
    /// Builds the described target function.
    ///
    /// # Errors
    /// Returns an error if a parameter cannot be represented in `T`, or a polynomial has no coefficients.
    pub fn build<T: Value>(&self) -> Result<Box<dyn TargetFunction<T>>> {
        Ok(match self {
            TargetKind::Sine {
                amplitude,
                frequency,
                phase,
            } => Box::new(Sinusoid {
                amplitude: T::try_cast(*amplitude)?,
                frequency: T::try_cast(*frequency)?,
                phase: T::try_cast(*phase)?,
            }),
            TargetKind::Polynomial { coefficients } => {
                let coefficients = coefficients
                    .iter()
                    .map(|&c| T::try_cast(c))
                    .collect::<Result<Vec<T>>>()?;
                Box::new(PolynomialTarget::new(coefficients)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn default_sinusoid() {
        let f = Sinusoid::<f64>::default();
        assert_close!(f.y(0.0), 0.0);
        assert_close!(f.y(0.25), 1.0);
        assert_close!(f.y(0.75), -1.0);
        assert_close!(f.y(1.0), 0.0, 1e-15);
    }

    #[test]
    fn polynomial_target() {
        let f = PolynomialTarget::new(vec![-5.0, 3.0, 2.0]).unwrap();
        assert_eq!(f.y(0.0), -5.0);
        assert_eq!(f.y(2.0), 9.0);
        assert_eq!(f.degree(), 2);
        assert_eq!(f.name(), "f(x) = 2.00x² + 3.00x - 5.00");

        let padded = PolynomialTarget::new(vec![1.0, 2.0, 0.0, 0.0]).unwrap();
        assert_eq!(padded.degree(), 1);

        assert!(matches!(
            PolynomialTarget::<f64>::new(vec![]),
            Err(Error::NoData)
        ));
    }

    #[test]
    fn solve_pairs_inputs() {
        let f = FnTarget::new("square", |x: f64| x * x);
        assert_eq!(f.solve(&[1.0, -2.0]), vec![(1.0, 1.0), (-2.0, 4.0)]);
        assert_eq!(TargetFunction::<f64>::name(&f), "square");
    }

    #[test]
    fn kind_builds_targets() {
        let sine = TargetKind::default().build::<f64>().unwrap();
        assert_close!(sine.y(0.25), 1.0);

        let poly = TargetKind::Polynomial {
            coefficients: vec![1.0, 1.0],
        }
        .build::<f64>()
        .unwrap();
        assert_eq!(poly.y(4.0), 5.0);
    }

    #[test]
    fn kind_deserializes() {
        let kind: TargetKind = serde_json::from_str(r#"{"kind": "sine", "frequency": 2.0}"#).unwrap();
        assert_eq!(
            kind,
            TargetKind::Sine {
                amplitude: 1.0,
                frequency: 2.0,
                phase: 0.0
            }
        );

        let kind: TargetKind =
            serde_json::from_str(r#"{"kind": "polynomial", "coefficients": [0.0, 1.0]}"#).unwrap();
        assert!(matches!(kind, TargetKind::Polynomial { .. }));
    }
}
