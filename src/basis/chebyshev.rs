use nalgebra::MatrixViewMut;

use crate::{
    basis::Basis,
    display::{self, PolynomialDisplay, Sign, DEFAULT_PRECISION},
    value::Value,
};

/// Normalized Chebyshev basis of the first kind.
///
/// Inputs are mapped affinely from `[x_min, x_max]` onto `[-1, 1]`, where the
/// Chebyshev polynomials `T₀ = 1, T₁ = x, Tₙ = 2x·Tₙ₋₁ - Tₙ₋₂` are bounded by 1.
/// The resulting design matrix stays well conditioned far past the degree where
/// monomial features break down.
///
/// The mapping is not clamped, so a fit can still be evaluated a little outside the
/// range it was built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevBasis<T: Value = f64> {
    center: T,
    half_width: T,
}
impl<T: Value> ChebyshevBasis<T> {
    /// Creates a new Chebyshev basis mapping `[x_min, x_max]` onto [-1, 1].
    ///
    /// A degenerate range (a single x value) maps everything to 0.
    pub fn new(x_min: T, x_max: T) -> Self {
        let center = (x_min + x_max) / T::two();
        let half_width = (x_max - x_min) / T::two();
        Self { center, half_width }
    }

    /// The input range this basis maps onto [-1, 1]
    pub fn x_range(&self) -> (T, T) {
        (self.center - self.half_width, self.center + self.half_width)
    }
}

impl<T: Value> Basis<T> for ChebyshevBasis<T> {
    fn from_range(x_range: std::ops::RangeInclusive<T>) -> Self {
        Self::new(*x_range.start(), *x_range.end())
    }

    fn name(&self) -> &'static str {
        "chebyshev"
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
                1 => x,
                _ if j >= start_index + 2 => T::two() * x * row[j - 1] - row[j - 2],
                _ => self.solve_function(j, x),
            }
        }
    }

    #[inline(always)]
    fn normalize_x(&self, x: T) -> T {
        if self.half_width == T::zero() {
            return T::zero();
        }
        (x - self.center) / self.half_width
    }

    fn solve_function(&self, j: usize, x: T) -> T {
        match j {
            0 => T::one(),
            1 => x,
            _ => {
                let mut prev = T::one();
                let mut current = x;
                for _ in 2..=j {
                    let next = T::two() * x * current - prev;
                    prev = current;
                    current = next;
                }
                current
            }
        }
    }

    /// Clenshaw recurrence
    fn evaluate(&self, coefficients: &[T], x: T) -> T {
        let x = self.normalize_x(x);
        let mut b1 = T::zero();
        let mut b2 = T::zero();
        for &c in coefficients.iter().skip(1).rev() {
            let b0 = T::two() * x * b1 - b2 + c;
            b2 = b1;
            b1 = b0;
        }
        let c0 = coefficients.first().copied().unwrap_or(T::zero());
        x * b1 - b2 + c0
    }
}

impl<T: Value> PolynomialDisplay<T> for ChebyshevBasis<T> {
    fn format_term(&self, degree: i32, coef: T) -> Option<display::Term> {
        let sign = Sign::from_coef(coef);

        let func = if degree > 0 {
            let rank = display::unicode::subscript(&degree.to_string());
            let xs = display::unicode::subscript("s");
            format!("T{rank}(x{xs})")
        } else {
            String::new()
        };
        let coef = display::format_coefficient(coef, degree, DEFAULT_PRECISION)?;

        let glue = if coef.is_empty() || func.is_empty() {
            ""
        } else {
            "·"
        };

        Some(display::Term::new(sign, format!("{coef}{glue}{func}")))
    }

    fn format_scaling_formula(&self) -> Option<String> {
        let xs = display::unicode::subscript("s");
        let (center, width, p) = (self.center, self.half_width, DEFAULT_PRECISION);
        Some(format!("x{xs} = (x - {center:.p$}) / {width:.p$}"))
    }
}
