//! A toy complex number with component-wise arithmetic.
//!
//! Every operation pairs the stored real part with the given real part and the
//! stored imaginary part with the given imaginary part (`r op re`, `i op im`).
//! This is *not* complex multiplication or division.

use crate::error::{LambdataError, Result};
use num_traits::Float;
use std::fmt;

/// Real and imaginary components of a complex number.
///
/// - `F`: The component type (e.g., `f64`, `f32`).
///
/// Values are immutable; `add`, `subtract`, `multiply` and `divide` return a new
/// number and leave `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexNumber<F = f64> {
    pub real: F,
    pub imaginary: F,
}

impl<F: Float> ComplexNumber<F> {
    /// Creates a number from its two components, e.g. `ComplexNumber::new(3.0, -4.5)`.
    pub fn new(real: F, imaginary: F) -> Self {
        ComplexNumber { real, imaginary }
    }

    pub fn parts(&self) -> (F, F) {
        (self.real, self.imaginary)
    }

    pub fn add(&self, re: F, im: F) -> Self {
        Self::new(self.real + re, self.imaginary + im)
    }

    pub fn subtract(&self, re: F, im: F) -> Self {
        Self::new(self.real - re, self.imaginary - im)
    }

    pub fn multiply(&self, re: F, im: F) -> Self {
        Self::new(self.real * re, self.imaginary * im)
    }

    /// Divides each stored component by the matching input component.
    ///
    /// Fails with [`LambdataError::DivideByZeroInput`] when *either* input
    /// component is exactly zero, so `(1, 0)` is refused just like `(0, 0)`.
    /// The stored components are never checked.
    pub fn divide(&self, re: F, im: F) -> Result<Self> {
        if re == F::zero() || im == F::zero() {
            let (re, im) = (re.to_f64().unwrap_or(f64::NAN), im.to_f64().unwrap_or(f64::NAN));
            tracing::warn!(re, im, "zero-divide attempted on complex number");
            return Err(LambdataError::DivideByZeroInput { re, im });
        }
        Ok(Self::new(self.real / re, self.imaginary / im))
    }
}

impl<F: Float> Default for ComplexNumber<F> {
    fn default() -> Self {
        Self::new(F::zero(), F::zero())
    }
}

impl<F: Float> From<(F, F)> for ComplexNumber<F> {
    fn from((real, imaginary): (F, F)) -> Self {
        Self::new(real, imaginary)
    }
}

impl<F: Float + fmt::Display> fmt::Display for ComplexNumber<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary.is_sign_negative() && !self.imaginary.is_nan() {
            write!(f, "{} - {}i", self.real, self.imaginary.abs())
        } else {
            write!(f, "{} + {}i", self.real, self.imaginary)
        }
    }
}
