//! Validated transfer functions in the Laplace variable.

use std::fmt;

use crate::error::{ModelError, ModelResult};
use crate::poly::Polynomial;

/// A rational transfer function `num(s) / den(s)`.
///
/// Coefficients are ordered highest power first, matching the usual
/// hand-written form. Properness is not required: numerators of equal
/// degree are handled by the realization's D-term decomposition, and
/// longer numerators are rejected there.
///
/// Immutable once constructed; build a new one when coefficients change.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFunction {
    num: Polynomial,
    den: Polynomial,
}

impl TransferFunction {
    /// Build a transfer function from raw coefficient sequences.
    ///
    /// # Errors
    ///
    /// Returns `InvalidModel` if either sequence is empty, contains a
    /// non-finite value, or the denominator is identically zero.
    pub fn new(num: Vec<f64>, den: Vec<f64>) -> ModelResult<Self> {
        let num = Polynomial::new(num)?;
        let den = Polynomial::new(den)?;
        if den.is_zero() {
            return Err(ModelError::InvalidModel {
                what: "denominator must not be the zero polynomial",
            });
        }
        Ok(Self { num, den })
    }

    /// Numerator polynomial.
    pub fn numerator(&self) -> &Polynomial {
        &self.num
    }

    /// Denominator polynomial.
    pub fn denominator(&self) -> &Polynomial {
        &self.den
    }

    /// System order: stated denominator degree.
    pub fn order(&self) -> usize {
        self.den.degree()
    }

    /// Steady-state gain `num(0) / den(0)`, or `None` when the denominator
    /// has a root at the origin (integrating system).
    pub fn dc_gain(&self) -> Option<f64> {
        let d0 = self.den.eval(0.0);
        if d0 == 0.0 {
            None
        } else {
            Some(self.num.eval(0.0) / d0)
        }
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) / ({})", self.num, self.den)
    }
}
