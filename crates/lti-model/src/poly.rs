//! Real polynomials in the Laplace variable, highest power first.

use std::fmt;

use crate::error::{ModelError, ModelResult};

/// A real polynomial stored as an ordered coefficient sequence.
///
/// Index 0 holds the coefficient of the highest power. The sequence is
/// never empty; a constant polynomial has length 1. Leading zeros are kept
/// as given, so `degree()` reports the *stated* degree (length − 1), which
/// may exceed the actual degree when the leading coefficient is zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial from coefficients, highest power first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidModel` if the sequence is empty or contains a
    /// non-finite coefficient.
    pub fn new(coeffs: Vec<f64>) -> ModelResult<Self> {
        if coeffs.is_empty() {
            return Err(ModelError::InvalidModel {
                what: "polynomial must have at least one coefficient",
            });
        }
        if !coeffs.iter().all(|c| c.is_finite()) {
            return Err(ModelError::InvalidModel {
                what: "polynomial coefficients must be finite",
            });
        }
        Ok(Self { coeffs })
    }

    /// Coefficients, highest power first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Stated degree: number of coefficients minus one.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of the highest power.
    pub fn leading(&self) -> f64 {
        self.coeffs[0]
    }

    /// True when every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }

    /// Evaluate at `s` using Horner's rule.
    pub fn eval(&self, s: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, c| acc * s + c)
    }
}

/// Trim a float for display: `2.500` -> `2.5`, `10.000` -> `10`.
fn write_coeff(f: &mut fmt::Formatter<'_>, num: f64) -> fmt::Result {
    let s = format!("{:.3}", num);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    write!(f, "{s}")
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let degree = self.degree();
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let power = degree - i;
            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
                first = false;
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let mag = c.abs();
            if mag != 1.0 || power == 0 {
                write_coeff(f, mag)?;
            }
            match power {
                0 => {}
                1 => write!(f, "s")?,
                p => write!(f, "s^{p}")?,
            }
        }
        Ok(())
    }
}
