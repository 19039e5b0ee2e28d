//! Validated sample-time grids.

use lti_core::is_non_decreasing;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// An ordered sequence of sample times.
///
/// Times must be finite and non-decreasing; repeated times are allowed and
/// produce repeated samples. Negative times are allowed and sample to
/// amplitude 0, matching the unit-step convention (input is 0 for t < 0).
/// The empty grid is allowed and yields an empty response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Build a grid from explicit sample times.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if any time is non-finite or the sequence
    /// decreases anywhere.
    pub fn new(times: Vec<f64>) -> SimResult<Self> {
        if !times.iter().all(|t| t.is_finite()) {
            return Err(SimError::InvalidGrid {
                what: "sample times must be finite",
            });
        }
        if !is_non_decreasing(&times) {
            return Err(SimError::InvalidGrid {
                what: "sample times must be non-decreasing",
            });
        }
        Ok(Self { times })
    }

    /// Build a uniform grid of `points` samples over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the endpoints are non-finite or reversed,
    /// or `points` is zero.
    pub fn uniform(start: f64, end: f64, points: usize) -> SimResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SimError::InvalidGrid {
                what: "grid endpoints must be finite",
            });
        }
        if end < start {
            return Err(SimError::InvalidGrid {
                what: "grid end must not precede start",
            });
        }
        if points == 0 {
            return Err(SimError::InvalidGrid {
                what: "grid must have at least one point",
            });
        }
        if points == 1 {
            return Ok(Self {
                times: vec![start],
            });
        }
        let step = (end - start) / (points - 1) as f64;
        let times = (0..points)
            .map(|i| {
                if i == points - 1 {
                    // land exactly on the endpoint
                    end
                } else {
                    start + step * i as f64
                }
            })
            .collect();
        Ok(Self { times })
    }

    /// Sample times in order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// The reference grid: 500 uniform points over [0, 10].
impl Default for TimeGrid {
    fn default() -> Self {
        Self::uniform(0.0, 10.0, 500).expect("reference grid parameters are valid")
    }
}

impl TryFrom<Vec<f64>> for TimeGrid {
    type Error = SimError;

    fn try_from(times: Vec<f64>) -> SimResult<Self> {
        Self::new(times)
    }
}

impl From<TimeGrid> for Vec<f64> {
    fn from(grid: TimeGrid) -> Self {
        grid.times
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_grid_shape() {
        let grid = TimeGrid::uniform(0.0, 10.0, 500).unwrap();
        assert_eq!(grid.len(), 500);
        assert_eq!(grid.times()[0], 0.0);
        assert_eq!(*grid.times().last().unwrap(), 10.0);
        assert!(lti_core::is_non_decreasing(grid.times()));
    }

    #[test]
    fn single_point_grid() {
        let grid = TimeGrid::uniform(2.0, 5.0, 1).unwrap();
        assert_eq!(grid.times(), &[2.0]);
    }

    #[test]
    fn decreasing_times_rejected() {
        let err = TimeGrid::new(vec![0.0, 1.0, 0.5]).unwrap_err();
        assert!(matches!(err, SimError::InvalidGrid { .. }));
    }

    #[test]
    fn non_finite_times_rejected() {
        assert!(TimeGrid::new(vec![0.0, f64::NAN]).is_err());
        assert!(TimeGrid::uniform(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn negative_and_repeated_times_allowed() {
        let grid = TimeGrid::new(vec![-1.0, 0.0, 0.0, 2.0]).unwrap();
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn default_is_reference_grid() {
        let grid = TimeGrid::default();
        assert_eq!(grid.len(), 500);
        assert_eq!(*grid.times().last().unwrap(), 10.0);
    }
}
