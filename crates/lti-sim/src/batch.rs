//! Parallel step responses for independent systems.

use lti_model::TransferFunction;
use rayon::prelude::*;

use crate::error::SimResult;
use crate::grid::TimeGrid;
use crate::response::{ResponseSample, SolverOptions, step_response_with};

/// Compute step responses for several independent transfer functions.
///
/// Each computation is a pure function of its own inputs, so the batch
/// runs fully in parallel with no shared state. Results come back in
/// input order, one per transfer function, each succeeding or failing
/// independently.
pub fn step_response_batch(
    tfs: &[TransferFunction],
    grid: &TimeGrid,
    opts: &SolverOptions,
) -> Vec<SimResult<Vec<ResponseSample>>> {
    tfs.par_iter()
        .map(|tf| step_response_with(tf, grid, opts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::step_response;

    #[test]
    fn batch_matches_serial() {
        let tfs = vec![
            TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap(),
            TransferFunction::new(vec![1.0], vec![1.0, 1.0, 10.0]).unwrap(),
            TransferFunction::new(vec![1.0], vec![1.0, -1.0]).unwrap(),
        ];
        let grid = TimeGrid::uniform(0.0, 5.0, 100).unwrap();

        let batch = step_response_batch(&tfs, &grid, &SolverOptions::default());
        assert_eq!(batch.len(), 3);
        for (tf, result) in tfs.iter().zip(&batch) {
            let serial = step_response(tf, &grid).unwrap();
            assert_eq!(result.as_ref().unwrap(), &serial);
        }
    }

    #[test]
    fn batch_failures_are_independent() {
        let tfs = vec![
            TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap(),
            // realizes to SingularSystem
            TransferFunction::new(vec![1.0], vec![0.0, 1.0]).unwrap(),
        ];
        let grid = TimeGrid::uniform(0.0, 1.0, 10).unwrap();

        let batch = step_response_batch(&tfs, &grid, &SolverOptions::default());
        assert!(batch[0].is_ok());
        assert!(batch[1].is_err());
    }
}
