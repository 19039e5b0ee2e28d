//! Integration tests: step responses of the classic teaching systems.

use lti_model::{ModelError, TransferFunction};
use lti_sim::{IntegratorType, SimError, SolverOptions, TimeGrid, step_response, step_response_with};

fn tf(num: &[f64], den: &[f64]) -> TransferFunction {
    TransferFunction::new(num.to_vec(), den.to_vec()).unwrap()
}

#[test]
fn time_ordering_matches_grid() {
    let grid = TimeGrid::default();
    let samples = step_response(&tf(&[1.0], &[1.0, 1.0]), &grid).unwrap();
    assert_eq!(samples.len(), grid.len());
    for (s, &t) in samples.iter().zip(grid.times()) {
        assert_eq!(s.time, t);
    }
}

#[test]
fn first_order_lag_converges_to_unity() {
    // 1/(s+1): y(t) = 1 - e^(-t)
    let samples = step_response(&tf(&[1.0], &[1.0, 1.0]), &TimeGrid::default()).unwrap();
    assert_eq!(samples[0].amplitude, 0.0);
    let last = samples.last().unwrap();
    assert!((last.amplitude - 1.0).abs() < 1e-2);

    // exact discretization tracks the analytic solution much tighter
    for s in &samples {
        let exact = 1.0 - (-s.time).exp();
        assert!((s.amplitude - exact).abs() < 1e-9, "at t = {}", s.time);
    }
}

#[test]
fn unstable_pole_diverges() {
    // 1/(s-1): y(t) = e^t - 1, grows without bound and must not be clamped
    let grid = TimeGrid::default();
    let samples = step_response(&tf(&[1.0], &[1.0, -1.0]), &grid).unwrap();

    let at = |t: f64| {
        samples
            .iter()
            .min_by(|a, b| {
                (a.time - t).abs().partial_cmp(&(b.time - t).abs()).unwrap()
            })
            .unwrap()
            .amplitude
    };
    let y1 = at(1.0);
    let y10 = at(10.0);
    assert!(y10.is_finite());
    assert!(y10.abs() > 100.0 * y1.abs());
}

#[test]
fn underdamped_second_order_overshoots() {
    // 1/(s^2 + s + 10): complex poles, settles at 0.1 after overshooting
    let system = tf(&[1.0], &[1.0, 1.0, 10.0]);
    let samples = step_response(&system, &TimeGrid::default()).unwrap();

    let final_value = system.dc_gain().unwrap();
    let peak = samples
        .iter()
        .map(|s| s.amplitude)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(peak > final_value, "no overshoot: peak {peak}");

    let last = samples.last().unwrap();
    assert!((last.amplitude - final_value).abs() < 1e-2);
}

#[test]
fn third_order_critically_damped() {
    // 1/(s+1)^3: monotone rise to 1
    let samples = step_response(&tf(&[1.0], &[1.0, 3.0, 3.0, 1.0]), &TimeGrid::default()).unwrap();
    let last = samples.last().unwrap();
    assert!((last.amplitude - 1.0).abs() < 1e-2);
    for w in samples.windows(2) {
        assert!(w[1].amplitude >= w[0].amplitude - 1e-12);
    }
}

#[test]
fn lead_compensator_feedthrough() {
    // (s+2)/(s+10): y(0) = 1 through the D-term, settles at 0.2
    let samples = step_response(&tf(&[1.0, 2.0], &[1.0, 10.0]), &TimeGrid::default()).unwrap();
    assert_eq!(samples[0].amplitude, 1.0);
    let last = samples.last().unwrap();
    assert!((last.amplitude - 0.2).abs() < 1e-6);
}

#[test]
fn pure_gain_is_constant() {
    let samples = step_response(&tf(&[3.0], &[2.0]), &TimeGrid::default()).unwrap();
    for s in &samples {
        assert_eq!(s.amplitude, 1.5);
    }
}

#[test]
fn pure_integrator_ramps() {
    // 1/s: y(t) = t
    let samples = step_response(&tf(&[1.0], &[1.0, 0.0]), &TimeGrid::default()).unwrap();
    for s in &samples {
        assert!((s.amplitude - s.time).abs() < 1e-9);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let system = tf(&[1.0], &[1.0, 1.0, 10.0]);
    let grid = TimeGrid::default();
    let a = step_response(&system, &grid).unwrap();
    let b = step_response(&system, &grid).unwrap();
    assert_eq!(a, b);
}

#[test]
fn improper_numerator_rejected() {
    let err = step_response(&tf(&[1.0, 0.0, 0.0], &[1.0, 1.0]), &TimeGrid::default()).unwrap_err();
    assert!(matches!(
        err,
        SimError::Model(ModelError::InvalidModel { .. })
    ));
}

#[test]
fn negative_times_sample_to_zero() {
    let grid = TimeGrid::new(vec![-2.0, -1.0, 0.0, 1.0]).unwrap();
    let samples = step_response(&tf(&[1.0], &[1.0, 1.0]), &grid).unwrap();
    assert_eq!(samples[0].amplitude, 0.0);
    assert_eq!(samples[1].amplitude, 0.0);
    assert_eq!(samples[2].amplitude, 0.0);
    assert!(samples[3].amplitude > 0.0);
}

#[test]
fn rk4_agrees_with_exact_discretization() {
    let system = tf(&[1.0], &[1.0, 1.0]);
    let grid = TimeGrid::default();
    let exact = step_response(&system, &grid).unwrap();
    let opts = SolverOptions {
        integrator: IntegratorType::Rk4,
        ..SolverOptions::default()
    };
    let rk4 = step_response_with(&system, &grid, &opts).unwrap();
    for (a, b) in exact.iter().zip(&rk4) {
        assert!((a.amplitude - b.amplitude).abs() < 1e-4);
    }
}

#[test]
fn grid_not_starting_at_zero() {
    // the state still advances from t = 0, not from the first sample
    let grid = TimeGrid::new(vec![5.0, 10.0]).unwrap();
    let samples = step_response(&tf(&[1.0], &[1.0, 1.0]), &grid).unwrap();
    assert!((samples[0].amplitude - (1.0 - (-5.0_f64).exp())).abs() < 1e-9);
    assert!((samples[1].amplitude - (1.0 - (-10.0_f64).exp())).abs() < 1e-9);
}
