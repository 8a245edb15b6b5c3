use std::{
    cell::Cell,
    f64::consts::{E, TAU},
};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use kutta_core::{Accuracy, PhasePoint, Point, Sample};

use super::{
    Action, Config, Error, Event, NonFinitePolicy, Status, integrate, integrate_second_order,
    solve, solve_second_order, solve_second_order_unobserved, solve_unobserved,
};

const BOTH: [Accuracy; 2] = [Accuracy::SecondOrder, Accuracy::FourthOrder];

/// y' = y, with solution eˣ through (0, 1).
fn growth(_x: f64, y: f64) -> f64 {
    y
}

/// y'' = -y, with solution sin(x) for y(0) = 0, y'(0) = 1.
fn oscillator(_x: f64, y: f64, _z: f64) -> f64 {
    -y
}

/// Largest deviation from sin(x) over a trajectory.
fn max_sine_error(samples: &[PhasePoint]) -> f64 {
    samples
        .iter()
        .map(|s| (s.y - s.x.sin()).abs())
        .fold(0.0, f64::max)
}

/// Largest deviation of y² + z² from 1 over a trajectory.
fn max_energy_drift(samples: &[PhasePoint]) -> f64 {
    samples
        .iter()
        .map(|s| (s.y * s.y + s.z * s.z - 1.0).abs())
        .fold(0.0, f64::max)
}

fn assert_uniform_spacing<S: Sample>(samples: &[S], x0: f64, h: f64) {
    for (i, sample) in samples.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let expected = x0 + h * i as f64;
        assert_abs_diff_eq!(sample.x(), expected, epsilon = 1e-12);
    }
}

// --- Shape of the trajectory ---

#[test]
fn returns_one_sample_per_step_plus_initial() {
    for accuracy in BOTH {
        let initial = Point::new(0.5, 2.0);
        let samples = integrate(initial, 0.1, 50, accuracy, growth);

        assert_eq!(samples.len(), 51);
        assert_eq!(samples[0], initial);
        assert_uniform_spacing(&samples, 0.5, 0.1);

        let initial = PhasePoint::new(-1.0, 0.0, 1.0);
        let samples = integrate_second_order(initial, 0.25, 20, accuracy, oscillator);

        assert_eq!(samples.len(), 21);
        assert_eq!(samples[0], initial);
        assert_uniform_spacing(&samples, -1.0, 0.25);
    }
}

#[test]
fn zero_steps_returns_initial() {
    for accuracy in BOTH {
        let initial = Point::new(3.0, -4.0);
        assert_eq!(integrate(initial, 0.1, 0, accuracy, growth), vec![initial]);

        let initial = PhasePoint::new(3.0, -4.0, 5.0);
        assert_eq!(
            integrate_second_order(initial, 0.1, 0, accuracy, oscillator),
            vec![initial]
        );
    }
}

#[test]
fn zero_slope_is_a_fixed_point() {
    for accuracy in BOTH {
        let samples = integrate(Point::new(0.0, 7.5), 0.3, 25, accuracy, |_: f64, _: f64| 0.0);
        assert!(samples.iter().all(|s| s.y == 7.5));

        let samples = integrate_second_order(
            PhasePoint::new(0.0, 7.5, 0.0),
            0.3,
            25,
            accuracy,
            |_: f64, _: f64, _: f64| 0.0,
        );
        assert!(samples.iter().all(|s| s.y == 7.5 && s.z == 0.0));
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    for accuracy in BOTH {
        let first = integrate(Point::new(0.0, 1.0), 0.01, 200, accuracy, growth);
        let second = integrate(Point::new(0.0, 1.0), 0.01, 200, accuracy, growth);
        assert_eq!(first, second);

        let first = integrate_second_order(PhasePoint::new(0.0, 0.0, 1.0), 0.01, 200, accuracy, oscillator);
        let second = integrate_second_order(PhasePoint::new(0.0, 0.0, 1.0), 0.01, 200, accuracy, oscillator);
        assert_eq!(first, second);
    }
}

// --- Accuracy against closed-form solutions ---

#[test]
fn exponential_growth_reaches_e() {
    let rk2 = integrate(Point::new(0.0, 1.0), 0.01, 100, Accuracy::SecondOrder, growth);
    let rk4 = integrate(Point::new(0.0, 1.0), 0.01, 100, Accuracy::FourthOrder, growth);

    let rk2_error = (rk2[100].y - E).abs();
    let rk4_error = (rk4[100].y - E).abs();

    assert_abs_diff_eq!(rk2[100].x, 1.0, epsilon = 1e-12);
    assert!(rk2_error < 1e-4, "rk2 error {rk2_error}");
    assert!(rk4_error < 1e-9, "rk4 error {rk4_error}");
    assert!(
        rk4_error * 1e3 < rk2_error,
        "rk4 ({rk4_error}) should be orders of magnitude better than rk2 ({rk2_error})"
    );
}

#[test]
fn negative_step_integrates_backward() {
    let samples = integrate(Point::new(1.0, E), -0.01, 100, Accuracy::FourthOrder, growth);
    let last = samples[100];

    assert_abs_diff_eq!(last.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(last.y, 1.0, epsilon = 1e-8);
}

#[test]
fn oscillator_tracks_sine_over_one_period() {
    let start = PhasePoint::new(0.0, 0.0, 1.0);

    for (accuracy, coarse_tol) in [(Accuracy::SecondOrder, 1e-2), (Accuracy::FourthOrder, 1e-5)] {
        // A tenfold smaller step should cut the error by roughly 10^order.
        #[allow(clippy::cast_possible_wrap)]
        let shrink = 10.0_f64.powi(accuracy.order() as i32) / 5.0;

        let coarse = integrate_second_order(start, TAU / 100.0, 100, accuracy, oscillator);
        let fine = integrate_second_order(start, TAU / 1000.0, 1000, accuracy, oscillator);

        let coarse_error = max_sine_error(&coarse);
        let fine_error = max_sine_error(&fine);

        assert!(coarse_error < coarse_tol, "{accuracy:?}: {coarse_error}");
        assert!(
            fine_error * shrink < coarse_error,
            "{accuracy:?}: error should shrink with h ({coarse_error} -> {fine_error})"
        );

        let end = fine[1000];
        assert_abs_diff_eq!(end.x, TAU, epsilon = 1e-10);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(end.z, 1.0, epsilon = 1e-4);
    }
}

#[test]
fn oscillator_conserves_energy_for_small_steps() {
    let start = PhasePoint::new(0.0, 0.0, 1.0);

    let rk2 = integrate_second_order(start, TAU / 1000.0, 1000, Accuracy::SecondOrder, oscillator);
    let rk4 = integrate_second_order(start, TAU / 1000.0, 1000, Accuracy::FourthOrder, oscillator);

    assert!(max_energy_drift(&rk2) < 1e-5);
    assert!(max_energy_drift(&rk4) < 1e-9);
}

#[test]
fn damped_velocity_couples_stages() {
    // y'' = -y', y(0) = 0, y'(0) = 1: y = 1 - e⁻ˣ, y' = e⁻ˣ.
    let samples = integrate_second_order(
        PhasePoint::new(0.0, 0.0, 1.0),
        0.01,
        100,
        Accuracy::FourthOrder,
        |_: f64, _: f64, z: f64| -z,
    );
    let last = samples[100];

    assert_relative_eq!(last.y, 1.0 - (-1.0_f64).exp(), epsilon = 1e-9);
    assert_relative_eq!(last.z, (-1.0_f64).exp(), epsilon = 1e-9);
}

// --- Non-finite values ---

/// Slope that becomes NaN past x = 0.42.
fn poisoned(x: f64, y: f64) -> f64 {
    if x > 0.42 { f64::NAN } else { y }
}

#[test]
fn non_finite_values_poison_the_rest_of_the_run() {
    // Step 5 starts at x = 0.4 and is the first to evaluate past 0.42,
    // at x + h/2 for RK4 and at x + h for RK2.
    for accuracy in BOTH {
        let samples = integrate(Point::new(0.0, 1.0), 0.1, 10, accuracy, poisoned);

        assert_eq!(samples.len(), 11);
        assert!(samples[..5].iter().all(Sample::is_finite), "{accuracy:?}");
        assert!(samples[5..].iter().all(|s| s.y.is_nan()), "{accuracy:?}");
        assert!(samples.iter().all(|s| s.x.is_finite()), "{accuracy:?}");
    }
}

#[test]
fn non_finite_acceleration_reaches_velocity_before_position() {
    // y'' is NaN past x = 0.42. Step 5 is the first whose stages cross it.
    // RK2 only sees it in l2, which feeds z; y picks it up one step later
    // through k1 = h·z. RK4 sees it in l2, which feeds k3 in the same step.
    let accelerate = |x: f64, _: f64, _: f64| if x > 0.42 { f64::NAN } else { 0.0 };

    for (accuracy, first_nan_y) in [(Accuracy::SecondOrder, 6), (Accuracy::FourthOrder, 5)] {
        let samples =
            integrate_second_order(PhasePoint::new(0.0, 1.0, 0.0), 0.1, 10, accuracy, accelerate);

        assert_eq!(samples.len(), 11);
        assert!(samples.iter().all(|s| s.x.is_finite()), "{accuracy:?}");
        assert!(samples[..5].iter().all(Sample::is_finite), "{accuracy:?}");
        assert!(samples[5..].iter().all(|s| s.z.is_nan()), "{accuracy:?}");
        assert!(
            samples[..first_nan_y].iter().all(|s| s.y.is_finite()),
            "{accuracy:?}"
        );
        assert!(
            samples[first_nan_y..].iter().all(|s| s.y.is_nan()),
            "{accuracy:?}"
        );
    }
}

#[test]
fn propagate_policy_completes_the_run() {
    let config = Config::new(0.1, 10).accuracy(Accuracy::FourthOrder);
    let solution = solve_unobserved(Point::new(0.0, 1.0), poisoned, &config).expect("should run");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.samples.len(), 11);
    assert_eq!(solution.first_non_finite(), Some(5));
}

#[test]
fn fail_policy_reports_first_non_finite_step() {
    let config = Config::new(0.1, 10)
        .accuracy(Accuracy::FourthOrder)
        .non_finite(NonFinitePolicy::Fail);

    let error = solve_unobserved(Point::new(0.0, 1.0), poisoned, &config).unwrap_err();

    match error {
        Error::NonFinite { step, x } => {
            assert_eq!(step, 5);
            assert_abs_diff_eq!(x, 0.5, epsilon = 1e-12);
        }
        other @ Error::InvalidConfig(_) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fail_policy_rejects_non_finite_initial_sample() {
    let config = Config::new(0.1, 10).non_finite(NonFinitePolicy::Fail);

    let error = solve_second_order_unobserved(PhasePoint::new(0.0, f64::NAN, 1.0), oscillator, &config)
        .unwrap_err();

    assert_eq!(error, Error::NonFinite { step: 0, x: 0.0 });
}

// --- Observed solver ---

#[test]
fn observed_samples_match_pure_entry_points() {
    for accuracy in BOTH {
        let config = Config::new(0.05, 40).accuracy(accuracy);

        let solution = solve_unobserved(Point::new(0.0, 1.0), growth, &config).expect("should run");
        assert_eq!(
            solution.samples,
            integrate(Point::new(0.0, 1.0), 0.05, 40, accuracy, growth)
        );

        let start = PhasePoint::new(0.0, 0.0, 1.0);
        let solution = solve_second_order_unobserved(start, oscillator, &config).expect("should run");
        assert_eq!(
            solution.samples,
            integrate_second_order(start, 0.05, 40, accuracy, oscillator)
        );
    }
}

#[test]
fn events_cover_every_sample_in_order() {
    let mut events = Vec::new();
    let observer = |event: &Event<PhasePoint>| {
        events.push(*event);
        None
    };

    let config = Config::new(0.1, 8).accuracy(Accuracy::FourthOrder);
    let solution = solve_second_order(PhasePoint::new(0.0, 0.0, 1.0), oscillator, &config, observer)
        .expect("should run");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 8);
    assert_eq!(events.len(), 9);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.step, i);
        assert_eq!(event.sample, solution.samples[i]);
    }
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<Point>| {
        if event.step >= 5 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(Point::new(0.0, 1.0), growth, &Config::new(0.1, 100), observer)
        .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.samples.len(), 6);
    assert_eq!(solution.evaluations, 10);
}

#[test]
fn observer_can_stop_before_first_step() {
    let observer = |_: &Event<Point>| Some(Action::StopEarly);

    let solution = solve(Point::new(2.0, 3.0), growth, &Config::default(), observer)
        .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.last(), Some(Point::new(2.0, 3.0)));
}

#[test]
fn evaluations_count_derivative_calls() {
    for accuracy in BOTH {
        let calls = Cell::new(0);
        let counted = |_: f64, y: f64| {
            calls.set(calls.get() + 1);
            y
        };

        let config = Config::new(0.1, 10).accuracy(accuracy);
        let solution = solve_unobserved(Point::new(0.0, 1.0), counted, &config).expect("should run");

        assert_eq!(solution.evaluations, 10 * accuracy.stages());
        assert_eq!(calls.get(), solution.evaluations);
    }
}

#[test]
fn invalid_config_is_rejected_before_stepping() {
    let calls = Cell::new(0);
    let counted = |_: f64, y: f64| {
        calls.set(calls.get() + 1);
        y
    };

    let result = solve_unobserved(Point::new(0.0, 1.0), counted, &Config::new(f64::NAN, 10));

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert_eq!(calls.get(), 0);
}
