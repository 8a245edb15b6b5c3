//! Explicit fixed-step Runge–Kutta integration.
//!
//! # Equations
//!
//! Two forms are supported:
//!
//! - **First order**, `y' = f(x, y)`, sampled as [`Point`]s.
//! - **Second order**, `y'' = f(x, y, y')`, reduced to the first-order system
//!   `y' = z`, `z' = f(x, y, z)` and sampled as [`PhasePoint`]s.
//!
//! Each form steps at [`Accuracy::SecondOrder`] (two stages) or
//! [`Accuracy::FourthOrder`] (classical RK4, four stages). The accuracy is
//! resolved into a stepping function once, before the first step.
//!
//! # Entry points
//!
//! [`integrate`] and [`integrate_second_order`] are pure: they never validate
//! and never fail. A non-finite value returned by `f` propagates into the
//! trajectory, and because every step reads only the previous sample, all
//! later samples are poisoned too.
//!
//! [`solve`] and [`solve_second_order`] run the same steppers under a
//! [`Config`] and report each sample to an [`Observer`]. The observer may
//! return [`Action::StopEarly`]. With [`NonFinitePolicy::Fail`] the run stops
//! at the first non-finite sample with [`Error::NonFinite`].
//!
//! # Example
//!
//! ```
//! use kutta_core::{Accuracy, Point};
//! use kutta_solvers::ode::runge_kutta;
//!
//! // y' = y, y(0) = 1
//! let samples = runge_kutta::integrate(Point::new(0.0, 1.0), 0.01, 100, Accuracy::FourthOrder, |_, y| y);
//!
//! assert_eq!(samples.len(), 101);
//! assert!((samples[100].y - std::f64::consts::E).abs() < 1e-8);
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub mod first_order;
pub mod second_order;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, NonFinitePolicy};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use kutta_core::{Accuracy, Observer, PhasePoint, Point, Sample};

/// Integrates `y' = f(x, y)` for `steps` fixed steps of size `h`.
///
/// Returns `steps + 1` samples. The first is `initial`, unchanged, and the
/// `x` values advance by `h` each step. `h` may be negative to integrate
/// backward.
pub fn integrate<F>(initial: Point, h: f64, steps: usize, accuracy: Accuracy, f: F) -> Vec<Point>
where
    F: Fn(f64, f64) -> f64,
{
    let step = first_order::stepper::<F>(accuracy);
    trajectory(initial, steps, |current| step(&f, current, h))
}

/// Integrates `y'' = f(x, y, y')` for `steps` fixed steps of size `h`.
///
/// `initial.z` is the initial first derivative. Returns `steps + 1` samples,
/// the first of which is `initial`, unchanged.
pub fn integrate_second_order<F>(
    initial: PhasePoint,
    h: f64,
    steps: usize,
    accuracy: Accuracy,
    f: F,
) -> Vec<PhasePoint>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let step = second_order::stepper::<F>(accuracy);
    trajectory(initial, steps, |current| step(&f, current, h))
}

/// Integrates `y' = f(x, y)` under `config`, reporting every sample to the
/// observer.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the config is invalid, or
/// [`Error::NonFinite`] if a non-finite sample is produced under
/// [`NonFinitePolicy::Fail`].
pub fn solve<F, Obs>(
    initial: Point,
    f: F,
    config: &Config,
    observer: Obs,
) -> Result<Solution<Point>, Error>
where
    F: Fn(f64, f64) -> f64,
    Obs: Observer<Event<Point>, Action>,
{
    let step = first_order::stepper::<F>(config.accuracy);
    let h = config.step;
    drive(initial, config, |current| step(&f, current, h), observer)
}

/// Integrates `y' = f(x, y)` under `config` without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(initial: Point, f: F, config: &Config) -> Result<Solution<Point>, Error>
where
    F: Fn(f64, f64) -> f64,
{
    solve(initial, f, config, ())
}

/// Integrates `y'' = f(x, y, y')` under `config`, reporting every sample to
/// the observer.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the config is invalid, or
/// [`Error::NonFinite`] if a non-finite sample is produced under
/// [`NonFinitePolicy::Fail`].
pub fn solve_second_order<F, Obs>(
    initial: PhasePoint,
    f: F,
    config: &Config,
    observer: Obs,
) -> Result<Solution<PhasePoint>, Error>
where
    F: Fn(f64, f64, f64) -> f64,
    Obs: Observer<Event<PhasePoint>, Action>,
{
    let step = second_order::stepper::<F>(config.accuracy);
    let h = config.step;
    drive(initial, config, |current| step(&f, current, h), observer)
}

/// Integrates `y'' = f(x, y, y')` under `config` without observation.
///
/// # Errors
///
/// See [`solve_second_order`].
pub fn solve_second_order_unobserved<F>(
    initial: PhasePoint,
    f: F,
    config: &Config,
) -> Result<Solution<PhasePoint>, Error>
where
    F: Fn(f64, f64, f64) -> f64,
{
    solve_second_order(initial, f, config, ())
}

/// Threads the current sample through `steps` applications of `advance`,
/// keeping every intermediate sample.
fn trajectory<S: Copy>(initial: S, steps: usize, mut advance: impl FnMut(S) -> S) -> Vec<S> {
    let mut samples = Vec::with_capacity(steps.saturating_add(1));
    samples.push(initial);

    (0..steps).fold(initial, |current, _| {
        let next = advance(current);
        samples.push(next);
        next
    });

    samples
}

/// Observed counterpart of [`trajectory`].
///
/// # Algorithm
///
/// 1. Validate the config.
/// 2. Emit an event for the initial sample (step 0).
/// 3. For each step:
///    - Advance the current sample.
///    - Emit an event for the new sample.
///    - Under [`NonFinitePolicy::Fail`], stop with an error if it is not finite.
///    - If the observer returned `StopEarly`, stop with the samples so far.
fn drive<S, Obs>(
    initial: S,
    config: &Config,
    mut advance: impl FnMut(S) -> S,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: Sample,
    Obs: Observer<Event<S>, Action>,
{
    config.validate()?;

    let stages = config.accuracy.stages();
    let fail_on_non_finite = config.non_finite == NonFinitePolicy::Fail;

    let mut samples = Vec::with_capacity(config.steps.saturating_add(1));
    samples.push(initial);

    let action = observer.observe(&Event {
        step: 0,
        sample: initial,
    });
    if fail_on_non_finite && !initial.is_finite() {
        return Err(Error::NonFinite {
            step: 0,
            x: initial.x(),
        });
    }
    if let Some(Action::StopEarly) = action {
        return Ok(Solution::new(Status::StoppedByObserver, samples, 0, stages));
    }

    let mut current = initial;

    for step in 1..=config.steps {
        current = advance(current);
        samples.push(current);

        let action = observer.observe(&Event {
            step,
            sample: current,
        });

        if fail_on_non_finite && !current.is_finite() {
            return Err(Error::NonFinite {
                step,
                x: current.x(),
            });
        }

        if let Some(Action::StopEarly) = action {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                samples,
                step,
                stages,
            ));
        }
    }

    Ok(Solution::new(Status::Complete, samples, config.steps, stages))
}
