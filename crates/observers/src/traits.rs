//! Capability traits for generic observers.
//!
//! These traits abstract over the solver's event and action types so an
//! observer can be written once and used with any sample type.
//!
//! # Example
//!
//! ```rust
//! use kutta_core::{Observer, Sample};
//! use kutta_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once the solution reaches a target value.
//! struct Reached {
//!     target: f64,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for Reached {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.sample().y() >= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use kutta_core::Sample;
use kutta_solvers::ode::runge_kutta;

/// An event that carries a trajectory sample.
pub trait HasSample {
    /// The sample type carried by the event.
    type Sample: Sample;

    /// Returns the step number (0 for the initial sample).
    fn step(&self) -> usize;

    /// Returns the sample for this event.
    fn sample(&self) -> Self::Sample;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<S: Sample> HasSample for runge_kutta::Event<S> {
    type Sample = S;

    fn step(&self) -> usize {
        self.step
    }

    fn sample(&self) -> S {
        self.sample
    }
}

impl CanStopEarly for runge_kutta::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
