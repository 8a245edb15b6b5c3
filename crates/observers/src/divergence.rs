use kutta_core::{Observer, Sample};

use crate::traits::{CanStopEarly, HasSample};

/// Stops a run once the solution leaves `[-bound, bound]` or stops being
/// finite.
///
/// The pure entry points let a blow-up run to the last step. Passing this
/// observer to an observed solver ends the run at the first offending sample
/// instead, keeping the samples up to and including it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divergence {
    bound: f64,
    tripped_at: Option<usize>,
}

impl Divergence {
    /// Creates an observer that trips when `|y|` exceeds `bound`.
    ///
    /// A NaN bound places no limit on `|y|`, the same as [`Divergence::non_finite`].
    #[must_use]
    pub fn new(bound: f64) -> Self {
        let bound = if bound.is_nan() {
            f64::INFINITY
        } else {
            bound.abs()
        };
        Self {
            bound,
            tripped_at: None,
        }
    }

    /// Creates an observer that trips only on non-finite samples.
    #[must_use]
    pub fn non_finite() -> Self {
        Self::new(f64::INFINITY)
    }

    /// Returns the step that tripped the observer, if any.
    #[must_use]
    pub fn tripped_at(&self) -> Option<usize> {
        self.tripped_at
    }
}

impl<E: HasSample, A: CanStopEarly> Observer<E, A> for Divergence {
    fn observe(&mut self, event: &E) -> Option<A> {
        let sample = event.sample();
        if sample.is_finite() && sample.y().abs() <= self.bound {
            return None;
        }

        self.tripped_at = Some(event.step());
        Some(A::stop_early())
    }
}

/// Allows `&mut Divergence` to be passed to solvers that take an observer by
/// value, so [`Divergence::tripped_at`] can be read after the run.
impl<E: HasSample, A: CanStopEarly> Observer<E, A> for &mut Divergence {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
