use kutta_core::Sample;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Runge–Kutta integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Samples from each step, including the initial sample.
    pub samples: Vec<S>,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Number of derivative evaluations performed.
    pub evaluations: usize,
}

impl<S> Solution<S> {
    pub(super) fn new(status: Status, samples: Vec<S>, steps: usize, stages: usize) -> Self {
        Self {
            status,
            samples,
            steps,
            evaluations: steps * stages,
        }
    }
}

impl<S: Sample> Solution<S> {
    /// Returns the final sample.
    #[must_use]
    pub fn last(&self) -> Option<S> {
        self.samples.last().copied()
    }

    /// Returns the index of the first sample with a non-finite component.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.samples.iter().position(|sample| !sample.is_finite())
    }
}
