/// Event emitted by the Runge–Kutta solver for each sample.
///
/// Step 0 is the initial sample, before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<S> {
    /// The step number (0 for the initial sample).
    pub step: usize,

    /// The sample produced at this step.
    pub sample: S,
}
