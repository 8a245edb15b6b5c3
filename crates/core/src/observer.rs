/// Receives solver events and decides whether the run should continue.
///
/// An observer sees every sample a solver produces, in order. It can watch a
/// run (progress, tabulation, plotting) or steer it by returning a
/// solver-specific action such as stopping early.
///
/// `Some(action)` requests the action and `None` lets the solver continue
/// unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer
/// that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
