/// Receives the steps an algorithm takes, in the order it takes them.
///
/// Callers that only need the result pass `&mut ()`, which discards every step. Tests and
/// callers that want to show their work pass a `Vec`.
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
