use crate::{DecisionContext, Pid};

/// A scheduling policy.
///
/// Policies never change host state: they look at the context and answer
/// which process should own the CPU for the current tick.
pub trait Scheduler {
    /// Name under which the policy is registered
    fn name(&self) -> &'static str;

    /// Picks the pid that should run now, `None` if the CPU should idle
    fn select_next(&self, ctx: &DecisionContext) -> Option<Pid>;

    /// Same decision, in the raw integer form the host expects (-1 for idle)
    fn select_next_raw(&self, ctx: &DecisionContext) -> i64 {
        Pid::into_raw(self.select_next(ctx))
    }
}
