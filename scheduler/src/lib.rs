//! A scheduling policy library.
//!
//! Each policy answers one question for a process simulator: given the
//! processes it knows about at the current tick, which one should own the
//! CPU next. Policies never touch simulator state; the simulator hands them
//! a [`DecisionContext`] and acts on the returned pid.
//!

use std::num::NonZeroUsize;

mod schedulers;
pub use schedulers::{
    FeedbackQueues, FeedbackScheduler, FifoScheduler, PriorityLevel, RoundRobinScheduler,
    ShortestJobScheduler, ShortestToCompletionScheduler,
};

mod scheduler;
pub use crate::scheduler::Scheduler;

mod common_types;
pub use crate::common_types::{Pid, Timestamp, IDLE};

mod process_snapshot;
pub use crate::process_snapshot::{DecisionContext, ProcessSnapshot};

mod oracle;
pub use crate::oracle::TotalTimeOracle;

mod config;
pub use crate::config::{
    PriorityThresholds, SchedulerConfig, DEFAULT_QUANTUM, LOW_THRESHOLD, MEDIUM_THRESHOLD,
};

mod error;
pub use crate::error::SchedulerError;

mod registry;
pub use crate::registry::{resolve_policy, try_resolve_policy, Policy, PolicyRegistry};

mod common_funcs;

/// Returns a structure that implements the `Scheduler` trait with a first come, first served policy
pub fn fifo() -> impl Scheduler {
    FifoScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive
/// shortest job first policy
pub fn sjf() -> impl Scheduler {
    ShortestJobScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with a preemptive
/// shortest time to completion first policy
pub fn stcf() -> impl Scheduler {
    ShortestToCompletionScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `timeslice` - the number of ticks a process keeps the CPU before the next
///                 process of the snapshot gets it
pub fn round_robin(timeslice: NonZeroUsize) -> impl Scheduler {
    RoundRobinScheduler::new(timeslice)
}

/// Returns a structure that implements the `Scheduler` trait with a multilevel feedback
/// queue policy
/// * `thresholds` - the executed times at which a process moves to the MEDIUM and
///                  to the LOW level
pub fn mlfq(thresholds: PriorityThresholds) -> impl Scheduler {
    FeedbackScheduler::new(thresholds)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn agrees_with_registry(policy: &dyn Scheduler) {
        let registered = try_resolve_policy(policy.name()).unwrap();
        let procs = [
            ProcessSnapshot::ready(1, 6),
            ProcessSnapshot::blocked(2, 0),
            ProcessSnapshot::ready(3, 11),
            ProcessSnapshot::ready(4, 2),
        ];
        let bursts: HashMap<Pid, usize> = [(Pid::new(1), 20), (Pid::new(2), 2), (Pid::new(3), 12), (Pid::new(4), 9)]
            .into_iter()
            .collect();

        for tick in 0..12 {
            for running in [None, Some(Pid::new(1)), Some(Pid::new(3)), Some(Pid::new(4))] {
                let ctx = DecisionContext::new(&procs, Timestamp::new(tick), running, &bursts);
                assert_eq!(policy.select_next(&ctx), registered.select_next(&ctx));
            }
        }
    }

    #[test]
    fn constructors_match_registered_policies() {
        agrees_with_registry(&fifo());
        agrees_with_registry(&sjf());
        agrees_with_registry(&stcf());
        agrees_with_registry(&round_robin(NonZeroUsize::new(DEFAULT_QUANTUM).unwrap()));
        agrees_with_registry(&mlfq(PriorityThresholds::default()));
    }

    #[test]
    fn constructors_carry_registered_names() {
        let names = [
            fifo().name(),
            sjf().name(),
            round_robin(NonZeroUsize::new(2).unwrap()).name(),
            mlfq(PriorityThresholds::default()).name(),
            stcf().name(),
        ];

        assert_eq!(names, Policy::NAMES);
    }
}
