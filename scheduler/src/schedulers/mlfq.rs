use log::{debug, trace};

use crate::schedulers::{FeedbackQueues, PriorityLevel};
use crate::{DecisionContext, Pid, PriorityThresholds, Scheduler};

/// Multilevel feedback queue.
///
/// The queues are rebuilt on every call: a process's level depends only on
/// the CPU time it has consumed so far, so there is no aging or promotion
/// history to keep between ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeedbackScheduler {
    thresholds: PriorityThresholds,
}

impl FeedbackScheduler {
    pub fn new(thresholds: PriorityThresholds) -> FeedbackScheduler {
        FeedbackScheduler { thresholds }
    }

    pub fn thresholds(&self) -> PriorityThresholds {
        self.thresholds
    }

    /// Sorts the ready processes of the snapshot into their levels
    pub fn build_queues(&self, ctx: &DecisionContext) -> FeedbackQueues {
        let mut queues = FeedbackQueues::new();

        for proc in ctx.eligible() {
            let level = PriorityLevel::for_executed_time(proc.executed_time, &self.thresholds);
            trace!("mlfq_io: pid {} -> {:?}", proc.pid, level);
            queues.enqueue(level, proc.pid);
        }

        queues
    }
}

impl Scheduler for FeedbackScheduler {
    fn name(&self) -> &'static str {
        "mlfq_io"
    }

    fn select_next(&self, ctx: &DecisionContext) -> Option<Pid> {
        let pid = self.build_queues(ctx).next();
        debug!("mlfq_io at tick {}: {:?}", ctx.current_tick, pid);

        pid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProcessSnapshot, Timestamp};

    fn burst(_: Pid) -> usize {
        20
    }

    fn pick(procs: &[ProcessSnapshot]) -> Option<Pid> {
        let ctx = DecisionContext::new(procs, Timestamp::new(3), Some(Pid::new(1)), &burst);
        FeedbackScheduler::default().select_next(&ctx)
    }

    #[test]
    fn fresh_process_beats_medium_one() {
        let procs = [ProcessSnapshot::ready(1, 7), ProcessSnapshot::ready(2, 0)];
        assert_eq!(pick(&procs), Some(Pid::new(2)));
    }

    #[test]
    fn low_level_runs_only_alone() {
        let procs = [ProcessSnapshot::ready(1, 12), ProcessSnapshot::ready(2, 9)];
        assert_eq!(pick(&procs), Some(Pid::new(2)));

        let procs = [ProcessSnapshot::ready(1, 12), ProcessSnapshot::blocked(2, 0)];
        assert_eq!(pick(&procs), Some(Pid::new(1)));
    }

    #[test]
    fn same_level_keeps_snapshot_order() {
        let procs = [
            ProcessSnapshot::ready(4, 8),
            ProcessSnapshot::ready(6, 3),
            ProcessSnapshot::ready(5, 1),
        ];
        assert_eq!(pick(&procs), Some(Pid::new(6)));
    }

    #[test]
    fn queues_hold_each_ready_pid_once() {
        let procs = [
            ProcessSnapshot::ready(1, 0),
            ProcessSnapshot::ready(2, 5),
            ProcessSnapshot::blocked(3, 0),
            ProcessSnapshot::ready(4, 10),
            ProcessSnapshot::ready(5, 2),
        ];
        let ctx = DecisionContext::new(&procs, Timestamp::new(0), None, &burst);
        let mut queues = FeedbackScheduler::default().build_queues(&ctx);

        assert_eq!(queues.len(PriorityLevel::High), 2);
        assert_eq!(queues.len(PriorityLevel::Medium), 1);
        assert_eq!(queues.len(PriorityLevel::Low), 1);
        assert_eq!(queues.pop_front(PriorityLevel::High), Some(Pid::new(1)));
        assert_eq!(queues.pop_front(PriorityLevel::High), Some(Pid::new(5)));
    }

    #[test]
    fn all_on_io_idles() {
        let procs = [ProcessSnapshot::blocked(1, 0), ProcessSnapshot::blocked(2, 11)];
        assert_eq!(pick(&procs), None);
    }

    #[test]
    fn custom_thresholds() {
        let mlfq = FeedbackScheduler::new(PriorityThresholds::new(2, 4).unwrap());
        let procs = [ProcessSnapshot::ready(1, 3), ProcessSnapshot::ready(2, 4)];
        let ctx = DecisionContext::new(&procs, Timestamp::new(0), Some(Pid::new(2)), &burst);

        assert_eq!(mlfq.select_next(&ctx), Some(Pid::new(1)));
    }
}
