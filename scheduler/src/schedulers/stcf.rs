use log::debug;

use crate::common_funcs::{bootstrap, pick_shortest};
use crate::{DecisionContext, Pid, ProcessSnapshot, Scheduler};

/// Total burst minus executed time; negative once a process overran its burst
fn remaining_time(ctx: &DecisionContext, proc: &ProcessSnapshot) -> i64 {
    let total = i64::try_from(ctx.oracle.total_time(proc.pid)).unwrap_or(i64::MAX);
    let executed = i64::try_from(proc.executed_time).unwrap_or(i64::MAX);

    total - executed
}

/// Shortest time to completion first.
///
/// Preemptive: every tick the ready process with the least remaining work
/// (total burst minus executed time) wins, even against the running one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestToCompletionScheduler;

impl ShortestToCompletionScheduler {
    pub fn new() -> ShortestToCompletionScheduler {
        ShortestToCompletionScheduler
    }
}

impl Scheduler for ShortestToCompletionScheduler {
    fn name(&self) -> &'static str {
        "stcf"
    }

    fn select_next(&self, ctx: &DecisionContext) -> Option<Pid> {
        if let Some(pid) = bootstrap(ctx) {
            return pid;
        }

        let pid = pick_shortest(ctx, |proc| remaining_time(ctx, proc));
        debug!("stcf at tick {}: {:?}", ctx.current_tick, pid);

        pid
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{ProcessSnapshot, Timestamp};

    fn bursts(entries: &[(usize, usize)]) -> HashMap<Pid, usize> {
        entries.iter().map(|&(pid, time)| (Pid::new(pid), time)).collect()
    }

    #[test]
    fn picks_least_remaining_time() {
        let procs = [ProcessSnapshot::ready(1, 0), ProcessSnapshot::ready(2, 3)];
        let oracle = bursts(&[(1, 10), (2, 4)]);
        let ctx = DecisionContext::new(&procs, Timestamp::new(3), Some(Pid::new(1)), &oracle);

        assert_eq!(ShortestToCompletionScheduler::new().select_next(&ctx), Some(Pid::new(2)));
    }

    #[test]
    fn preempts_for_an_almost_done_long_job() {
        // pid 1 has 1 tick left out of 20, pid 2 needs all of its 5
        let procs = [ProcessSnapshot::ready(2, 0), ProcessSnapshot::ready(1, 19)];
        let oracle = bursts(&[(1, 20), (2, 5)]);
        let ctx = DecisionContext::new(&procs, Timestamp::new(40), Some(Pid::new(2)), &oracle);

        assert_eq!(ShortestToCompletionScheduler::new().select_next(&ctx), Some(Pid::new(1)));
    }

    #[test]
    fn equal_remaining_goes_to_first_seen() {
        let procs = [
            ProcessSnapshot::ready(5, 2),
            ProcessSnapshot::ready(6, 0),
            ProcessSnapshot::ready(7, 6),
        ];
        // remaining: 5 -> 4, 6 -> 4, 7 -> 4
        let oracle = bursts(&[(5, 6), (6, 4), (7, 10)]);
        let ctx = DecisionContext::new(&procs, Timestamp::new(8), Some(Pid::new(7)), &oracle);

        assert_eq!(ShortestToCompletionScheduler::new().select_next(&ctx), Some(Pid::new(5)));
    }

    #[test]
    fn blocked_processes_are_not_candidates() {
        let procs = [ProcessSnapshot::blocked(1, 9), ProcessSnapshot::ready(2, 0)];
        let oracle = bursts(&[(1, 10), (2, 30)]);
        let ctx = DecisionContext::new(&procs, Timestamp::new(12), Some(Pid::new(1)), &oracle);

        assert_eq!(ShortestToCompletionScheduler::new().select_next(&ctx), Some(Pid::new(2)));
    }

    #[test]
    fn all_on_io_idles() {
        let procs = [ProcessSnapshot::blocked(1, 0)];
        let oracle = bursts(&[(1, 3)]);
        let ctx = DecisionContext::new(&procs, Timestamp::new(2), Some(Pid::new(1)), &oracle);

        assert_eq!(ShortestToCompletionScheduler::new().select_next(&ctx), None);
    }

    #[test]
    fn overrun_beats_a_finished_burst() {
        // pid 1 has 0 left, pid 2 ran 2 ticks past its burst
        let procs = [ProcessSnapshot::ready(1, 5), ProcessSnapshot::ready(2, 12)];
        let oracle = bursts(&[(1, 5), (2, 10)]);
        let ctx = DecisionContext::new(&procs, Timestamp::new(17), Some(Pid::new(1)), &oracle);

        assert_eq!(ShortestToCompletionScheduler::new().select_next(&ctx), Some(Pid::new(2)));
    }

    #[test]
    fn overrun_is_shorter_than_any_pending_work() {
        let procs = [ProcessSnapshot::ready(1, 2), ProcessSnapshot::ready(2, 12)];
        let oracle = bursts(&[(1, 3), (2, 10)]);
        let ctx = DecisionContext::new(&procs, Timestamp::new(14), Some(Pid::new(1)), &oracle);

        assert_eq!(ShortestToCompletionScheduler::new().select_next(&ctx), Some(Pid::new(2)));
    }
}
