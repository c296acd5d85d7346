use log::debug;

use crate::common_funcs::{bootstrap, pick_shortest};
use crate::{DecisionContext, Pid, Scheduler};

/// Shortest job first, judged on the total burst of each process.
///
/// Processes blocked on I/O are skipped. Once a process runs, the host only
/// asks again when it gives up the CPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestJobScheduler;

impl ShortestJobScheduler {
    pub fn new() -> ShortestJobScheduler {
        ShortestJobScheduler
    }
}

impl Scheduler for ShortestJobScheduler {
    fn name(&self) -> &'static str {
        "sjf_io"
    }

    fn select_next(&self, ctx: &DecisionContext) -> Option<Pid> {
        if let Some(pid) = bootstrap(ctx) {
            return pid;
        }

        let pid = pick_shortest(ctx, |proc| ctx.oracle.total_time(proc.pid));
        debug!("sjf_io at tick {}: {:?}", ctx.current_tick, pid);

        pid
    }
}
