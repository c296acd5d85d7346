use log::debug;

use crate::{DecisionContext, Pid, Scheduler};

/// First come, first served: always the head of the snapshot
#[derive(Clone, Copy, Debug, Default)]
pub struct FifoScheduler;

impl FifoScheduler {
    pub fn new() -> FifoScheduler {
        FifoScheduler
    }
}

impl Scheduler for FifoScheduler {
    fn name(&self) -> &'static str {
        "fifo_io"
    }

    fn select_next(&self, ctx: &DecisionContext) -> Option<Pid> {
        let pid = ctx.first_pid();
        debug!("fifo_io at tick {}: {:?}", ctx.current_tick, pid);

        pid
    }
}
