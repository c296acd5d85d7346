use std::num::NonZeroUsize;

use log::{debug, warn};

use crate::common_funcs::bootstrap;
use crate::{DecisionContext, Pid, Scheduler};

/// Round robin over the snapshot order.
///
/// The running process keeps the CPU until the tick is a multiple of the
/// quanta, then the CPU goes to the next process of the snapshot, wrapping
/// to the head after the last one. The next process is taken as is, even
/// when it is blocked on I/O.
#[derive(Clone, Copy, Debug)]
pub struct RoundRobinScheduler {
    quanta: NonZeroUsize,
}

impl RoundRobinScheduler {
    /// * `timeslice` - the number of ticks between two switches
    pub fn new(timeslice: NonZeroUsize) -> RoundRobinScheduler {
        RoundRobinScheduler { quanta: timeslice }
    }

    pub fn quanta(&self) -> NonZeroUsize {
        self.quanta
    }

    fn quanta_expired(&self, ctx: &DecisionContext) -> bool {
        ctx.current_tick.get() % self.quanta.get() == 0
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "round_robin_io"
    }

    fn select_next(&self, ctx: &DecisionContext) -> Option<Pid> {
        if let Some(pid) = bootstrap(ctx) {
            return pid;
        }

        let running = ctx.running?;
        let Some(index) = ctx.position_of(running) else {
            warn!("round_robin_io: running pid {} is missing from the snapshot", running);
            return None;
        };

        if !self.quanta_expired(ctx) {
            return Some(running);
        }

        let next = (index + 1) % ctx.snapshot.len();
        let pid = ctx.snapshot[next].pid;
        debug!("round_robin_io at tick {}: {} -> {}", ctx.current_tick, running, pid);

        Some(pid)
    }
}
