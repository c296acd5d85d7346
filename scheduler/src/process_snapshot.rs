use crate::{Pid, Timestamp, TotalTimeOracle};

/// What the host reports about one process at the current tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessSnapshot {
    /// The PID of the process
    pub pid: Pid,
    /// The process is blocked on I/O and cannot take the CPU
    pub on_io: bool,
    /// Ticks of CPU the process has consumed so far
    pub executed_time: usize,
}

impl ProcessSnapshot {
    /// Creates a new snapshot entry
    ///
    /// * `pid` - PID of the process
    /// * `on_io` - whether the process is waiting for I/O
    /// * `executed_time` - CPU time already consumed
    pub fn new(pid: Pid, on_io: bool, executed_time: usize) -> ProcessSnapshot {
        ProcessSnapshot {
            pid,
            on_io,
            executed_time,
        }
    }

    /// Shorthand for a process that is ready to run
    pub fn ready(pid: usize, executed_time: usize) -> ProcessSnapshot {
        ProcessSnapshot::new(Pid::new(pid), false, executed_time)
    }

    /// Shorthand for a process that is blocked on I/O
    pub fn blocked(pid: usize, executed_time: usize) -> ProcessSnapshot {
        ProcessSnapshot::new(Pid::new(pid), true, executed_time)
    }

    pub fn is_eligible(&self) -> bool {
        !self.on_io
    }
}

/// Everything a policy may look at while taking one decision.
///
/// The snapshot order is the host's order; policies only use it as a
/// tie-break and as the rotation order.
pub struct DecisionContext<'a> {
    pub snapshot: &'a [ProcessSnapshot],
    pub current_tick: Timestamp,
    pub running: Option<Pid>,
    pub oracle: &'a dyn TotalTimeOracle,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        snapshot: &'a [ProcessSnapshot],
        current_tick: Timestamp,
        running: Option<Pid>,
        oracle: &'a dyn TotalTimeOracle,
    ) -> DecisionContext<'a> {
        DecisionContext {
            snapshot,
            current_tick,
            running,
            oracle,
        }
    }

    /// Builds a context from the raw values the host passes around
    ///
    /// * `current_tick` - the simulated time
    /// * `running_pid` - the running pid, or -1 if none
    pub fn from_raw(
        snapshot: &'a [ProcessSnapshot],
        current_tick: usize,
        running_pid: i64,
        oracle: &'a dyn TotalTimeOracle,
    ) -> DecisionContext<'a> {
        DecisionContext::new(
            snapshot,
            Timestamp::new(current_tick),
            Pid::from_raw(running_pid),
            oracle,
        )
    }

    /// Processes that are not blocked on I/O, in snapshot order
    pub fn eligible(&self) -> impl Iterator<Item = &'a ProcessSnapshot> {
        self.snapshot.iter().filter(|proc| proc.is_eligible())
    }

    /// Position of `pid` in the snapshot
    pub fn position_of(&self, pid: Pid) -> Option<usize> {
        self.snapshot.iter().position(|proc| proc.pid == pid)
    }

    pub fn first_pid(&self) -> Option<Pid> {
        self.snapshot.first().map(|proc| proc.pid)
    }
}
