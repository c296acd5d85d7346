use std::collections::HashMap;

use crate::Pid;

/// Host query giving the total CPU burst a process needs to finish.
///
/// The answer must not change between calls during one simulated run.
pub trait TotalTimeOracle {
    fn total_time(&self, pid: Pid) -> usize;
}

impl<F> TotalTimeOracle for F
where
    F: Fn(Pid) -> usize,
{
    fn total_time(&self, pid: Pid) -> usize {
        self(pid)
    }
}

/// A burst table; unknown pids report a burst of 0.
impl TotalTimeOracle for HashMap<Pid, usize> {
    fn total_time(&self, pid: Pid) -> usize {
        self.get(&pid).copied().unwrap_or(0)
    }
}
