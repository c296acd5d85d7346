use std::collections::BTreeMap;

use scheduler::{Pid, ProcessSnapshot, TotalTimeOracle};

/// A process of the demo workload
#[derive(Clone, Copy, Debug)]
pub struct DemoProcess {
    pub pid: Pid,
    /// Total ticks of CPU it needs
    pub burst: usize,
    /// `(period, length)`: blocked on I/O for the last `length` ticks of
    /// every `period`
    pub io: Option<(usize, usize)>,
    pub executed: usize,
}

impl DemoProcess {
    pub fn new(pid: usize, burst: usize, io: Option<(usize, usize)>) -> DemoProcess {
        DemoProcess {
            pid: Pid::new(pid),
            burst,
            io,
            executed: 0,
        }
    }

    pub fn on_io(&self, tick: usize) -> bool {
        match self.io {
            Some((period, length)) if period > 0 => tick % period >= period.saturating_sub(length),
            _ => false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.executed >= self.burst
    }
}

/// Fixed set of processes replayed by the runner
#[derive(Clone, Debug)]
pub struct Workload {
    procs: BTreeMap<Pid, DemoProcess>,
}

impl Workload {
    pub fn new(procs: Vec<DemoProcess>) -> Workload {
        Workload {
            procs: procs.into_iter().map(|proc| (proc.pid, proc)).collect(),
        }
    }

    /// Three CPU bound jobs and one that keeps waiting on I/O
    pub fn demo() -> Workload {
        Workload::new(vec![
            DemoProcess::new(1, 12, None),
            DemoProcess::new(2, 4, None),
            DemoProcess::new(3, 8, Some((6, 2))),
            DemoProcess::new(4, 6, None),
        ])
    }

    /// Processes that still need the CPU, in pid order
    pub fn snapshot(&self, tick: usize) -> Vec<ProcessSnapshot> {
        self.procs
            .values()
            .filter(|proc| !proc.is_done())
            .map(|proc| ProcessSnapshot::new(proc.pid, proc.on_io(tick), proc.executed))
            .collect()
    }

    /// Gives `pid` one tick of CPU; returns whether it could use it
    pub fn execute(&mut self, pid: Pid, tick: usize) -> bool {
        match self.procs.get_mut(&pid) {
            Some(proc) if !proc.is_done() && !proc.on_io(tick) => {
                proc.executed += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_live(&self, pid: Pid) -> bool {
        self.procs.get(&pid).map_or(false, |proc| !proc.is_done())
    }

    pub fn is_done(&self) -> bool {
        self.procs.values().all(DemoProcess::is_done)
    }
}

impl TotalTimeOracle for Workload {
    fn total_time(&self, pid: Pid) -> usize {
        self.procs.get(&pid).map_or(0, |proc| proc.burst)
    }
}
