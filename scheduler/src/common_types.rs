use std::fmt;
use std::ops::Add;

/// Raw value the host uses for "no process": no running pid on input,
/// idle CPU on output.
pub const IDLE: i64 = -1;

/// Identifier of a process, as assigned by the host simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pid(usize);

impl Pid {
    /// Creates a new Pid object
    ///
    /// * `pid` - the process identifier as usize
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Converts a raw host pid into a Pid
    ///
    /// Every negative value is the "none" sentinel and maps to `None`.
    pub fn from_raw(raw: i64) -> Option<Pid> {
        usize::try_from(raw).ok().map(Pid)
    }

    /// Converts a decision back into the raw host form, `IDLE` for `None`
    pub fn into_raw(pid: Option<Pid>) -> i64 {
        match pid {
            Some(pid) => i64::try_from(pid.0).unwrap_or(i64::MAX),
            None => IDLE,
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simulated clock tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Timestamp(usize);

impl Timestamp {
    /// * `time` - the tick number, counted from the start of the simulation
    pub fn new(time: usize) -> Timestamp {
        Timestamp(time)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Add<usize> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: usize) -> Self::Output {
        Timestamp::new(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
