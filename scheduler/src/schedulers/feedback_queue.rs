use std::collections::VecDeque;

use crate::{Pid, PriorityThresholds};

/// Feedback level of a ready process; `High` is served first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// Levels in the order they are served
    pub const ALL: [PriorityLevel; 3] = [PriorityLevel::High, PriorityLevel::Medium, PriorityLevel::Low];

    /// The level a process belongs to, given only how long it has run
    pub fn for_executed_time(executed_time: usize, thresholds: &PriorityThresholds) -> PriorityLevel {
        if executed_time < thresholds.medium() {
            PriorityLevel::High
        } else if executed_time < thresholds.low() {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    fn index(self) -> usize {
        match self {
            PriorityLevel::High => 0,
            PriorityLevel::Medium => 1,
            PriorityLevel::Low => 2,
        }
    }
}

/// One FIFO ready queue per feedback level.
///
/// Built for a single decision and dropped right after it, so a pid is
/// only ever in one queue.
#[derive(Debug, Default)]
pub struct FeedbackQueues {
    queues: [VecDeque<Pid>; 3],
}

impl FeedbackQueues {
    pub fn new() -> FeedbackQueues {
        FeedbackQueues::default()
    }

    /// Adds `pid` at the back of the queue of `level`
    pub fn enqueue(&mut self, level: PriorityLevel, pid: Pid) {
        self.queues[level.index()].push_back(pid);
    }

    pub fn front(&self, level: PriorityLevel) -> Option<Pid> {
        self.queues[level.index()].front().copied()
    }

    pub fn pop_front(&mut self, level: PriorityLevel) -> Option<Pid> {
        self.queues[level.index()].pop_front()
    }

    pub fn len(&self, level: PriorityLevel) -> usize {
        self.queues[level.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Front of the highest non-empty level, without removing it
    pub fn next(&self) -> Option<Pid> {
        PriorityLevel::ALL.iter().find_map(|&level| self.front(level))
    }
}
