use std::num::NonZeroUsize;

use crate::SchedulerError;

/// Round-Robin time quanta, in ticks
pub const DEFAULT_QUANTUM: usize = 5;
/// Executed time at which a process leaves the HIGH feedback level
pub const MEDIUM_THRESHOLD: usize = 5;
/// Executed time at which a process drops to the LOW feedback level
pub const LOW_THRESHOLD: usize = 10;

/// Executed-time boundaries between the feedback levels.
///
/// `executed < medium` is HIGH, `medium <= executed < low` is MEDIUM,
/// everything else is LOW.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriorityThresholds {
    medium: usize,
    low: usize,
}

impl PriorityThresholds {
    pub fn new(medium: usize, low: usize) -> Result<PriorityThresholds, SchedulerError> {
        if medium > low {
            return Err(SchedulerError::InvalidThresholds { medium, low });
        }

        Ok(PriorityThresholds { medium, low })
    }

    pub fn medium(&self) -> usize {
        self.medium
    }

    pub fn low(&self) -> usize {
        self.low
    }
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        PriorityThresholds {
            medium: MEDIUM_THRESHOLD,
            low: LOW_THRESHOLD,
        }
    }
}

/// Tunables of the policies that have any
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// The time quanta after which Round-Robin moves to the next process
    pub quantum: NonZeroUsize,
    /// Level boundaries used by the multilevel feedback policy
    pub thresholds: PriorityThresholds,
}

impl SchedulerConfig {
    pub fn new(quantum: NonZeroUsize, thresholds: PriorityThresholds) -> SchedulerConfig {
        SchedulerConfig {
            quantum,
            thresholds,
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            quantum: NonZeroUsize::MIN.saturating_add(DEFAULT_QUANTUM - 1),
            thresholds: PriorityThresholds::default(),
        }
    }
}
