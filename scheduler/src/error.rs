use std::error::Error;
use std::fmt;

/// Configuration-time failures.
///
/// A decision that finds no eligible process is not an error, it is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// No policy is registered under this name
    UnknownPolicy(String),
    /// MEDIUM must start no later than LOW
    InvalidThresholds { medium: usize, low: usize },
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::UnknownPolicy(name) => {
                write!(f, "Invalid scheduler name: '{}'", name)
            }
            SchedulerError::InvalidThresholds { medium, low } => write!(
                f,
                "invalid priority thresholds: medium ({}) is above low ({})",
                medium, low
            ),
        }
    }
}

impl Error for SchedulerError {}
