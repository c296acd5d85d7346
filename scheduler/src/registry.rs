use std::fmt;
use std::process;
use std::str::FromStr;

use log::{error, log_enabled, Level};

use crate::schedulers::{
    FeedbackScheduler, FifoScheduler, RoundRobinScheduler, ShortestJobScheduler,
    ShortestToCompletionScheduler,
};
use crate::{DecisionContext, Pid, Scheduler, SchedulerConfig, SchedulerError};

/// The policies a simulator can be configured with
#[derive(Clone, Copy, Debug)]
pub enum Policy {
    Fifo(FifoScheduler),
    ShortestJob(ShortestJobScheduler),
    RoundRobin(RoundRobinScheduler),
    Feedback(FeedbackScheduler),
    ShortestToCompletion(ShortestToCompletionScheduler),
}

impl Policy {
    /// Every registered name, in registration order
    pub const NAMES: [&'static str; 5] = ["fifo_io", "sjf_io", "round_robin_io", "mlfq_io", "stcf"];

    /// Builds the policy registered as `name`, tuned with `config`
    pub fn from_name(name: &str, config: &SchedulerConfig) -> Result<Policy, SchedulerError> {
        match name {
            "fifo_io" => Ok(Policy::Fifo(FifoScheduler::new())),
            "sjf_io" => Ok(Policy::ShortestJob(ShortestJobScheduler::new())),
            "round_robin_io" => Ok(Policy::RoundRobin(RoundRobinScheduler::new(config.quantum))),
            "mlfq_io" => Ok(Policy::Feedback(FeedbackScheduler::new(config.thresholds))),
            "stcf" => Ok(Policy::ShortestToCompletion(ShortestToCompletionScheduler::new())),
            _ => Err(SchedulerError::UnknownPolicy(name.to_string())),
        }
    }

    /// Every policy, built with `config`
    pub fn all(config: &SchedulerConfig) -> Vec<Policy> {
        Policy::NAMES
            .iter()
            .filter_map(|name| Policy::from_name(name, config).ok())
            .collect()
    }

    fn inner(&self) -> &dyn Scheduler {
        match self {
            Policy::Fifo(policy) => policy,
            Policy::ShortestJob(policy) => policy,
            Policy::RoundRobin(policy) => policy,
            Policy::Feedback(policy) => policy,
            Policy::ShortestToCompletion(policy) => policy,
        }
    }
}

impl Scheduler for Policy {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn select_next(&self, ctx: &DecisionContext) -> Option<Pid> {
        self.inner().select_next(ctx)
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Policy::from_name(name, &SchedulerConfig::default())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name lookup for policies, all built from one configuration
#[derive(Clone, Copy, Debug, Default)]
pub struct PolicyRegistry {
    config: SchedulerConfig,
}

impl PolicyRegistry {
    pub fn new() -> PolicyRegistry {
        PolicyRegistry::default()
    }

    pub fn with_config(config: SchedulerConfig) -> PolicyRegistry {
        PolicyRegistry { config }
    }

    pub fn try_resolve(&self, name: &str) -> Result<Policy, SchedulerError> {
        Policy::from_name(name, &self.config)
    }

    /// Looks up `name`, terminating the process if no policy has that name.
    ///
    /// Meant for start-up configuration, before the simulation loop runs.
    pub fn resolve(&self, name: &str) -> Policy {
        match self.try_resolve(name) {
            Ok(policy) => policy,
            Err(err) => {
                if log_enabled!(Level::Error) {
                    error!("{}", err);
                } else {
                    eprintln!("{}", err);
                }
                process::exit(1);
            }
        }
    }
}

/// Looks up a policy with the default configuration
pub fn try_resolve_policy(name: &str) -> Result<Policy, SchedulerError> {
    PolicyRegistry::new().try_resolve(name)
}

/// Looks up a policy with the default configuration, exiting with status 1
/// on an unknown name
pub fn resolve_policy(name: &str) -> Policy {
    PolicyRegistry::new().resolve(name)
}
