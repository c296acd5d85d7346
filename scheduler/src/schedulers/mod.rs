//! The scheduling policies, one file each, plus the per-level queues used
//! by the multilevel feedback policy.

mod feedback_queue;
pub use feedback_queue::{FeedbackQueues, PriorityLevel};

mod fifo;
pub use fifo::FifoScheduler;

mod sjf;
pub use sjf::ShortestJobScheduler;

mod stcf;
pub use stcf::ShortestToCompletionScheduler;

mod round_robin;
pub use round_robin::RoundRobinScheduler;

mod mlfq;
pub use mlfq::FeedbackScheduler;
