//! Daily time-of-day scheduling of posting runs.

pub mod job;
pub mod scheduler;
pub mod types;

pub use job::{ScheduledJob, ScheduledPosting};
pub use scheduler::{Scheduler, SchedulerSummary};
pub use types::{Clock, LocalClock, ScheduleEntry};
