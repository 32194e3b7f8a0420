/*!
 * Scheduler Module
 * The five scheduling simulations and their shared machinery
 */

mod accumulator;
mod dispatch;
mod order;
mod timeline;

pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srt;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::{first_come_first_serve, Fcfs};
pub use order::OrderKey;
pub use priority::{priority, PriorityScheduling};
pub use round_robin::{round_robin, RoundRobin};
pub use sjf::{shortest_job_first, ShortestJobFirst};
pub use srt::{shortest_remaining_time_first, ShortestRemainingTime};
pub use traits::Scheduler;
pub use types::{Algorithm, Completion, Quantum, ScheduleReport, ScheduleResult};
