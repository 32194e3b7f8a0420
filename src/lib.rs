/*!
 * CPU Scheduling Simulator Library
 * Batch simulation of FCFS, SJF, Priority, Round-Robin and SRT scheduling
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::{SchedResult, SchedulerError};
pub use monitoring::init_tracing;
pub use process::{load_descriptors, write_descriptors, ProcessDescriptor, ReadyQueue};
pub use scheduler::{
    first_come_first_serve, priority, round_robin, shortest_job_first,
    shortest_remaining_time_first, Algorithm, Quantum, ScheduleReport, ScheduleResult, Scheduler,
};
