/*!
 * Shortest-Job-First
 * Non-preemptive; the whole set is ordered by burst once
 */

use super::order::OrderKey;
use super::timeline::run_to_completion;
use super::traits::Scheduler;
use super::types::{Algorithm, ScheduleReport, ScheduleResult};
use crate::core::errors::{SchedResult, SchedulerError};
use crate::process::ReadyQueue;

/// Shortest-job-first scheduler
///
/// Unlike [`Fcfs`](super::fcfs::Fcfs), an empty queue is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl Scheduler for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn simulate(&self, queue: &ReadyQueue) -> SchedResult<ScheduleReport> {
        if queue.is_empty() {
            return Err(SchedulerError::InvalidArgument(
                "shortest job first needs at least one process".into(),
            ));
        }
        Ok(run_to_completion(
            queue,
            OrderKey::RemainingTime,
            Algorithm::Sjf,
        ))
    }
}

/// Simulate non-preemptive shortest-job-first over `queue`
pub fn shortest_job_first(queue: &ReadyQueue) -> SchedResult<ScheduleResult> {
    ShortestJobFirst.run(queue)
}
