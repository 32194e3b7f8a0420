/*!
 * Priority Scheduling
 * Non-preemptive; numerically smaller priority runs first
 */

use super::order::OrderKey;
use super::timeline::run_to_completion;
use super::traits::Scheduler;
use super::types::{Algorithm, ScheduleReport, ScheduleResult};
use crate::core::errors::{SchedResult, SchedulerError};
use crate::process::ReadyQueue;

#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl Scheduler for PriorityScheduling {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn simulate(&self, queue: &ReadyQueue) -> SchedResult<ScheduleReport> {
        if queue.is_empty() {
            return Err(SchedulerError::InvalidArgument(
                "priority scheduling needs at least one process".into(),
            ));
        }
        Ok(run_to_completion(
            queue,
            OrderKey::Priority,
            Algorithm::Priority,
        ))
    }
}

/// Simulate non-preemptive priority scheduling over `queue`
pub fn priority(queue: &ReadyQueue) -> SchedResult<ScheduleResult> {
    PriorityScheduling.run(queue)
}
