/*!
 * First-Come-First-Served
 * Non-preemptive, in arrival order
 */

use super::order::OrderKey;
use super::timeline::run_to_completion;
use super::traits::Scheduler;
use super::types::{Algorithm, ScheduleReport, ScheduleResult};
use crate::core::errors::SchedResult;
use crate::process::ReadyQueue;

/// First-come-first-served scheduler
///
/// Processes run in arrival order, ties in input order. An empty queue is a
/// valid input and produces an all-zero result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn simulate(&self, queue: &ReadyQueue) -> SchedResult<ScheduleReport> {
        Ok(run_to_completion(queue, OrderKey::Arrival, Algorithm::Fcfs))
    }
}

/// Simulate first-come-first-served over `queue`
pub fn first_come_first_serve(queue: &ReadyQueue) -> SchedResult<ScheduleResult> {
    Fcfs.run(queue)
}
