/*!
 * Scheduler Traits
 * Interface shared by every scheduling discipline
 */

use super::types::{Algorithm, ScheduleReport, ScheduleResult};
use crate::core::errors::SchedResult;
use crate::process::ReadyQueue;

/// A scheduling discipline that can simulate a ready queue to completion
///
/// Implementations borrow the queue and work on a private copy, so the same
/// queue may be handed to several schedulers in turn.
pub trait Scheduler {
    /// Which discipline this is
    fn algorithm(&self) -> Algorithm;

    /// Run the simulation and keep per-process completions
    fn simulate(&self, queue: &ReadyQueue) -> SchedResult<ScheduleReport>;

    /// Run the simulation and keep only the aggregates
    fn run(&self, queue: &ReadyQueue) -> SchedResult<ScheduleResult> {
        self.simulate(queue).map(|report| report.result)
    }
}
