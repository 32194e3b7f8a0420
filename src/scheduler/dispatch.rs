/*!
 * Algorithm Dispatch
 * Map an algorithm code to the scheduler that implements it
 */

use super::fcfs::Fcfs;
use super::priority::PriorityScheduling;
use super::round_robin::RoundRobin;
use super::sjf::ShortestJobFirst;
use super::srt::ShortestRemainingTime;
use super::traits::Scheduler;
use super::types::{Algorithm, Quantum, ScheduleReport, ScheduleResult};
use crate::core::errors::{SchedResult, SchedulerError};
use crate::process::ReadyQueue;
use tracing::warn;

impl Algorithm {
    /// Build the scheduler for this algorithm
    ///
    /// Round-robin requires a quantum; the others ignore one if given.
    pub fn scheduler(&self, quantum: Option<Quantum>) -> SchedResult<Box<dyn Scheduler>> {
        if quantum.is_some() && !self.needs_quantum() {
            warn!(algorithm = %self, "Quantum ignored for non round-robin algorithm");
        }

        Ok(match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(ShortestJobFirst),
            Self::Priority => Box::new(PriorityScheduling),
            Self::RoundRobin => {
                let quantum = quantum.ok_or_else(|| {
                    SchedulerError::InvalidArgument("round robin requires a quantum".into())
                })?;
                Box::new(RoundRobin::new(quantum))
            }
            Self::Srt => Box::new(ShortestRemainingTime),
        })
    }

    /// Simulate `queue` under this algorithm
    pub fn simulate(
        &self,
        queue: &ReadyQueue,
        quantum: Option<Quantum>,
    ) -> SchedResult<ScheduleReport> {
        self.scheduler(quantum)?.simulate(queue)
    }

    /// Simulate `queue` under this algorithm, keeping only the aggregates
    pub fn run(&self, queue: &ReadyQueue, quantum: Option<Quantum>) -> SchedResult<ScheduleResult> {
        self.scheduler(quantum)?.run(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDescriptor;

    fn queue() -> ReadyQueue {
        vec![
            ProcessDescriptor::new(0, 1, 0, 3),
            ProcessDescriptor::new(1, 0, 0, 1),
        ]
        .into()
    }

    #[test]
    fn test_dispatch_matches_algorithm() {
        let quantum = Quantum::new(2).ok();
        for algorithm in Algorithm::ALL {
            let scheduler = algorithm.scheduler(quantum).unwrap();
            assert_eq!(scheduler.algorithm(), algorithm);
            let report = algorithm.simulate(&queue(), quantum).unwrap();
            assert_eq!(report.algorithm, algorithm);
            assert_eq!(report.result.total_run_time, 4);
        }
    }

    #[test]
    fn test_round_robin_requires_quantum() {
        let err = Algorithm::RoundRobin.run(&queue(), None).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidArgument(_)));
    }

    #[test]
    fn test_quantum_ignored_elsewhere() {
        let with = Algorithm::Sjf.run(&queue(), Quantum::new(1).ok()).unwrap();
        let without = Algorithm::Sjf.run(&queue(), None).unwrap();
        assert_eq!(with, without);
    }
}
