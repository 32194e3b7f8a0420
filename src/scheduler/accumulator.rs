/*!
 * Statistics Accumulator
 * Per-process waiting/turnaround accumulation shared by every algorithm
 */

use super::types::{Algorithm, Completion, ScheduleReport, ScheduleResult};
use crate::core::types::Ticks;
use crate::process::ProcessDescriptor;
use tracing::{debug, info};

pub(super) struct StatsAccumulator {
    algorithm: Algorithm,
    total_waiting: Ticks,
    total_turnaround: Ticks,
    completions: Vec<Completion>,
    preemptions: u64,
}

impl StatsAccumulator {
    pub fn new(algorithm: Algorithm, processes: usize) -> Self {
        Self {
            algorithm,
            total_waiting: 0,
            total_turnaround: 0,
            completions: Vec::with_capacity(processes),
            preemptions: 0,
        }
    }

    /// Record a process that finished at `completion_time`
    ///
    /// turnaround = completion - arrival, waiting = turnaround - burst.
    pub fn record(&mut self, process: &ProcessDescriptor, completion_time: Ticks) {
        debug_assert!(process.is_complete());
        let turnaround = completion_time - Ticks::from(process.arrival);
        let waiting = turnaround - Ticks::from(process.burst);

        self.total_waiting += waiting;
        self.total_turnaround += turnaround;
        self.completions.push(Completion {
            pid: process.pid,
            arrival: process.arrival,
            burst: process.burst,
            completion_time,
            waiting_time: waiting,
            turnaround_time: turnaround,
        });

        debug!(
            algorithm = %self.algorithm,
            pid = process.pid,
            completion_time,
            waiting,
            turnaround,
            "Process completed"
        );
    }

    pub fn preempted(&mut self) {
        self.preemptions += 1;
    }

    /// Divide the sums by the process count
    ///
    /// An empty run yields zero averages.
    pub fn finish(self, total_run_time: Ticks) -> ScheduleReport {
        let count = self.completions.len();
        let average = |total: Ticks| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let result = ScheduleResult {
            average_waiting_time: average(self.total_waiting),
            average_turnaround_time: average(self.total_turnaround),
            total_run_time,
        };

        info!(
            algorithm = %self.algorithm,
            processes = count,
            average_waiting_time = result.average_waiting_time,
            average_turnaround_time = result.average_turnaround_time,
            total_run_time,
            preemptions = self.preemptions,
            "Simulation finished"
        );

        ScheduleReport {
            algorithm: self.algorithm,
            result,
            completions: self.completions,
            preemptions: self.preemptions,
        }
    }
}
