/*!
 * Round-Robin Scheduling
 * Preemptive with a fixed time quantum
 */

use super::accumulator::StatsAccumulator;
use super::order::arrival_ordered;
use super::traits::Scheduler;
use super::types::{Algorithm, Quantum, ScheduleReport, ScheduleResult};
use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::types::{Ticks, Time};
use crate::process::{ProcessDescriptor, ReadyQueue};
use std::collections::VecDeque;
use tracing::trace;

/// Round-robin scheduler
///
/// A process runs for at most one quantum per dispatch. Processes that
/// arrive during a slice join the ready queue ahead of the process whose
/// slice just expired.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }
}

/// Move every pending process that has arrived by `now` into the ready queue
fn admit(
    pending: &mut VecDeque<ProcessDescriptor>,
    ready: &mut VecDeque<ProcessDescriptor>,
    now: Ticks,
) {
    while pending.front().is_some_and(|p| p.has_arrived(now)) {
        ready.extend(pending.pop_front());
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn simulate(&self, queue: &ReadyQueue) -> SchedResult<ScheduleReport> {
        if queue.is_empty() {
            return Err(SchedulerError::InvalidArgument(
                "round robin needs at least one process".into(),
            ));
        }

        let slice = self.quantum.as_ticks();
        let mut pending = arrival_ordered(queue);
        let mut ready = VecDeque::with_capacity(pending.len());
        let mut stats = StatsAccumulator::new(Algorithm::RoundRobin, pending.len());
        let mut now: Ticks = 0;

        loop {
            admit(&mut pending, &mut ready, now);

            let Some(mut current) = ready.pop_front() else {
                match pending.front() {
                    Some(next) => {
                        trace!(from = now, to = next.arrival, "CPU idle");
                        now = Ticks::from(next.arrival);
                        continue;
                    }
                    None => break,
                }
            };

            trace!(
                pid = current.pid,
                at = now,
                remaining = current.remaining_burst_time,
                "Dispatch"
            );
            now += current.run_for(slice);
            admit(&mut pending, &mut ready, now);

            if current.is_complete() {
                stats.record(&current, now);
            } else {
                if !ready.is_empty() {
                    stats.preempted();
                }
                ready.push_back(current);
            }
        }

        Ok(stats.finish(now))
    }
}

/// Simulate round-robin over `queue` with the given quantum
///
/// A zero quantum is rejected with [`SchedulerError::InvalidArgument`].
pub fn round_robin(queue: &ReadyQueue, quantum: Time) -> SchedResult<ScheduleResult> {
    RoundRobin::new(Quantum::new(quantum)?).run(queue)
}
