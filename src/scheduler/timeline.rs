/*!
 * Non-Preemptive Timeline
 * Dispatch loop shared by FCFS, SJF and Priority
 */

use super::accumulator::StatsAccumulator;
use super::order::{arrival_ordered, OrderKey};
use super::types::{Algorithm, ScheduleReport};
use crate::core::types::Ticks;
use crate::process::ReadyQueue;
use tracing::trace;

/// Run every process to completion, one at a time
///
/// The working copy is sorted once under `key` and dispatched in that order.
/// When the next process in line has not arrived yet the CPU idles forward
/// to its arrival, even if a later one in the order is already waiting.
pub(super) fn run_to_completion(
    queue: &ReadyQueue,
    key: OrderKey,
    algorithm: Algorithm,
) -> ScheduleReport {
    let mut order = arrival_ordered(queue);
    order.make_contiguous().sort_by(|a, b| key.compare(a, b));

    let mut stats = StatsAccumulator::new(algorithm, order.len());
    let mut now: Ticks = 0;

    for mut current in order {
        if !current.has_arrived(now) {
            trace!(from = now, to = current.arrival, "CPU idle");
            now = Ticks::from(current.arrival);
        }
        trace!(pid = current.pid, at = now, "Dispatch");
        now += current.run_for(Ticks::from(current.remaining_burst_time));
        stats.record(&current, now);
    }

    stats.finish(now)
}
