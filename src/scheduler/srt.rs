/*!
 * Shortest-Remaining-Time
 * Preemptive shortest-job-first
 */

use super::accumulator::StatsAccumulator;
use super::order::arrival_ordered;
use super::traits::Scheduler;
use super::types::{Algorithm, ScheduleReport, ScheduleResult};
use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::types::{Ticks, Time};
use crate::process::{ProcessDescriptor, ReadyQueue};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;

/// Active-set entry keyed on remaining time
///
/// `slot` is the position in the arrival-ordered working set, so equal
/// remaining time and arrival fall back to input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveEntry {
    remaining: Time,
    arrival: Time,
    slot: usize,
}

impl ActiveEntry {
    fn of(process: &ProcessDescriptor, slot: usize) -> Self {
        Self {
            remaining: process.remaining_burst_time,
            arrival: process.arrival,
            slot,
        }
    }
}

impl Ord for ActiveEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the least remaining time pops first
        other
            .remaining
            .cmp(&self.remaining)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for ActiveEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-remaining-time scheduler
///
/// The selection can only change when a process arrives or completes, so the
/// running process is advanced straight to the next of those events instead
/// of one time unit at a time. Every unit a process spends in the active set
/// without running is waiting time, which is `completion - arrival - burst`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl Scheduler for ShortestRemainingTime {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srt
    }

    fn simulate(&self, queue: &ReadyQueue) -> SchedResult<ScheduleReport> {
        if queue.is_empty() {
            return Err(SchedulerError::InvalidArgument(
                "shortest remaining time needs at least one process".into(),
            ));
        }

        let mut processes: Vec<ProcessDescriptor> = arrival_ordered(queue).into();
        let mut active = BinaryHeap::with_capacity(processes.len());
        let mut stats = StatsAccumulator::new(Algorithm::Srt, processes.len());
        let mut next_arrival = 0;
        let mut running: Option<usize> = None;
        let mut now: Ticks = 0;

        loop {
            while processes
                .get(next_arrival)
                .is_some_and(|p| p.has_arrived(now))
            {
                active.push(ActiveEntry::of(&processes[next_arrival], next_arrival));
                next_arrival += 1;
            }

            let Some(entry) = active.pop() else {
                match processes.get(next_arrival) {
                    Some(next) => {
                        trace!(from = now, to = next.arrival, "CPU idle");
                        now = Ticks::from(next.arrival);
                        continue;
                    }
                    None => break,
                }
            };

            if let Some(previous) = running {
                if previous != entry.slot && entry.remaining > 0 {
                    stats.preempted();
                }
            }

            // Run until completion or until the next arrival may preempt
            let horizon = processes
                .get(next_arrival)
                .map_or(Ticks::MAX, |p| Ticks::from(p.arrival) - now);

            let current = &mut processes[entry.slot];
            trace!(pid = current.pid, at = now, remaining = entry.remaining, "Dispatch");
            now += current.run_for(horizon);

            if current.is_complete() {
                stats.record(current, now);
                // a zero-length job leaves the interrupted process as it was
                if entry.remaining > 0 {
                    running = None;
                }
            } else {
                active.push(ActiveEntry::of(current, entry.slot));
                running = Some(entry.slot);
            }
        }

        Ok(stats.finish(now))
    }
}

/// Simulate shortest-remaining-time over `queue`
pub fn shortest_remaining_time_first(queue: &ReadyQueue) -> SchedResult<ScheduleResult> {
    ShortestRemainingTime.run(queue)
}
