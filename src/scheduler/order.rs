/*!
 * Scheduling Order
 * Comparison strategies for ordering the working set
 */

use crate::process::{ProcessDescriptor, ReadyQueue};
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Key a scheduling decision is made on
///
/// Every key falls back to arrival time. Anything still equal is left to the
/// caller's stable ordering, which is the original input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    /// Earliest arrival first
    Arrival,
    /// Least remaining CPU time first
    RemainingTime,
    /// Numerically smallest priority first
    Priority,
}

impl OrderKey {
    /// Three-way comparison under this key
    #[inline]
    pub fn compare(self, a: &ProcessDescriptor, b: &ProcessDescriptor) -> Ordering {
        let primary = match self {
            Self::Arrival => Ordering::Equal,
            Self::RemainingTime => a.remaining_burst_time.cmp(&b.remaining_burst_time),
            Self::Priority => a.priority.cmp(&b.priority),
        };
        primary.then_with(|| a.arrival.cmp(&b.arrival))
    }
}

/// Private working copy of `queue`, stably ordered by arrival
///
/// Run state is reset so every simulation starts from full bursts.
pub(super) fn arrival_ordered(queue: &ReadyQueue) -> VecDeque<ProcessDescriptor> {
    let mut working: ReadyQueue = queue
        .iter()
        .map(|p| ProcessDescriptor::new(p.pid, p.priority, p.arrival, p.burst))
        .collect();
    working.sort_by_key(OrderKey::Arrival);
    working.into_iter().collect()
}
