/*!
 * Process Descriptor
 * One schedulable unit of work and its per-run bookkeeping
 */

use crate::core::types::{Pid, Priority, Ticks, Time};
use serde::{Deserialize, Serialize};

/// A process to be scheduled
///
/// `arrival` and `burst` never change after construction. Only
/// `remaining_burst_time` and `started` move during a simulation, and they
/// only ever move on a private copy owned by the running algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub priority: Priority,
    pub arrival: Time,
    pub burst: Time,
    pub remaining_burst_time: Time,
    pub started: bool,
}

impl ProcessDescriptor {
    pub fn new(pid: Pid, priority: Priority, arrival: Time, burst: Time) -> Self {
        Self {
            pid,
            priority,
            arrival,
            burst,
            remaining_burst_time: burst,
            started: false,
        }
    }

    /// True once the process needs no more CPU time
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_burst_time == 0
    }

    /// True if the process is eligible to run at `now`
    #[inline]
    pub fn has_arrived(&self, now: Ticks) -> bool {
        Ticks::from(self.arrival) <= now
    }

    /// Run for up to `slice` units, returning the time actually consumed
    ///
    /// Clamps at zero remaining time.
    pub fn run_for(&mut self, slice: Ticks) -> Ticks {
        self.started = true;
        let used = slice.min(Ticks::from(self.remaining_burst_time));
        // used <= remaining_burst_time, so the narrowing is lossless
        self.remaining_burst_time -= used as Time;
        used
    }
}

/// Persisted shape of a descriptor: priority, arrival, burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DescriptorRecord {
    pub priority: Priority,
    pub arrival: Time,
    pub burst: Time,
}

impl DescriptorRecord {
    pub fn into_descriptor(self, pid: Pid) -> ProcessDescriptor {
        ProcessDescriptor::new(pid, self.priority, self.arrival, self.burst)
    }
}

impl From<&ProcessDescriptor> for DescriptorRecord {
    fn from(descriptor: &ProcessDescriptor) -> Self {
        Self {
            priority: descriptor.priority,
            arrival: descriptor.arrival,
            burst: descriptor.burst,
        }
    }
}
