/*!
 * Scheduler Types
 * Algorithm selection, quantum validation, and simulation output
 */

use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::types::{Pid, Ticks, Time};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Smallest priority value first, non-preemptive
    Priority,
    /// Round-robin with a fixed quantum
    RoundRobin,
    /// Shortest remaining time, preemptive
    Srt,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Priority,
        Self::RoundRobin,
        Self::Srt,
    ];

    /// Canonical algorithm code as accepted on the command line
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "P",
            Self::RoundRobin => "RR",
            Self::Srt => "SRT",
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::Sjf => "Shortest Job First",
            Self::Priority => "Priority",
            Self::RoundRobin => "Round Robin",
            Self::Srt => "Shortest Remaining Time",
        }
    }

    /// Only round-robin takes a quantum
    #[inline]
    pub const fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "p" | "priority" | "prio" => Ok(Self::Priority),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "srt" | "srtf" => Ok(Self::Srt),
            _ => Err(SchedulerError::InvalidArgument(format!(
                "unknown algorithm '{}'. Valid: FCFS, SJF, P, RR, SRT",
                s
            ))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always at least one time unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quantum(Time);

impl Quantum {
    /// Create a quantum, rejecting zero
    pub fn new(units: Time) -> SchedResult<Self> {
        if units == 0 {
            return Err(SchedulerError::InvalidArgument(
                "round-robin quantum must be at least 1".into(),
            ));
        }
        Ok(Self(units))
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }

    #[inline(always)]
    pub const fn as_ticks(&self) -> Ticks {
        self.0 as Ticks
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = Time::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

/// Aggregate statistics of one simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    /// Time at which the last process completed, idle gaps included
    pub total_run_time: Ticks,
}

/// Outcome of a single process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

/// Full simulation output: aggregates plus per-process completions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub algorithm: Algorithm,
    pub result: ScheduleResult,
    /// In completion order
    pub completions: Vec<Completion>,
    /// Times a running process lost the CPU to a waiting one
    pub preemptions: u64,
}

impl ScheduleReport {
    /// Pids in the order they finished
    pub fn completion_order(&self) -> Vec<Pid> {
        self.completions.iter().map(|c| c.pid).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("P".parse::<Algorithm>().unwrap(), Algorithm::Priority);
        assert_eq!("RR".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("SRT".parse::<Algorithm>().unwrap(), Algorithm::Srt);
        assert!("lottery".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_codes_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_quantum_validation() {
        assert!(Quantum::new(0).is_err());
        assert_eq!(Quantum::new(4).unwrap().as_ticks(), 4);
        assert!(serde_json::from_str::<Quantum>("0").is_err());
        assert_eq!(serde_json::from_str::<Quantum>("3").unwrap().get(), 3);
    }

    #[test]
    fn test_result_serializes_field_names() {
        let result = ScheduleResult {
            average_waiting_time: 4.6,
            average_turnaround_time: 7.0,
            total_run_time: 12,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["total_run_time"], 12);
        assert_eq!(json["average_waiting_time"], 4.6);
    }
}
