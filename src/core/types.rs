/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier: zero-based position of the descriptor in its input
pub type Pid = u32;

/// Scheduling priority (numerically smaller runs first)
pub type Priority = u32;

/// Simulated time unit as stored on disk
pub type Time = u32;

/// Simulated time accumulated during a run
///
/// Wider than [`Time`] so sums of bursts and idle gaps cannot overflow.
pub type Ticks = u64;
