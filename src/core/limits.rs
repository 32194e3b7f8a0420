/*!
 * Descriptor File Limits and Constants
 *
 * Centralized location for the on-disk layout of descriptor files.
 */

// =============================================================================
// DESCRIPTOR FILE LAYOUT
// =============================================================================

/// Width of every integer in the file (u32, little-endian)
pub const FIELD_SIZE: usize = std::mem::size_of::<u32>();

/// Leading record count
pub const HEADER_SIZE: usize = FIELD_SIZE;

/// Fields per record: priority, arrival, burst
pub const FIELDS_PER_RECORD: usize = 3;

/// Size of one persisted descriptor
pub const RECORD_SIZE: usize = FIELD_SIZE * FIELDS_PER_RECORD;

/// Total file size implied by a declared record count
#[inline]
pub const fn expected_file_size(count: u32) -> u64 {
    HEADER_SIZE as u64 + count as u64 * RECORD_SIZE as u64
}
