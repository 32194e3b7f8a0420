/*!
 * Process Module
 * Process descriptors, the ready queue, and the descriptor file format
 */

pub mod descriptor;
pub mod loader;
pub mod queue;

// Re-export for convenience
pub use descriptor::ProcessDescriptor;
pub use loader::{decode_descriptors, encode_descriptors, load_descriptors, write_descriptors};
pub use queue::ReadyQueue;
