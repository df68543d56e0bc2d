//! Host collaborator contract.
//!
//! The mutation protocols never touch a real DOM directly. They drive any
//! host that implements [`Control`] and, for selector-based operations,
//! [`Document`].
//!
//! | Module | Description |
//! |--------|-------------|
//! | `control` | [`Control`] and [`Document`] traits |
//! | [`memory`] | Deterministic in-memory host with an event log |

// ============================================================================
// Submodules
// ============================================================================

mod control;

/// Deterministic in-memory host.
pub mod memory;

// ============================================================================
// Re-exports
// ============================================================================

pub use control::{Control, Document};
pub use memory::{DispatchRecord, EventLog, MemoryControl, MemoryDocument, MemoryOption};
