//! Deterministic in-memory host.
//!
//! Stands in for a browser document when scripting or testing form
//! mutations. Every dispatched event is appended to an [`EventLog`] that can
//! be shared between controls to observe global ordering.
//!
//! # Example
//!
//! ```
//! use form_mutator::{EventKind, FormMutator, MemoryControl, MemoryDocument};
//!
//! # fn main() -> form_mutator::Result<()> {
//! let mut document = MemoryDocument::new();
//! document.insert(MemoryControl::text().with_id("email"));
//!
//! let mut mutator = FormMutator::builder().document(&mut document).build()?;
//! assert!(mutator.set_value("#email", "user@example.com")?.is_applied());
//! drop(mutator);
//!
//! assert_eq!(document.control("#email")?.map(|c| c.value()), Some("user@example.com"));
//! assert_eq!(document.log().kinds().first(), Some(&EventKind::Focus));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod control;
mod document;
mod log;

// ============================================================================
// Re-exports
// ============================================================================

pub use control::{Listener, MemoryControl, MemoryControlState, MemoryOption};
pub use document::MemoryDocument;
pub use log::{DispatchRecord, EventLog};
