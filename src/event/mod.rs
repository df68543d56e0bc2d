//! Synthetic event descriptors.
//!
//! Events are plain values. A host turns each [`SyntheticEvent`] into its own
//! native event inside [`Control::dispatch_event`](crate::Control::dispatch_event),
//! so no event constructor is ever looked up from global state.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`EventKind`] | Event name (`focus`, `change`, `click`, ...) |
//! | [`EventInterface`] | Constructor family (`Event` or `MouseEvent`) |
//! | [`EventInit`] | Init dictionary (`bubbles`, `cancelable`) |
//! | [`SyntheticEvent`] | A fully described event ready for dispatch |

// ============================================================================
// Submodules
// ============================================================================

mod kind;
mod synthetic;

// ============================================================================
// Re-exports
// ============================================================================

pub use kind::{EventInterface, EventKind};
pub use synthetic::{EventInit, SyntheticEvent};
