//! Form Mutator - programmatic form filling with synthetic DOM events.
//!
//! This library sets form control values and dispatches the event sequence
//! a real user interaction would produce, so page scripts react as if a
//! person had filled the form.
//!
//! # Architecture
//!
//! The DOM is an injected collaborator:
//!
//! - **Host**: implements [`Control`] (and [`Document`] for selector lookup)
//! - **Protocols**: [`click`], [`select_by_text`], [`deselect_by_text`],
//!   [`toggle_checkbox`], [`type_value`] drive one borrowed control
//! - **Mutator**: [`FormMutator`] resolves selectors, picks a protocol from
//!   the control `type` and runs [`FillOut`] plans
//!
//! Key design principles:
//!
//! - Synchronous: each event is fully handled before the next is dispatched
//! - Never panics on host faults; every call returns [`Result<Outcome>`]
//! - Missing or unsupported fields are [`Outcome::Skipped`], not errors
//! - No rollback: a failed sequence reports which events already fired
//!
//! # Quick Start
//!
//! ```
//! use form_mutator::{FillOut, FormMutator, MemoryControl, MemoryDocument, Result};
//!
//! fn main() -> Result<()> {
//!     let mut document = MemoryDocument::new();
//!     document
//!         .insert(MemoryControl::text().with_id("email"))
//!         .insert(MemoryControl::select_one(["Free", "Pro"]).with_id("plan"))
//!         .insert(MemoryControl::checkbox().with_id("terms"))
//!         .insert(MemoryControl::submit().with_id("send"));
//!
//!     let mut mutator = FormMutator::new(document);
//!     mutator.fill_out(
//!         &FillOut::new()
//!             .with("#email", "ada@example.com")
//!             .with("#plan", "Pro")
//!             .with("#terms", true)
//!             .with("#send", true),
//!     )?;
//!
//!     let document = mutator.document().expect("document was injected");
//!     assert_eq!(document.control("#email")?.map(|c| c.value()), Some("ada@example.com"));
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`dom`] | Host traits and the in-memory host |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`event`] | Synthetic event descriptors |
//! | [`mutator`] | Protocols, [`FormMutator`], fill-out plans |

// ============================================================================
// Modules
// ============================================================================

/// Host collaborator traits and the in-memory host.
///
/// - [`Control`] - a form-control-like element
/// - [`Document`] - resolves selectors to controls
/// - [`MemoryDocument`] / [`MemoryControl`] - deterministic host with an event log
pub mod dom;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Synthetic event descriptors handed to the host.
pub mod event;

/// Mutation protocols and the selector-driven mutator.
pub mod mutator;

// ============================================================================
// Re-exports
// ============================================================================

// Host types
pub use dom::{
    Control, DispatchRecord, Document, EventLog, MemoryControl, MemoryDocument, MemoryOption,
};

// Error types
pub use error::{Error, Result};

// Event types
pub use event::{EventInit, EventInterface, EventKind, SyntheticEvent};

// Mutator types
pub use mutator::{
    CLICK_SEQUENCE, FieldReport, FieldType, FieldValue, FillOut, FillReport, FormMutator,
    FormMutatorBuilder, MutatorOptions, NoDocument, Outcome, Selection, SkipReason,
    TOGGLE_SEQUENCE, TYPE_SEQUENCE, click, deselect_by_text, select_by_text, succeeded,
    toggle_checkbox, type_value,
};
