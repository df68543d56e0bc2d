//! Fully described events, built fresh for every dispatch.

use serde::{Deserialize, Serialize};

use super::kind::{EventInterface, EventKind};

// ============================================================================
// EventInit
// ============================================================================

/// Event init dictionary passed to the host constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventInit {
    /// Whether the event bubbles.
    pub bubbles: bool,
    /// Whether the event is cancelable.
    pub cancelable: bool,
}

impl EventInit {
    /// `{ bubbles: true, cancelable: true }`, used for every mutation event.
    pub const BUBBLING: Self = Self {
        bubbles: true,
        cancelable: true,
    };
}

impl Default for EventInit {
    fn default() -> Self {
        Self::BUBBLING
    }
}

// ============================================================================
// SyntheticEvent
// ============================================================================

/// An event ready to hand to [`Control::dispatch_event`](crate::Control::dispatch_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntheticEvent {
    /// Event name.
    pub kind: EventKind,
    /// Constructor family.
    pub interface: EventInterface,
    /// Init dictionary.
    pub init: EventInit,
}

impl SyntheticEvent {
    /// Creates a bubbling, cancelable event of the given kind.
    #[inline]
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            interface: kind.interface(),
            init: EventInit::BUBBLING,
        }
    }

    /// Returns the DOM event name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl From<EventKind> for SyntheticEvent {
    fn from(kind: EventKind) -> Self {
        Self::new(kind)
    }
}

// ============================================================================
// Tests
// ============================================================================
