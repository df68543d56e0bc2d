//! Event names dispatched by the mutation protocols.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// EventInterface
// ============================================================================

/// Constructor family used to build an event on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventInterface {
    /// Generic `Event`.
    Event,
    /// Pointer `MouseEvent`.
    MouseEvent,
}

impl EventInterface {
    /// Returns the host constructor name.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::MouseEvent => "MouseEvent",
        }
    }
}

impl fmt::Display for EventInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// EventKind
// ============================================================================

/// Every event name a mutation protocol may dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    // ========================================================================
    // Pointer
    // ========================================================================
    /// `click`
    Click,

    // ========================================================================
    // Focus
    // ========================================================================
    /// `focus`
    Focus,
    /// `blur`
    Blur,

    // ========================================================================
    // Value Pipeline
    // ========================================================================
    /// `reset`
    Reset,
    /// `input`
    Input,
    /// `change`
    Change,

    // ========================================================================
    // Keyboard
    // ========================================================================
    /// `keydown`
    KeyDown,
    /// `keypress`
    KeyPress,
    /// `keyup`
    KeyUp,
}

impl EventKind {
    /// Returns the event properties: (name, interface).
    #[must_use]
    pub fn properties(self) -> (&'static str, EventInterface) {
        match self {
            EventKind::Click => ("click", EventInterface::MouseEvent),
            EventKind::Focus => ("focus", EventInterface::Event),
            EventKind::Blur => ("blur", EventInterface::Event),
            EventKind::Reset => ("reset", EventInterface::Event),
            EventKind::Input => ("input", EventInterface::Event),
            EventKind::Change => ("change", EventInterface::Event),
            EventKind::KeyDown => ("keydown", EventInterface::Event),
            EventKind::KeyPress => ("keypress", EventInterface::Event),
            EventKind::KeyUp => ("keyup", EventInterface::Event),
        }
    }

    /// Returns the DOM event name.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.properties().0
    }

    /// Returns the constructor family for this event.
    #[inline]
    #[must_use]
    pub fn interface(self) -> EventInterface {
        self.properties().1
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_is_mouse_event() {
        let (name, interface) = EventKind::Click.properties();
        assert_eq!(name, "click");
        assert_eq!(interface, EventInterface::MouseEvent);
    }

    #[test]
    fn test_keyboard_events_use_generic_interface() {
        for kind in [EventKind::KeyDown, EventKind::KeyPress, EventKind::KeyUp] {
            assert_eq!(kind.interface(), EventInterface::Event);
        }
    }

    #[test]
    fn test_serde_uses_dom_names() {
        let json = serde_json::to_string(&EventKind::KeyDown).unwrap();
        assert_eq!(json, "\"keydown\"");
    }
}
