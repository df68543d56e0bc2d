//! Shared, ordered record of dispatched events.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::event::{EventKind, SyntheticEvent};

// ============================================================================
// DispatchRecord
// ============================================================================

/// One dispatched event and the control that received it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchRecord {
    /// Label of the receiving control (id, name or `"<anonymous>"`).
    pub target: String,
    /// The event as dispatched.
    pub event: SyntheticEvent,
}

// ============================================================================
// EventLog
// ============================================================================

/// Append-only event log.
///
/// Cloning shares the underlying buffer.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Arc<Mutex<Vec<DispatchRecord>>>,
}

impl EventLog {
    /// Creates an empty log.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&self, target: impl Into<String>, event: SyntheticEvent) {
        self.records.lock().push(DispatchRecord {
            target: target.into(),
            event,
        });
    }

    /// Returns a snapshot of every record.
    #[must_use]
    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records.lock().clone()
    }

    /// Returns the dispatched event kinds, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.records.lock().iter().map(|r| r.event.kind).collect()
    }

    /// Returns the event kinds received by `target`, in order.
    #[must_use]
    pub fn kinds_for(&self, target: &str) -> Vec<EventKind> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.target == target)
            .map(|r| r.event.kind)
            .collect()
    }

    /// Returns the number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns `true` if nothing was dispatched.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drops every record.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Returns `true` if both handles share the same buffer.
    #[inline]
    #[must_use]
    pub fn same_as(&self, other: &EventLog) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_buffer() {
        let log = EventLog::new();
        let other = log.clone();

        other.push("a", SyntheticEvent::new(EventKind::Focus));

        assert_eq!(log.len(), 1);
        assert!(log.same_as(&other));
        assert!(!log.same_as(&EventLog::new()));
    }

    #[test]
    fn test_kinds_for_filters_target() {
        let log = EventLog::new();
        log.push("a", SyntheticEvent::new(EventKind::Focus));
        log.push("b", SyntheticEvent::new(EventKind::Click));
        log.push("a", SyntheticEvent::new(EventKind::Blur));

        assert_eq!(log.kinds_for("a"), vec![EventKind::Focus, EventKind::Blur]);
        assert_eq!(log.kinds_for("b"), vec![EventKind::Click]);
        assert_eq!(log.kinds().len(), 3);
    }

    #[test]
    fn test_clear() {
        let log = EventLog::new();
        log.push("a", SyntheticEvent::new(EventKind::Input));
        log.clear();
        assert!(log.is_empty());
    }
}
