//! Error types for form mutation.
//!
//! Every failure a mutation can hit is reported as a value. Nothing here is
//! ever raised past the public API as a panic.
//!
//! # Usage
//!
//! ```ignore
//! use form_mutator::{Error, Result, type_value};
//!
//! match type_value(Some(&mut control), "hello") {
//!     Ok(outcome) => println!("{outcome}"),
//!     Err(Error::Dispatch { event, dispatched, .. }) => {
//!         eprintln!("{event} failed after {} events", dispatched.len());
//!     }
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Control unavailable | [`Error::ControlUnavailable`] |
//! | Control malformed | [`Error::Dispatch`], [`Error::Property`] |
//! | Host | [`Error::Host`], [`Error::InvalidSelector`] |
//! | Aggregate | [`Error::FieldFailed`], [`Error::Incomplete`] |
//! | Configuration | [`Error::Config`] |
//! | External | [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

use crate::event::EventKind;
use crate::mutator::FillReport;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Control Errors
    // ========================================================================
    /// No control reference was supplied.
    #[error("Control unavailable")]
    ControlUnavailable,

    /// The host rejected an event dispatch.
    ///
    /// Events already dispatched are not rolled back. They are listed in
    /// `dispatched`, in order.
    #[error("Dispatch of '{event}' failed after {} event(s)", .dispatched.len())]
    Dispatch {
        /// The event that failed.
        event: EventKind,
        /// Events that fired before the failure.
        dispatched: Vec<EventKind>,
        /// Error reported by the host.
        #[source]
        source: Box<Error>,
    },

    /// The host rejected a property read or write.
    ///
    /// As with [`Error::Dispatch`], earlier events stay dispatched.
    #[error("Property '{property}' rejected after {} event(s)", .dispatched.len())]
    Property {
        /// Property name (`value`, `checked`, `options`, ...).
        property: &'static str,
        /// Events that fired before the failure.
        dispatched: Vec<EventKind>,
        /// Error reported by the host.
        #[source]
        source: Box<Error>,
    },

    // ========================================================================
    // Host Errors
    // ========================================================================
    /// Generic host fault, typically raised from a [`Control`](crate::Control)
    /// implementation and rewrapped by the protocol that called it.
    #[error("Host error: {message}")]
    Host {
        /// Host-supplied description.
        message: String,
    },

    /// Selector could not be parsed by the document.
    #[error("Invalid selector: {selector}")]
    InvalidSelector {
        /// The offending selector.
        selector: String,
    },

    // ========================================================================
    // Aggregate Errors
    // ========================================================================
    /// A field inside a fill-out plan failed.
    #[error("Field '{selector}' failed: {source}")]
    FieldFailed {
        /// Selector of the failing field.
        selector: String,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// A fill-out that attempts every field had failures.
    ///
    /// `report` holds the fields that succeeded, `failed` the selectors that
    /// did not, both in plan order.
    #[error("Fill-out incomplete: {} field(s) failed", .failed.len())]
    Incomplete {
        /// Outcomes of the fields that succeeded.
        report: FillReport,
        /// Selectors of the fields that failed.
        failed: Vec<String>,
        /// The first failure, as [`Error::FieldFailed`].
        #[source]
        source: Box<Error>,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a dispatch error.
    #[inline]
    pub fn dispatch(event: EventKind, dispatched: Vec<EventKind>, source: Error) -> Self {
        Self::Dispatch {
            event,
            dispatched,
            source: Box::new(source),
        }
    }

    /// Creates a property error.
    #[inline]
    pub fn property(property: &'static str, dispatched: Vec<EventKind>, source: Error) -> Self {
        Self::Property {
            property,
            dispatched,
            source: Box::new(source),
        }
    }

    /// Creates a host error.
    #[inline]
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    /// Creates an invalid selector error.
    #[inline]
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
        }
    }

    /// Wraps an error with the selector of the field that produced it.
    #[inline]
    pub fn field_failed(selector: impl Into<String>, source: Error) -> Self {
        Self::FieldFailed {
            selector: selector.into(),
            source: Box::new(source),
        }
    }

    /// Creates an incomplete fill-out error from the first field failure.
    #[inline]
    pub fn incomplete(report: FillReport, failed: Vec<String>, first: Error) -> Self {
        Self::Incomplete {
            report,
            failed,
            source: Box::new(first),
        }
    }

    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the control was missing.
    #[inline]
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::ControlUnavailable => true,
            Self::FieldFailed { source, .. } | Self::Incomplete { source, .. } => {
                source.is_unavailable()
            }
            _ => false,
        }
    }

    /// Returns `true` if the control was present but did not behave like
    /// a form control.
    #[inline]
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::Dispatch { .. } | Self::Property { .. } | Self::Host { .. } => true,
            Self::FieldFailed { source, .. } | Self::Incomplete { source, .. } => {
                source.is_malformed()
            }
            _ => false,
        }
    }

    /// Returns `true` if some events reached the control before failure.
    ///
    /// Such a control may be left in a partially mutated state.
    #[inline]
    #[must_use]
    pub fn is_partial(&self) -> bool {
        match self {
            Self::Dispatch { dispatched, .. } | Self::Property { dispatched, .. } => {
                !dispatched.is_empty()
            }
            Self::FieldFailed { source, .. } | Self::Incomplete { source, .. } => {
                source.is_partial()
            }
            _ => false,
        }
    }

    /// Returns the report of a fill-out that continued past failures.
    #[must_use]
    pub fn report(&self) -> Option<&FillReport> {
        match self {
            Self::Incomplete { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Returns the events that fired before a dispatch failure.
    #[must_use]
    pub fn dispatched(&self) -> &[EventKind] {
        match self {
            Self::Dispatch { dispatched, .. } | Self::Property { dispatched, .. } => dispatched,
            Self::FieldFailed { source, .. } | Self::Incomplete { source, .. } => {
                source.dispatched()
            }
            _ => &[],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    use crate::mutator::Outcome;

    #[test]
    fn test_error_display() {
        let err = Error::dispatch(
            EventKind::Change,
            vec![EventKind::Focus],
            Error::host("detached"),
        );
        assert_eq!(err.to_string(), "Dispatch of 'change' failed after 1 event(s)");
    }

    #[test]
    fn test_dispatch_keeps_host_error_as_source() {
        let err = Error::dispatch(EventKind::Change, vec![], Error::host("listener threw"));

        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Host error: listener threw".into())
        );
        assert!(err.to_string().ends_with("after 0 event(s)"));
    }

    #[test]
    fn test_property_display() {
        let err = Error::property("checked", vec![EventKind::Focus], Error::host("read-only"));
        assert_eq!(err.to_string(), "Property 'checked' rejected after 1 event(s)");
        assert_eq!(err.source().map(|s| s.to_string()), Some("Host error: read-only".into()));
    }

    #[test]
    fn test_is_unavailable() {
        assert!(Error::ControlUnavailable.is_unavailable());
        assert!(!Error::host("x").is_unavailable());
    }

    #[test]
    fn test_is_malformed() {
        assert!(Error::dispatch(EventKind::Focus, vec![], Error::host("x")).is_malformed());
        assert!(Error::property("value", vec![], Error::host("nope")).is_malformed());
        assert!(!Error::ControlUnavailable.is_malformed());
        assert!(!Error::invalid_selector("[").is_malformed());
    }

    #[test]
    fn test_is_partial() {
        assert!(!Error::dispatch(EventKind::Focus, vec![], Error::host("x")).is_partial());
        assert!(
            Error::dispatch(EventKind::Blur, vec![EventKind::Focus], Error::host("x"))
                .is_partial()
        );
    }

    #[test]
    fn test_field_failed_delegates() {
        let err = Error::field_failed(
            "#email",
            Error::dispatch(
                EventKind::Input,
                vec![EventKind::Focus, EventKind::Reset],
                Error::host("listener threw"),
            ),
        );

        assert!(err.is_malformed());
        assert!(err.is_partial());
        assert_eq!(err.dispatched(), &[EventKind::Focus, EventKind::Reset]);
        assert!(err.to_string().starts_with("Field '#email' failed"));
        assert!(err.report().is_none());
    }

    #[test]
    fn test_incomplete_carries_report() {
        let mut report = FillReport::default();
        report.push("#good", Outcome::Applied);
        let err = Error::incomplete(
            report,
            vec!["#bad".into()],
            Error::field_failed("#bad", Error::ControlUnavailable),
        );

        assert_eq!(err.to_string(), "Fill-out incomplete: 1 field(s) failed");
        assert!(err.is_unavailable());
        assert_eq!(err.report().map(|r| r.applied()), Some(vec!["#good"]));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
