//! Successful results of a mutation.
//!
//! Failure is carried by [`Error`](crate::Error). A skipped field still
//! counts as a success, so callers that want the boolean view should use
//! [`succeeded`].

use std::fmt;

use serde::Serialize;

use crate::error::Result;

// ============================================================================
// SkipReason
// ============================================================================

/// Why a selector-based mutation had nothing to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum SkipReason {
    /// The mutator has no document to resolve selectors against.
    NoDocument,
    /// The selector matched no control.
    NotFound,
    /// The control's `type` is not one the mutator edits.
    UnsupportedType(Option<String>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no document"),
            Self::NotFound => f.write_str("not found"),
            Self::UnsupportedType(Some(control_type)) => {
                write!(f, "unsupported type '{control_type}'")
            }
            Self::UnsupportedType(None) => f.write_str("untyped control"),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a mutation that did not fail.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Outcome {
    /// The full event sequence was dispatched.
    Applied,
    /// Nothing was dispatched.
    Skipped {
        /// Why.
        reason: SkipReason,
    },
}

impl Outcome {
    /// Creates a skipped outcome.
    #[inline]
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// Returns `true` if events were dispatched.
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns `true` if nothing was dispatched.
    #[inline]
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Returns the skip reason, if any.
    #[inline]
    #[must_use]
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Skipped { reason } => Some(reason),
            Self::Applied => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Skipped { reason } => write!(f, "skipped ({reason})"),
        }
    }
}

/// Collapses a mutation result to the boolean success indicator.
///
/// Skipped outcomes count as success.
#[inline]
#[must_use]
pub fn succeeded<T>(result: &Result<T>) -> bool {
    result.is_ok()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_predicates() {
        assert!(Outcome::Applied.is_applied());
        assert!(Outcome::skipped(SkipReason::NotFound).is_skipped());
        assert_eq!(
            Outcome::skipped(SkipReason::NoDocument).skip_reason(),
            Some(&SkipReason::NoDocument)
        );
        assert_eq!(Outcome::Applied.skip_reason(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Applied.to_string(), "applied");
        assert_eq!(
            Outcome::skipped(SkipReason::UnsupportedType(Some("file".into()))).to_string(),
            "skipped (unsupported type 'file')"
        );
        assert_eq!(
            Outcome::skipped(SkipReason::UnsupportedType(None)).to_string(),
            "skipped (untyped control)"
        );
    }

    #[test]
    fn test_succeeded_treats_skip_as_success() {
        let skipped: Result<Outcome> = Ok(Outcome::skipped(SkipReason::NotFound));
        let failed: Result<Outcome> = Err(Error::ControlUnavailable);

        assert!(succeeded(&skipped));
        assert!(!succeeded(&failed));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Outcome::skipped(SkipReason::NotFound)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "outcome": "skipped", "reason": { "kind": "notFound" } })
        );
    }
}
