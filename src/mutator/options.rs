//! Mutator configuration.
//!
//! # Example
//!
//! ```
//! use form_mutator::MutatorOptions;
//!
//! let options = MutatorOptions::new().with_continue_on_failure();
//! assert!(!options.stop_on_failure);
//! ```

// ============================================================================
// MutatorOptions
// ============================================================================

/// Behaviour switches for [`FormMutator`](crate::FormMutator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutatorOptions {
    /// Stop a fill-out at the first failing field.
    ///
    /// When `false`, every field is attempted and the first failure is
    /// reported at the end. Either way the fill-out only succeeds if every
    /// field does.
    pub stop_on_failure: bool,
}

// ============================================================================
// Constructors
// ============================================================================

impl MutatorOptions {
    /// Creates options with default settings.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stop_on_failure: true,
        }
    }
}

impl Default for MutatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl MutatorOptions {
    /// Sets whether a fill-out stops at the first failing field.
    #[inline]
    #[must_use]
    pub fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Attempts every field of a fill-out even after a failure.
    #[inline]
    #[must_use]
    pub fn with_continue_on_failure(self) -> Self {
        self.with_stop_on_failure(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
