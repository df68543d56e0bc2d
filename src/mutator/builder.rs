//! Builder pattern for mutator configuration.
//!
//! # Example
//!
//! ```
//! use form_mutator::{FormMutator, MemoryDocument, MutatorOptions};
//!
//! # fn main() -> form_mutator::Result<()> {
//! let mutator = FormMutator::builder()
//!     .document(MemoryDocument::new())
//!     .options(MutatorOptions::new().with_continue_on_failure())
//!     .build()?;
//! assert!(!mutator.options().stop_on_failure);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use crate::dom::Document;
use crate::error::{Error, Result};

use super::core::FormMutator;
use super::options::MutatorOptions;

// ============================================================================
// FormMutatorBuilder
// ============================================================================

/// Builder for configuring a [`FormMutator`].
///
/// Use [`FormMutator::builder()`] to create a new builder.
pub struct FormMutatorBuilder<D> {
    /// Document to resolve selectors against.
    document: Option<D>,
    /// Behaviour switches.
    options: MutatorOptions,
}

impl<D> Default for FormMutatorBuilder<D> {
    fn default() -> Self {
        Self {
            document: None,
            options: MutatorOptions::default(),
        }
    }
}

impl<D> fmt::Debug for FormMutatorBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormMutatorBuilder")
            .field("has_document", &self.document.is_some())
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// FormMutatorBuilder Implementation
// ============================================================================

impl<D: Document> FormMutatorBuilder<D> {
    /// Creates a builder with no document and default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document selectors are resolved against.
    #[inline]
    #[must_use]
    pub fn document(mut self, document: D) -> Self {
        self.document = Some(document);
        self
    }

    /// Replaces the options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: MutatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets whether a fill-out stops at the first failing field.
    #[inline]
    #[must_use]
    pub fn stop_on_failure(mut self, stop: bool) -> Self {
        self.options.stop_on_failure = stop;
        self
    }

    /// Builds the mutator.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if no document was set.
    pub fn build(self) -> Result<FormMutator<D>> {
        let document = self.document.ok_or_else(|| {
            Error::config(
                "Document is required. Use .document() to set it, \
                 or FormMutator::detached() for a mutator without one.",
            )
        })?;

        Ok(FormMutator::from_parts(Some(document), self.options))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dom::MemoryDocument;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = FormMutatorBuilder::<MemoryDocument>::new();
        assert!(builder.document.is_none());
        assert_eq!(builder.options, MutatorOptions::default());
    }

    #[test]
    fn test_build_requires_document() {
        let result = FormMutatorBuilder::<MemoryDocument>::new().build();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_build_with_document() {
        let mutator = FormMutator::builder()
            .document(MemoryDocument::new())
            .stop_on_failure(false)
            .build()
            .unwrap();

        assert!(mutator.document().is_some());
        assert!(!mutator.options().stop_on_failure);
    }
}
