//! Selector-driven mutation over an injected document.

use std::fmt;

use tracing::{debug, info, warn};

use crate::dom::{Control, Document};
use crate::error::{Error, Result};

use super::builder::FormMutatorBuilder;
use super::field::FieldType;
use super::fill::{FillOut, FillReport};
use super::options::MutatorOptions;
use super::outcome::{Outcome, SkipReason};
use super::protocols::{click, select_by_text, toggle_checkbox, type_value};
use super::value::FieldValue;

// ============================================================================
// NoDocument
// ============================================================================

/// Placeholder document type for a [`FormMutator`] without a document.
///
/// It has no values, so it can never be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDocument {}

impl Document for NoDocument {
    fn query_selector(&mut self, _selector: &str) -> Result<Option<&mut dyn Control>> {
        match *self {}
    }
}

// ============================================================================
// FormMutator
// ============================================================================

/// Resolves selectors against a document and applies the matching protocol.
///
/// | Control `type` | Protocol |
/// |----------------|----------|
/// | `checkbox`, `radio` | [`toggle_checkbox`] |
/// | `select-one`, `select-multiple` | [`select_by_text`] |
/// | `submit` | [`click`] |
/// | `password`, `text` | [`type_value`] |
/// | anything else, or no match | skipped |
///
/// # Example
///
/// ```
/// use form_mutator::{FillOut, FormMutator, MemoryControl, MemoryDocument};
///
/// # fn main() -> form_mutator::Result<()> {
/// let mut document = MemoryDocument::new();
/// document
///     .insert(MemoryControl::text().with_name("user"))
///     .insert(MemoryControl::checkbox().with_id("remember"));
///
/// let mut mutator = FormMutator::new(document);
/// let plan = FillOut::new()
///     .with("[name=user]", "ada")
///     .with("#remember", true)
///     .with("#missing", "ignored");
///
/// let report = mutator.fill_out(&plan)?;
/// assert_eq!(report.applied(), vec!["[name=user]", "#remember"]);
/// assert_eq!(report.skipped().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct FormMutator<D> {
    document: Option<D>,
    options: MutatorOptions,
}

// ============================================================================
// FormMutator - Display
// ============================================================================

impl<D> fmt::Debug for FormMutator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormMutator")
            .field("has_document", &self.document.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// FormMutator - Constructors
// ============================================================================

impl FormMutator<NoDocument> {
    /// Creates a mutator without a document.
    ///
    /// Every selector-based call is skipped with [`SkipReason::NoDocument`].
    #[inline]
    #[must_use]
    pub fn detached() -> Self {
        Self::from_parts(None, MutatorOptions::default())
    }
}

impl<D: Document> FormMutator<D> {
    /// Creates a mutator over `document` with default options.
    #[inline]
    #[must_use]
    pub fn new(document: D) -> Self {
        Self::from_parts(Some(document), MutatorOptions::default())
    }

    /// Creates a new builder.
    #[inline]
    #[must_use]
    pub fn builder() -> FormMutatorBuilder<D> {
        FormMutatorBuilder::new()
    }
}

impl<D> FormMutator<D> {
    pub(crate) fn from_parts(document: Option<D>, options: MutatorOptions) -> Self {
        Self { document, options }
    }
}

// ============================================================================
// FormMutator - Accessors
// ============================================================================

impl<D> FormMutator<D> {
    /// Returns the options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &MutatorOptions {
        &self.options
    }

    /// Returns the document, if any.
    #[inline]
    #[must_use]
    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    /// Returns the document mutably, if any.
    #[inline]
    #[must_use]
    pub fn document_mut(&mut self) -> Option<&mut D> {
        self.document.as_mut()
    }

    /// Consumes the mutator, returning the document.
    #[inline]
    #[must_use]
    pub fn into_document(self) -> Option<D> {
        self.document
    }
}

// ============================================================================
// FormMutator - Mutation
// ============================================================================

impl<D: Document> FormMutator<D> {
    /// Sets the control matched by `selector` to `value`.
    ///
    /// The value is coerced to what the control's type needs: a `checked`
    /// flag, a text value or a selection. Missing controls and controls of
    /// other types are skipped, not failed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSelector`] if the document rejects `selector`
    /// - Any error of the protocol the control's type maps to
    pub fn set_value(
        &mut self,
        selector: &str,
        value: impl Into<FieldValue>,
    ) -> Result<Outcome> {
        self.apply(selector, &value.into())
    }

    /// Applies every entry of `plan`, in order.
    ///
    /// Succeeds only if every field succeeds. An empty plan succeeds without
    /// touching the document.
    ///
    /// # Errors
    ///
    /// - [`Error::FieldFailed`] wrapping the first failure, when
    ///   [`MutatorOptions::stop_on_failure`] is set
    /// - [`Error::Incomplete`] otherwise: every field is attempted and the
    ///   error carries the report of the fields that succeeded
    pub fn fill_out(&mut self, plan: &FillOut) -> Result<FillReport> {
        debug!(fields = plan.len(), "Filling out form");

        let mut report = FillReport::default();
        let mut failed = Vec::new();
        let mut first_failure = None;

        for (selector, value) in plan.iter() {
            match self.apply(selector, value) {
                Ok(outcome) => report.push(selector, outcome),
                Err(e) => {
                    let e = Error::field_failed(selector, e);
                    if self.options.stop_on_failure {
                        return Err(e);
                    }
                    failed.push(selector.to_string());
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
            }
        }

        if let Some(e) = first_failure {
            warn!(
                applied = report.applied().len(),
                failed = failed.len(),
                "Form filled out with failures"
            );
            return Err(Error::incomplete(report, failed, e));
        }

        info!(
            applied = report.applied().len(),
            skipped = report.skipped().len(),
            "Form filled out"
        );
        Ok(report)
    }

    fn apply(&mut self, selector: &str, value: &FieldValue) -> Result<Outcome> {
        let Some(document) = self.document.as_mut() else {
            debug!(selector, "No document, skipping field");
            return Ok(Outcome::skipped(SkipReason::NoDocument));
        };

        let Some(control) = document.query_selector(selector)? else {
            debug!(selector, "Field not found, skipping");
            return Ok(Outcome::skipped(SkipReason::NotFound));
        };

        let field_type = FieldType::parse(control.control_type());
        debug!(selector, field_type = %field_type, "Setting field value");

        match field_type {
            FieldType::Checkbox | FieldType::Radio => {
                toggle_checkbox(Some(control), value.as_checked())
            }
            FieldType::SelectOne | FieldType::SelectMultiple => {
                select_by_text(Some(control), value.to_selection())
            }
            FieldType::Submit => click(Some(control)),
            FieldType::Password | FieldType::Text => type_value(Some(control), &value.to_text()),
            FieldType::Other(control_type) => {
                debug!(selector, "Unsupported type, skipping");
                Ok(Outcome::skipped(SkipReason::UnsupportedType(control_type)))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
