//! Traits a host implements to be driven by the mutation protocols.
//!
//! A host returns `Err` from any method when the underlying object lacks the
//! capability (detached node, read-only property, throwing listener). The
//! protocols turn those errors into failed outcomes.

use crate::error::Result;
use crate::event::SyntheticEvent;

// ============================================================================
// Control
// ============================================================================

/// A form-control-like element.
///
/// The reference is only borrowed for the duration of one mutation call.
pub trait Control {
    /// Returns the `type` discriminator (`"text"`, `"checkbox"`,
    /// `"select-one"`, ...), or `None` when the element has none.
    fn control_type(&self) -> Option<&str> {
        None
    }

    /// Returns the `text` of every option, in list order.
    ///
    /// `Ok(None)` means the element has no `options` attribute at all.
    fn option_texts(&self) -> Result<Option<Vec<String>>> {
        Ok(None)
    }

    /// Sets the `selected` flag of the option at `index`.
    fn set_option_selected(&mut self, index: usize, selected: bool) -> Result<()>;

    /// Assigns the `value` property.
    fn set_value(&mut self, value: &str) -> Result<()>;

    /// Assigns the `checked` property.
    fn set_checked(&mut self, checked: bool) -> Result<()>;

    /// Dispatches an event synchronously.
    ///
    /// Host listeners must have run by the time this returns.
    fn dispatch_event(&mut self, event: &SyntheticEvent) -> Result<()>;
}

impl<C: Control + ?Sized> Control for &mut C {
    fn control_type(&self) -> Option<&str> {
        (**self).control_type()
    }

    fn option_texts(&self) -> Result<Option<Vec<String>>> {
        (**self).option_texts()
    }

    fn set_option_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        (**self).set_option_selected(index, selected)
    }

    fn set_value(&mut self, value: &str) -> Result<()> {
        (**self).set_value(value)
    }

    fn set_checked(&mut self, checked: bool) -> Result<()> {
        (**self).set_checked(checked)
    }

    fn dispatch_event(&mut self, event: &SyntheticEvent) -> Result<()> {
        (**self).dispatch_event(event)
    }
}

// ============================================================================
// Document
// ============================================================================

/// A document-like object that resolves selectors to controls.
pub trait Document {
    /// Resolves `selector` to the first matching control.
    ///
    /// Returns `Ok(None)` when nothing matches and `Err` when the selector
    /// cannot be parsed.
    fn query_selector(&mut self, selector: &str) -> Result<Option<&mut dyn Control>>;
}

impl<D: Document + ?Sized> Document for &mut D {
    fn query_selector(&mut self, selector: &str) -> Result<Option<&mut dyn Control>> {
        (**self).query_selector(selector)
    }
}
