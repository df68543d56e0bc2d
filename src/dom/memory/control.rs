//! In-memory form control.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::dom::Control;
use crate::error::{Error, Result};
use crate::event::{EventKind, SyntheticEvent};

use super::log::EventLog;

// ============================================================================
// Constants
// ============================================================================

/// Log label for controls with neither id nor name.
const ANONYMOUS: &str = "<anonymous>";

// ============================================================================
// Types
// ============================================================================

/// Synchronous event listener.
///
/// Runs inside [`Control::dispatch_event`] and may mutate the control.
pub type Listener = Box<dyn FnMut(&mut MemoryControlState)>;

/// One `<option>` of a select list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MemoryOption {
    /// Visible text.
    pub text: String,
    /// Whether the option is selected.
    pub selected: bool,
}

impl MemoryOption {
    /// Creates an unselected option.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: false,
        }
    }

    /// Creates a selected option.
    #[inline]
    pub fn selected(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: true,
        }
    }
}

impl From<&str> for MemoryOption {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Mutable properties of a [`MemoryControl`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MemoryControlState {
    /// `type` discriminator.
    #[serde(rename = "type")]
    pub control_type: Option<String>,
    /// `id` attribute.
    pub id: Option<String>,
    /// `name` attribute.
    pub name: Option<String>,
    /// `value` property.
    pub value: String,
    /// `checked` property.
    pub checked: bool,
    /// Option list; `None` for controls without `options`.
    pub options: Option<Vec<MemoryOption>>,
}

// ============================================================================
// MemoryControl
// ============================================================================

/// A form control living entirely in memory.
///
/// # Example
///
/// ```
/// use form_mutator::{EventKind, MemoryControl, toggle_checkbox};
///
/// let mut terms = MemoryControl::checkbox().with_id("terms");
/// assert!(toggle_checkbox(Some(&mut terms), true).is_ok());
///
/// assert!(terms.checked());
/// assert_eq!(
///     terms.log().kinds(),
///     vec![EventKind::Focus, EventKind::Change, EventKind::Blur]
/// );
/// ```
pub struct MemoryControl {
    state: MemoryControlState,
    log: EventLog,
    failing: FxHashSet<EventKind>,
    malformed: bool,
    read_only: bool,
    listeners: Vec<(EventKind, Listener)>,
}

// ============================================================================
// MemoryControl - Display
// ============================================================================

impl fmt::Debug for MemoryControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryControl")
            .field("state", &self.state)
            .field("failing", &self.failing)
            .field("malformed", &self.malformed)
            .field("read_only", &self.read_only)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// MemoryControl - Constructors
// ============================================================================

impl MemoryControl {
    /// Creates a control with the given `type`.
    pub fn new(control_type: impl Into<String>) -> Self {
        Self::from_state(MemoryControlState {
            control_type: Some(control_type.into()),
            ..Default::default()
        })
    }

    /// Creates a control from a full property set.
    pub fn from_state(state: MemoryControlState) -> Self {
        Self {
            state,
            log: EventLog::new(),
            failing: FxHashSet::default(),
            malformed: false,
            read_only: false,
            listeners: Vec::new(),
        }
    }

    /// Creates a control without a `type` attribute.
    #[inline]
    pub fn untyped() -> Self {
        Self::from_state(MemoryControlState::default())
    }

    /// `<input type="text">`
    #[inline]
    pub fn text() -> Self {
        Self::new("text")
    }

    /// `<input type="password">`
    #[inline]
    pub fn password() -> Self {
        Self::new("password")
    }

    /// `<input type="checkbox">`
    #[inline]
    pub fn checkbox() -> Self {
        Self::new("checkbox")
    }

    /// `<input type="radio">`
    #[inline]
    pub fn radio() -> Self {
        Self::new("radio")
    }

    /// `<input type="submit">`
    #[inline]
    pub fn submit() -> Self {
        Self::new("submit")
    }

    /// `<select>` with the given options.
    pub fn select_one<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<MemoryOption>,
    {
        Self::new("select-one").with_options(options)
    }

    /// `<select multiple>` with the given options.
    pub fn select_multiple<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<MemoryOption>,
    {
        Self::new("select-multiple").with_options(options)
    }
}

// ============================================================================
// MemoryControl - Builder Methods
// ============================================================================

impl MemoryControl {
    /// Sets the `id` attribute.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.state.id = Some(id.into());
        self
    }

    /// Sets the `name` attribute.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.state.name = Some(name.into());
        self
    }

    /// Sets the initial `value`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.state.value = value.into();
        self
    }

    /// Sets the initial `checked` state.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.state.checked = checked;
        self
    }

    /// Replaces the option list.
    #[must_use]
    pub fn with_options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<MemoryOption>,
    {
        self.state.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Records dispatches into `log` instead of a private one.
    #[must_use]
    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    /// Makes dispatch of `kind` fail.
    #[must_use]
    pub fn fail_on(mut self, kind: EventKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Makes every dispatch and property access fail.
    #[must_use]
    pub fn malformed(mut self) -> Self {
        self.malformed = true;
        self
    }

    /// Makes every property write fail while dispatch keeps working.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Registers a listener for `kind`.
    #[must_use]
    pub fn on(
        mut self,
        kind: EventKind,
        listener: impl FnMut(&mut MemoryControlState) + 'static,
    ) -> Self {
        self.listeners.push((kind, Box::new(listener)));
        self
    }
}

// ============================================================================
// MemoryControl - Accessors
// ============================================================================

impl MemoryControl {
    /// Returns the property set.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &MemoryControlState {
        &self.state
    }

    /// Returns the `id` attribute.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.state.id.as_deref()
    }

    /// Returns the `name` attribute.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.state.name.as_deref()
    }

    /// Returns the current `value`.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.state.value
    }

    /// Returns the current `checked` state.
    #[inline]
    #[must_use]
    pub fn checked(&self) -> bool {
        self.state.checked
    }

    /// Returns the option list, if any.
    #[inline]
    #[must_use]
    pub fn options(&self) -> Option<&[MemoryOption]> {
        self.state.options.as_deref()
    }

    /// Returns the texts of all selected options, in list order.
    #[must_use]
    pub fn selected_texts(&self) -> Vec<&str> {
        self.options()
            .unwrap_or_default()
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.text.as_str())
            .collect()
    }

    /// Returns the event log.
    #[inline]
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Returns the label used in log records.
    #[must_use]
    pub fn label(&self) -> &str {
        self.id().or(self.name()).unwrap_or(ANONYMOUS)
    }

    pub(crate) fn attach_log(&mut self, log: EventLog) {
        self.log = log;
    }
}

// ============================================================================
// MemoryControl - Internal
// ============================================================================

impl MemoryControl {
    fn ensure_writable(&self) -> Result<()> {
        if self.malformed {
            return Err(Error::host("control is not a form element"));
        }
        if self.read_only {
            return Err(Error::host("control is read-only"));
        }
        Ok(())
    }
}

// ============================================================================
// MemoryControl - Control
// ============================================================================

impl Control for MemoryControl {
    fn control_type(&self) -> Option<&str> {
        self.state.control_type.as_deref()
    }

    fn option_texts(&self) -> Result<Option<Vec<String>>> {
        if self.malformed {
            return Err(Error::host("control is not a form element"));
        }
        Ok(self
            .state
            .options
            .as_ref()
            .map(|options| options.iter().map(|o| o.text.clone()).collect()))
    }

    fn set_option_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        self.ensure_writable()?;
        let option = self
            .state
            .options
            .as_mut()
            .and_then(|options| options.get_mut(index))
            .ok_or_else(|| Error::host(format!("no option at index {index}")))?;
        option.selected = selected;
        Ok(())
    }

    fn set_value(&mut self, value: &str) -> Result<()> {
        self.ensure_writable()?;
        self.state.value = value.to_string();
        Ok(())
    }

    fn set_checked(&mut self, checked: bool) -> Result<()> {
        self.ensure_writable()?;
        self.state.checked = checked;
        Ok(())
    }

    fn dispatch_event(&mut self, event: &SyntheticEvent) -> Result<()> {
        if self.malformed {
            return Err(Error::host("dispatchEvent is not a function"));
        }
        if self.failing.contains(&event.kind) {
            return Err(Error::host(format!("listener for '{}' threw", event.kind)));
        }

        self.log.push(self.label(), *event);

        for (kind, listener) in &mut self.listeners {
            if *kind == event.kind {
                listener(&mut self.state);
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_id() {
        assert_eq!(MemoryControl::text().with_name("n").with_id("i").label(), "i");
        assert_eq!(MemoryControl::text().with_name("n").label(), "n");
        assert_eq!(MemoryControl::text().label(), ANONYMOUS);
    }

    #[test]
    fn test_dispatch_records_and_runs_listeners() {
        let mut control = MemoryControl::text()
            .with_id("a")
            .on(EventKind::Input, |state| state.value.push('!'));

        control.set_value("hi").unwrap();
        control
            .dispatch_event(&SyntheticEvent::new(EventKind::Input))
            .unwrap();

        assert_eq!(control.value(), "hi!");
        assert_eq!(control.log().kinds_for("a"), vec![EventKind::Input]);
    }

    #[test]
    fn test_with_log_interleaves_standalone_controls() {
        let log = EventLog::new();
        let mut name = MemoryControl::text().with_id("name").with_log(log.clone());
        let mut terms = MemoryControl::checkbox().with_id("terms").with_log(log.clone());

        name.dispatch_event(&EventKind::Focus.into()).unwrap();
        terms.dispatch_event(&EventKind::Focus.into()).unwrap();
        name.dispatch_event(&EventKind::Blur.into()).unwrap();

        let order: Vec<(String, EventKind)> = log
            .records()
            .into_iter()
            .map(|r| (r.target, r.event.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                ("name".to_string(), EventKind::Focus),
                ("terms".to_string(), EventKind::Focus),
                ("name".to_string(), EventKind::Blur),
            ]
        );
        assert!(name.log().same_as(terms.log()));
    }

    #[test]
    fn test_state_serializes_type_key() {
        let control = MemoryControl::select_one([MemoryOption::selected("EU")]).with_id("region");

        let json = serde_json::to_value(control.state()).unwrap();

        assert_eq!(json["type"], "select-one");
        assert_eq!(json["options"][0], serde_json::json!({ "text": "EU", "selected": true }));
    }

    #[test]
    fn test_fail_on_does_not_record() {
        let mut control = MemoryControl::text().fail_on(EventKind::Change);

        let result = control.dispatch_event(&SyntheticEvent::new(EventKind::Change));

        assert!(result.is_err());
        assert!(control.log().is_empty());
    }

    #[test]
    fn test_malformed_rejects_everything() {
        let mut control = MemoryControl::untyped().malformed();

        assert!(control.dispatch_event(&EventKind::Focus.into()).is_err());
        assert!(control.set_value("x").is_err());
        assert!(control.set_checked(true).is_err());
        assert!(control.option_texts().is_err());
    }

    #[test]
    fn test_read_only_still_dispatches() {
        let mut control = MemoryControl::checkbox().read_only();

        assert!(control.dispatch_event(&EventKind::Focus.into()).is_ok());
        assert!(control.set_checked(true).is_err());
        assert!(!control.checked());
    }

    #[test]
    fn test_option_texts() {
        let control = MemoryControl::select_one(["a", "b"]);
        assert_eq!(
            control.option_texts().unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(MemoryControl::text().option_texts().unwrap(), None);
    }

    #[test]
    fn test_set_option_selected_out_of_range() {
        let mut control = MemoryControl::select_one(["a"]);
        assert!(control.set_option_selected(3, true).is_err());
        assert!(control.set_option_selected(0, true).is_ok());
        assert_eq!(control.selected_texts(), vec!["a"]);
    }
}
