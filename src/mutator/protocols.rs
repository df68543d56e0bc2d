//! The mutation protocols.
//!
//! Each protocol dispatches a fixed event sequence against a borrowed
//! control and writes one property along the way. A failure at any step
//! stops the sequence: earlier events and writes are not rolled back, and
//! the error lists the events that already fired.
//!
//! | Protocol | Sequence |
//! |----------|----------|
//! | [`click`] | `click` |
//! | [`select_by_text`] / [`deselect_by_text`] | `focus`, *options*, `change`, `blur` |
//! | [`toggle_checkbox`] | `focus`, *checked*, `change`, `blur` |
//! | [`type_value`] | `focus`, `reset`, *value*, `keydown`, `keypress`, `keyup`, `input`, `change`, `blur` |

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::dom::Control;
use crate::error::{Error, Result};
use crate::event::{EventKind, SyntheticEvent};

use super::outcome::Outcome;
use super::value::Selection;

// ============================================================================
// Sequences
// ============================================================================

/// Events dispatched by [`click`].
pub const CLICK_SEQUENCE: [EventKind; 1] = [EventKind::Click];

/// Events dispatched by [`select_by_text`], [`deselect_by_text`] and
/// [`toggle_checkbox`]. The property write happens after the first event.
pub const TOGGLE_SEQUENCE: [EventKind; 3] =
    [EventKind::Focus, EventKind::Change, EventKind::Blur];

/// Events dispatched by [`type_value`]. The value is written after the
/// second event, so prior state is reset before the new value lands.
pub const TYPE_SEQUENCE: [EventKind; 8] = [
    EventKind::Focus,
    EventKind::Reset,
    EventKind::KeyDown,
    EventKind::KeyPress,
    EventKind::KeyUp,
    EventKind::Input,
    EventKind::Change,
    EventKind::Blur,
];

// ============================================================================
// Sequence Runner
// ============================================================================

/// Drives one control through a protocol, tracking what already fired.
struct Sequence<'c, C: ?Sized> {
    control: &'c mut C,
    dispatched: Vec<EventKind>,
}

impl<'c, C: Control + ?Sized> Sequence<'c, C> {
    fn new(control: &'c mut C) -> Self {
        Self {
            control,
            dispatched: Vec::with_capacity(TYPE_SEQUENCE.len()),
        }
    }

    fn fire(&mut self, kind: EventKind) -> Result<()> {
        trace!(event = %kind, "Dispatching event");
        self.control
            .dispatch_event(&SyntheticEvent::new(kind))
            .map_err(|e| Error::dispatch(kind, self.dispatched.clone(), e))?;
        self.dispatched.push(kind);
        Ok(())
    }

    fn fire_all(&mut self, kinds: &[EventKind]) -> Result<()> {
        kinds.iter().try_for_each(|kind| self.fire(*kind))
    }

    fn write<T>(
        &mut self,
        property: &'static str,
        apply: impl FnOnce(&mut C) -> Result<T>,
    ) -> Result<T> {
        apply(&mut *self.control)
            .map_err(|e| Error::property(property, self.dispatched.clone(), e))
    }
}

/// Runs `body` against `control`, mapping an absent control to
/// [`Error::ControlUnavailable`].
fn run<C, F>(protocol: &'static str, control: Option<&mut C>, body: F) -> Result<Outcome>
where
    C: Control + ?Sized,
    F: FnOnce(&mut Sequence<'_, C>) -> Result<()>,
{
    let Some(control) = control else {
        debug!(protocol, "Control unavailable");
        return Err(Error::ControlUnavailable);
    };

    let mut sequence = Sequence::new(control);
    match body(&mut sequence) {
        Ok(()) => Ok(Outcome::Applied),
        Err(e) => {
            if e.is_partial() {
                warn!(
                    protocol,
                    dispatched = e.dispatched().len(),
                    error = %e,
                    "Sequence aborted after partial dispatch"
                );
            } else {
                debug!(protocol, error = %e, "Sequence failed");
            }
            Err(e)
        }
    }
}

// ============================================================================
// Protocols
// ============================================================================

/// Dispatches a single `click` pointer event.
///
/// # Errors
///
/// - [`Error::ControlUnavailable`] if `control` is `None`
/// - [`Error::Dispatch`] if the host rejects the event
pub fn click<C: Control + ?Sized>(control: Option<&mut C>) -> Result<Outcome> {
    run("click", control, |seq| seq.fire_all(&CLICK_SEQUENCE))
}

/// Selects every option whose text is in `values`.
///
/// Options not named in `values` keep their current `selected` flag, so
/// selections from earlier calls persist.
///
/// # Example
///
/// ```
/// use form_mutator::{MemoryControl, select_by_text};
///
/// let mut colors = MemoryControl::select_multiple(["red", "green", "blue"]);
/// assert!(select_by_text(Some(&mut colors), "red").is_ok());
/// assert!(select_by_text(Some(&mut colors), ["blue"]).is_ok());
///
/// assert_eq!(colors.selected_texts(), vec!["red", "blue"]);
/// ```
///
/// # Errors
///
/// - [`Error::ControlUnavailable`] if `control` is `None`
/// - [`Error::Dispatch`] or [`Error::Property`] if the host rejects a step
pub fn select_by_text<C: Control + ?Sized>(
    control: Option<&mut C>,
    values: impl Into<Selection>,
) -> Result<Outcome> {
    toggle_select_list("select_by_text", control, values.into(), true)
}

/// Deselects every option whose text is in `values`.
///
/// Options not named in `values` are left untouched.
///
/// # Errors
///
/// Same as [`select_by_text`].
pub fn deselect_by_text<C: Control + ?Sized>(
    control: Option<&mut C>,
    values: impl Into<Selection>,
) -> Result<Outcome> {
    toggle_select_list("deselect_by_text", control, values.into(), false)
}

fn toggle_select_list<C: Control + ?Sized>(
    protocol: &'static str,
    control: Option<&mut C>,
    values: Selection,
    selected: bool,
) -> Result<Outcome> {
    run(protocol, control, |seq| {
        let [focus, rest @ ..] = TOGGLE_SEQUENCE;
        seq.fire(focus)?;

        let texts = seq.write("options", |c| c.option_texts())?.unwrap_or_default();
        let wanted: FxHashSet<&str> = values.iter().collect();
        let matched: Vec<usize> = texts
            .iter()
            .enumerate()
            .filter(|(_, text)| wanted.contains(text.as_str()))
            .map(|(index, _)| index)
            .collect();

        debug!(
            protocol,
            options = texts.len(),
            matched = matched.len(),
            selected,
            "Toggling options"
        );

        for index in matched {
            seq.write("selected", |c| c.set_option_selected(index, selected))?;
        }

        seq.fire_all(&rest)
    })
}

/// Sets `checked` to `value` between `focus` and `change`.
///
/// # Errors
///
/// - [`Error::ControlUnavailable`] if `control` is `None`
/// - [`Error::Dispatch`] or [`Error::Property`] if the host rejects a step
pub fn toggle_checkbox<C: Control + ?Sized>(
    control: Option<&mut C>,
    value: bool,
) -> Result<Outcome> {
    run("toggle_checkbox", control, |seq| {
        let [focus, rest @ ..] = TOGGLE_SEQUENCE;
        seq.fire(focus)?;
        seq.write("checked", |c| c.set_checked(value))?;
        seq.fire_all(&rest)
    })
}

/// Types `value` into a text control with the full keyboard sequence.
///
/// # Example
///
/// ```
/// use form_mutator::{MemoryControl, TYPE_SEQUENCE, type_value};
///
/// let mut name = MemoryControl::text().with_value("old");
/// assert!(type_value(Some(&mut name), "new").is_ok());
///
/// assert_eq!(name.value(), "new");
/// assert_eq!(name.log().kinds(), TYPE_SEQUENCE.to_vec());
/// ```
///
/// # Errors
///
/// - [`Error::ControlUnavailable`] if `control` is `None`
/// - [`Error::Dispatch`] or [`Error::Property`] if the host rejects a step
pub fn type_value<C: Control + ?Sized>(control: Option<&mut C>, value: &str) -> Result<Outcome> {
    run("type_value", control, |seq| {
        let (before, after) = TYPE_SEQUENCE.split_at(2);
        seq.fire_all(before)?;
        seq.write("value", |c| c.set_value(value))?;
        seq.fire_all(after)
    })
}

// ============================================================================
// Tests
// ============================================================================
