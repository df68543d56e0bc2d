//! In-memory document with a small selector resolver.
//!
//! Supported selector forms:
//!
//! | Form | Matches |
//! |------|---------|
//! | `#id` | `id` attribute |
//! | `[name=value]`, `[name='value']`, `[name="value"]` | `name` attribute |
//! | anything else | a selector registered with [`MemoryDocument::insert_at`] |

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::dom::{Control, Document};
use crate::error::{Error, Result};

use super::control::MemoryControl;
use super::log::EventLog;

// ============================================================================
// Selector Parsing
// ============================================================================

static ID_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Za-z_][\w-]*)$").expect("id selector pattern is valid")
});

static NAME_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\[name=(?:"([^"]*)"|'([^']*)'|([^\]"'\s]+))\]$"#)
        .expect("name selector pattern is valid")
});

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector<'a> {
    Id(&'a str),
    Name(&'a str),
    Registered(&'a str),
}

impl<'a> Selector<'a> {
    fn parse(selector: &'a str) -> Result<Self> {
        if let Some(caps) = ID_SELECTOR.captures(selector)
            && let Some(id) = caps.get(1)
        {
            return Ok(Selector::Id(id.as_str()));
        }

        if let Some(caps) = NAME_SELECTOR.captures(selector)
            && let Some(name) = caps.get(1).or(caps.get(2)).or(caps.get(3))
        {
            return Ok(Selector::Name(name.as_str()));
        }

        if selector.trim().is_empty() || selector.starts_with('#') || selector.starts_with('[') {
            return Err(Error::invalid_selector(selector));
        }

        Ok(Selector::Registered(selector))
    }
}

// ============================================================================
// MemoryDocument
// ============================================================================

/// An ordered collection of [`MemoryControl`]s sharing one [`EventLog`].
#[derive(Debug, Default)]
pub struct MemoryDocument {
    entries: Vec<Entry>,
    log: EventLog,
    queries: Vec<String>,
}

#[derive(Debug)]
struct Entry {
    selector: Option<String>,
    control: MemoryControl,
}

impl Entry {
    fn matches(&self, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::Id(id) => self.control.id() == Some(*id),
            Selector::Name(name) => self.control.name() == Some(*name),
            Selector::Registered(raw) => self.selector.as_deref() == Some(*raw),
        }
    }
}

impl MemoryDocument {
    /// Creates an empty document.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a control, resolvable by `#id` or `[name=..]`.
    ///
    /// The control's dispatches are recorded in the document log.
    pub fn insert(&mut self, control: MemoryControl) -> &mut Self {
        self.push(None, control)
    }

    /// Adds a control that also resolves by the exact `selector` string.
    pub fn insert_at(&mut self, selector: impl Into<String>, control: MemoryControl) -> &mut Self {
        self.push(Some(selector.into()), control)
    }

    fn push(&mut self, selector: Option<String>, mut control: MemoryControl) -> &mut Self {
        control.attach_log(self.log.clone());
        self.entries.push(Entry { selector, control });
        self
    }

    /// Returns the first control matching `selector`.
    ///
    /// A selector registered through [`insert_at`](Self::insert_at) wins over
    /// `#id` and `[name=..]` resolution.
    pub fn control(&self, selector: &str) -> Result<Option<&MemoryControl>> {
        Ok(self.position(selector)?.map(|index| &self.entries[index].control))
    }

    /// Returns the first control matching `selector`, mutably.
    pub fn control_mut(&mut self, selector: &str) -> Result<Option<&mut MemoryControl>> {
        Ok(self
            .position(selector)?
            .map(|index| &mut self.entries[index].control))
    }

    fn position(&self, selector: &str) -> Result<Option<usize>> {
        let registered = Selector::Registered(selector);
        if let Some(index) = self.entries.iter().position(|e| e.matches(&registered)) {
            return Ok(Some(index));
        }

        let parsed = Selector::parse(selector)?;
        Ok(self.entries.iter().position(|entry| entry.matches(&parsed)))
    }

    /// Returns the shared event log.
    #[inline]
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Returns every selector passed to [`Document::query_selector`], in order.
    #[inline]
    #[must_use]
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Returns the number of controls.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document holds no controls.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Document for MemoryDocument {
    fn query_selector(&mut self, selector: &str) -> Result<Option<&mut dyn Control>> {
        trace!(selector, "Resolving selector");
        self.queries.push(selector.to_string());
        Ok(self
            .control_mut(selector)?
            .map(|control| control as &mut dyn Control))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Selector::parse("#email").unwrap(), Selector::Id("email"));
        assert_eq!(Selector::parse("[name=q]").unwrap(), Selector::Name("q"));
        assert_eq!(Selector::parse("[name='a b']").unwrap(), Selector::Name("a b"));
        assert_eq!(Selector::parse("[name=\"x\"]").unwrap(), Selector::Name("x"));
        assert_eq!(
            Selector::parse("form .submit").unwrap(),
            Selector::Registered("form .submit")
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "  ", "#", "#1abc", "[name=", "[type=text]"] {
            assert!(
                matches!(Selector::parse(bad), Err(Error::InvalidSelector { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolves_first_match() {
        let mut document = MemoryDocument::new();
        document
            .insert(MemoryControl::text().with_name("dup").with_value("first"))
            .insert(MemoryControl::text().with_name("dup").with_value("second"));

        let found = document.control("[name=dup]").unwrap().unwrap();
        assert_eq!(found.value(), "first");
    }

    #[test]
    fn test_insert_at_registers_selector() {
        let mut document = MemoryDocument::new();
        document.insert_at("form button", MemoryControl::submit());

        assert!(document.control("form button").unwrap().is_some());
        assert!(document.control("form input").unwrap().is_none());
    }

    #[test]
    fn test_insert_at_resolves_selectors_outside_id_and_name_forms() {
        let mut document = MemoryDocument::new();
        document
            .insert_at("#login input", MemoryControl::text().with_value("a"))
            .insert_at("[type=text]", MemoryControl::text().with_value("b"));

        assert_eq!(document.control("#login input").unwrap().unwrap().value(), "a");
        assert_eq!(document.control("[type=text]").unwrap().unwrap().value(), "b");
        assert!(matches!(
            document.control("#other input"),
            Err(Error::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_insert_at_wins_over_id_resolution() {
        let mut document = MemoryDocument::new();
        document
            .insert(MemoryControl::text().with_id("email").with_value("by id"))
            .insert_at("#email", MemoryControl::text().with_value("registered"));

        let found = document.control_mut("#email").unwrap().unwrap();
        assert_eq!(found.value(), "registered");
    }

    #[test]
    fn test_registered_selector_reaches_mutator() {
        let mut document = MemoryDocument::new();
        document.insert_at("#login input", MemoryControl::text());

        let control = document.query_selector("#login input").unwrap().unwrap();
        control.set_value("ada").unwrap();

        assert_eq!(document.control("#login input").unwrap().unwrap().value(), "ada");
    }

    #[test]
    fn test_controls_share_document_log() {
        let mut document = MemoryDocument::new();
        document.insert(MemoryControl::text().with_id("a"));

        let control = document.control("#a").unwrap().unwrap();
        assert!(control.log().same_as(document.log()));
    }

    #[test]
    fn test_query_selector_records_queries() {
        let mut document = MemoryDocument::new();

        assert!(document.query_selector("#missing").unwrap().is_none());
        assert!(document.query_selector("[").is_err());
        assert_eq!(document.queries(), &["#missing".to_string(), "[".to_string()]);
    }
}
