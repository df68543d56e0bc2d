//! Fill-out plans and their reports.
//!
//! A [`FillOut`] maps selectors to values in insertion order. Plans can be
//! built in code or loaded from a JSON object, whose key order is kept.
//!
//! ```
//! use form_mutator::{FieldValue, FillOut};
//!
//! # fn main() -> form_mutator::Result<()> {
//! let plan = FillOut::from_json(r##"{ "#terms": true, "#name": "Ada" }"##)?;
//! let keys: Vec<&str> = plan.iter().map(|(selector, _)| selector).collect();
//!
//! assert_eq!(keys, vec!["#terms", "#name"]);
//! assert_eq!(plan.get("#terms"), Some(&FieldValue::Bool(true)));
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

use super::outcome::{Outcome, SkipReason};
use super::value::FieldValue;

// ============================================================================
// FillOut
// ============================================================================

/// Ordered selector → value mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FillOut {
    entries: Vec<(String, FieldValue)>,
}

impl FillOut {
    /// Creates an empty plan.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a plan from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if `json` is not an object
    /// of booleans, strings and string arrays.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds an entry, consuming and returning the plan.
    #[must_use]
    pub fn with(mut self, selector: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(selector, value);
        self
    }

    /// Adds an entry.
    ///
    /// A selector that is already present keeps its position and gets the
    /// new value; the old value is returned.
    pub fn insert(
        &mut self,
        selector: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let selector = selector.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == selector) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((selector, value));
                None
            }
        }
    }

    /// Returns the value for `selector`.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == selector)
            .map(|(_, value)| value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the plan is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FillOut
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut plan = Self::new();
        for (selector, value) in iter {
            plan.insert(selector, value);
        }
        plan
    }
}

// ============================================================================
// FillOut - Serde
// ============================================================================

impl Serialize for FillOut {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, value) in &self.entries {
            map.serialize_entry(selector, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FillOut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FillOutVisitor)
    }
}

struct FillOutVisitor;

impl<'de> Visitor<'de> for FillOutVisitor {
    type Value = FillOut;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of selectors to booleans, strings or string arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<FillOut, A::Error> {
        let mut plan = FillOut::new();
        while let Some((selector, value)) = access.next_entry::<String, FieldValue>()? {
            plan.insert(selector, value);
        }
        Ok(plan)
    }
}

// ============================================================================
// FillReport
// ============================================================================

/// Per-field outcomes of a successful fill-out, in plan order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FillReport {
    fields: Vec<FieldReport>,
}

/// Outcome of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// Selector of the field.
    pub selector: String,
    /// What happened.
    pub outcome: Outcome,
}

impl FillReport {
    pub(crate) fn push(&mut self, selector: &str, outcome: Outcome) {
        self.fields.push(FieldReport {
            selector: selector.to_string(),
            outcome,
        });
    }

    /// Returns every field report.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldReport] {
        &self.fields
    }

    /// Returns selectors whose full event sequence was dispatched.
    #[must_use]
    pub fn applied(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.outcome.is_applied())
            .map(|f| f.selector.as_str())
            .collect()
    }

    /// Returns skipped selectors and why they were skipped.
    #[must_use]
    pub fn skipped(&self) -> Vec<(&str, &SkipReason)> {
        self.fields
            .iter()
            .filter_map(|f| f.outcome.skip_reason().map(|r| (f.selector.as_str(), r)))
            .collect()
    }

    /// Returns the number of fields attempted.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field was attempted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
