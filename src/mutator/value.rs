//! Values a field can be set to.
//!
//! A [`FieldValue`] is coerced to whatever the target control needs: a
//! `checked` flag, a text `value`, or a [`Selection`] of option texts.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Selection
// ============================================================================

/// Ordered list of option texts to (de)select.
///
/// A single string is wrapped into a one-element selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<String>);

impl Selection {
    /// Creates an empty selection.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `text` is one of the selected texts.
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|t| t == text)
    }

    /// Iterates the texts in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of texts.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no text is selected.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the selection.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Selection {
    fn from(text: &str) -> Self {
        Self(vec![text.to_string()])
    }
}

impl From<String> for Selection {
    fn from(text: String) -> Self {
        Self(vec![text])
    }
}

impl From<&String> for Selection {
    fn from(text: &String) -> Self {
        Self(vec![text.clone()])
    }
}

impl From<Vec<String>> for Selection {
    fn from(texts: Vec<String>) -> Self {
        Self(texts)
    }
}

impl From<Vec<&str>> for Selection {
    fn from(texts: Vec<&str>) -> Self {
        texts.into_iter().collect()
    }
}

impl From<&[&str]> for Selection {
    fn from(texts: &[&str]) -> Self {
        texts.iter().copied().collect()
    }
}

impl From<&[String]> for Selection {
    fn from(texts: &[String]) -> Self {
        Self(texts.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(texts: [&str; N]) -> Self {
        texts.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// FieldValue
// ============================================================================

/// Target value of one field in a fill-out plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checked state, e.g. for checkboxes.
    Bool(bool),
    /// Text, e.g. for inputs or a single option.
    Text(String),
    /// Several option texts.
    List(Vec<String>),
}

impl FieldValue {
    /// Coerces to a `checked` flag.
    ///
    /// Text is truthy when non-empty; a list is always truthy.
    #[must_use]
    pub fn as_checked(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(text) => !text.is_empty(),
            Self::List(_) => true,
        }
    }

    /// Coerces to a text `value`.
    ///
    /// Lists are joined with `,`.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(","),
        }
    }

    /// Coerces to a [`Selection`].
    ///
    /// A boolean never equals an option text, so it selects nothing.
    #[must_use]
    pub fn to_selection(&self) -> Selection {
        match self {
            Self::Bool(_) => Selection::new(),
            Self::Text(text) => Selection::from(text),
            Self::List(items) => Selection::from(items.as_slice()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldValue {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Selection> for FieldValue {
    fn from(value: Selection) -> Self {
        Self::List(value.into_inner())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_wraps_into_selection() {
        let selection = Selection::from("red");
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("red"));
        assert!(!selection.contains("Red"));
    }

    #[test]
    fn test_selection_keeps_order() {
        let selection = Selection::from(["b", "a", "b"]);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_as_checked() {
        assert!(FieldValue::Bool(true).as_checked());
        assert!(!FieldValue::Bool(false).as_checked());
        assert!(FieldValue::from("x").as_checked());
        assert!(!FieldValue::from("").as_checked());
        assert!(FieldValue::List(vec![]).as_checked());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(FieldValue::Bool(false).to_text(), "false");
        assert_eq!(FieldValue::from(["a", "b"]).to_text(), "a,b");
        assert_eq!(FieldValue::from("plain").to_string(), "plain");
    }

    #[test]
    fn test_to_selection() {
        assert!(FieldValue::Bool(true).to_selection().is_empty());
        assert_eq!(FieldValue::from("one").to_selection(), Selection::from("one"));
        assert_eq!(
            FieldValue::from(vec!["x", "y"]).to_selection(),
            Selection::from(["x", "y"])
        );
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[true, "text", ["a", "b"]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Bool(true),
                FieldValue::from("text"),
                FieldValue::from(["a", "b"]),
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_numbers() {
        assert!(serde_json::from_str::<FieldValue>("42").is_err());
    }
}
