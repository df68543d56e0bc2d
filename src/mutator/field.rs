//! Control `type` discriminator.

use std::fmt;

// ============================================================================
// FieldType
// ============================================================================

/// Control kinds the mutator knows how to edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `checkbox`
    Checkbox,
    /// `radio`
    Radio,
    /// `select-one`
    SelectOne,
    /// `select-multiple`
    SelectMultiple,
    /// `submit`
    Submit,
    /// `password`
    Password,
    /// `text`
    Text,
    /// Any other discriminator, or none at all.
    Other(Option<String>),
}

impl FieldType {
    /// Parses a `type` discriminator. Matching is exact.
    #[must_use]
    pub fn parse(control_type: Option<&str>) -> Self {
        match control_type {
            Some("checkbox") => Self::Checkbox,
            Some("radio") => Self::Radio,
            Some("select-one") => Self::SelectOne,
            Some("select-multiple") => Self::SelectMultiple,
            Some("submit") => Self::Submit,
            Some("password") => Self::Password,
            Some("text") => Self::Text,
            other => Self::Other(other.map(str::to_string)),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::SelectOne => "select-one",
            Self::SelectMultiple => "select-multiple",
            Self::Submit => "submit",
            Self::Password => "password",
            Self::Text => "text",
            Self::Other(Some(other)) => other,
            Self::Other(None) => "<none>",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(FieldType::parse(Some("checkbox")), FieldType::Checkbox);
        assert_eq!(FieldType::parse(Some("select-multiple")), FieldType::SelectMultiple);
        assert_eq!(FieldType::parse(Some("password")), FieldType::Password);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            FieldType::parse(Some("Text")),
            FieldType::Other(Some("Text".into()))
        );
        assert_eq!(FieldType::parse(Some("email")).to_string(), "email");
        assert_eq!(FieldType::parse(None), FieldType::Other(None));
    }
}
