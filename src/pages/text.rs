//! Optionally bilingual content fields.
//!
//! Funded-project records carry fields that are either a plain string or a
//! pair of strings in two languages. The loose union from the source data
//! becomes a tagged sum type so rendering handles both cases exhaustively.

use serde::{Deserialize, Serialize};

/// A content field that may carry an English translation alongside the
/// primary-language string. Deserializes from a bare JSON string or a
/// `{ "primary": ..., "english": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Plain(String),
    Bilingual { primary: String, english: String },
}

impl Text {
    /// The primary-language string; rendering defaults to this.
    pub fn primary(&self) -> &str {
        match self {
            Text::Plain(s) => s,
            Text::Bilingual { primary, .. } => primary,
        }
    }

    pub fn english(&self) -> Option<&str> {
        match self {
            Text::Plain(_) => None,
            Text::Bilingual { english, .. } => Some(english),
        }
    }

    /// Display form: the primary string, with the English string alongside
    /// when present.
    pub fn render(&self) -> String {
        match self {
            Text::Plain(s) => s.clone(),
            Text::Bilingual { primary, english } => format!("{} ({})", primary, english),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_from_json_string() {
        let t: Text = serde_json::from_str("\"2021-2024\"").unwrap();
        assert_eq!(t, Text::Plain("2021-2024".to_string()));
        assert_eq!(t.render(), "2021-2024");
        assert!(t.english().is_none());
    }

    #[test]
    fn test_bilingual_from_json_object() {
        let t: Text =
            serde_json::from_str(r#"{"primary": "책임연구원", "english": "Principal Investigator"}"#)
                .unwrap();
        assert_eq!(t.primary(), "책임연구원");
        assert_eq!(t.english(), Some("Principal Investigator"));
        assert_eq!(t.render(), "책임연구원 (Principal Investigator)");
    }
}
