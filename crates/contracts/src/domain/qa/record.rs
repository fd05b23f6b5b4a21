use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::StoreError;

/// Store-assigned record identifier.
///
/// The wire contract only promises an opaque value, so both JSON integers
/// and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Interview question/answer record.
///
/// `id` is absent on a client-constructed draft and assigned by the store.
/// `explanation`, `usecase` and `summary` hold rich markup strings;
/// `example_code` and `output` are plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(rename = "type")]
    pub category: String,

    pub language: String,

    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub explanation: String,

    #[serde(default)]
    pub usecase: String,

    #[serde(default, rename = "exampleCode")]
    pub example_code: String,

    #[serde(default)]
    pub output: String,

    #[serde(default)]
    pub summary: String,
}

impl QaRecord {
    /// All-default draft: first catalog category, its first language, empty
    /// text fields, no id.
    pub fn draft() -> Self {
        let first = catalog::default_category();
        Self {
            id: None,
            category: first.name.to_string(),
            language: first.languages[0].to_string(),
            question: String::new(),
            explanation: String::new(),
            usecase: String::new(),
            example_code: String::new(),
            output: String::new(),
            summary: String::new(),
        }
    }

    /// Change the category.
    ///
    /// Post-condition: `language` is the first allowed sub-language of the
    /// new category, so a known `(category, language)` pair is always a
    /// catalog member. An unknown category leaves the language empty.
    pub fn set_category(&mut self, name: &str) {
        self.category = name.to_string();
        self.language = catalog::languages_for(name)
            .first()
            .map(|l| l.to_string())
            .unwrap_or_default();
    }

    /// Client-side submission guard: the question is the only required
    /// field.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.question.trim().is_empty() {
            return Err(StoreError::validation("Please enter a question"));
        }
        Ok(())
    }
}

impl Default for QaRecord {
    fn default() -> Self {
        Self::draft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_uses_catalog_defaults() {
        let d = QaRecord::draft();
        assert_eq!(d.category, "Front-End");
        assert_eq!(d.language, "HTML");
        assert!(d.id.is_none());
        assert!(d.question.is_empty());
    }

    #[test]
    fn set_category_resets_language_to_first_allowed() {
        let mut d = QaRecord::draft();
        d.language = "ReactJS".to_string();
        d.set_category("Back-End");
        assert_eq!(d.category, "Back-End");
        assert_eq!(d.language, "CoreJava");
        assert!(catalog::languages_for(&d.category).contains(&d.language.as_str()));
    }

    #[test]
    fn set_category_on_every_catalog_entry_keeps_pair_valid() {
        let mut d = QaRecord::draft();
        for c in catalog::CATEGORIES {
            d.set_category(c.name);
            assert_eq!(d.language, c.languages[0]);
        }
    }

    #[test]
    fn unknown_category_leaves_language_empty() {
        let mut d = QaRecord::draft();
        d.set_category("No Such Category");
        assert_eq!(d.language, "");
    }

    #[test]
    fn blank_question_fails_validation() {
        let mut d = QaRecord::draft();
        d.question = "   ".to_string();
        assert!(matches!(d.validate(), Err(StoreError::Validation(_))));
        d.question = "Java 8 Features".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn draft_serializes_without_id_and_with_wire_names() {
        let mut d = QaRecord::draft();
        d.question = "Q".to_string();
        d.example_code = "code".to_string();
        let v = serde_json::to_value(&d).unwrap();
        let obj = v.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert_eq!(obj["type"], "Front-End");
        assert_eq!(obj["exampleCode"], "code");
        assert!(!obj.contains_key("example_code"));
    }

    #[test]
    fn deserializes_numeric_and_string_ids() {
        let a: QaRecord = serde_json::from_str(
            r#"{"id": 7, "type": "Database", "language": "SQL", "question": "Q"}"#,
        )
        .unwrap();
        assert_eq!(a.id, Some(RecordId::Int(7)));
        assert_eq!(a.explanation, "");

        let b: QaRecord = serde_json::from_str(
            r#"{"id": "abc", "type": "Database", "language": "SQL", "question": "Q"}"#,
        )
        .unwrap();
        assert_eq!(b.id, Some(RecordId::Text("abc".to_string())));
        assert_eq!(b.id.unwrap().to_string(), "abc");
    }
}
