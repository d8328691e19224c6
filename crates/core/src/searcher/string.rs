// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full-text search container.

use serde::Deserialize;

/// A search text and the fields to search it in.
///
/// When no fields are listed, the entity type's default find fields are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "StringSearcherDoc")]
pub struct StringSearcher {
    text: Option<String>,
    fields: Vec<String>,
}

impl StringSearcher {
    pub fn new(text: impl Into<String>) -> Self {
        StringSearcher {
            text: Some(text.into()),
            fields: Vec::new(),
        }
    }

    /// The search text, if one is set and not blank.
    pub fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<String> {
        &mut self.fields
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.text().is_some()
    }

    pub fn clear(&mut self) {
        self.text = None;
        self.fields.clear();
    }
}

/// `"text"` or `{"text": "...", "fields": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringSearcherDoc {
    Text(String),
    Full {
        text: Option<String>,
        #[serde(default)]
        fields: Vec<String>,
    },
}

impl From<StringSearcherDoc> for StringSearcher {
    fn from(doc: StringSearcherDoc) -> Self {
        match doc {
            StringSearcherDoc::Text(text) => StringSearcher::new(text),
            StringSearcherDoc::Full { text, fields } => StringSearcher { text, fields },
        }
    }
}

#[cfg(test)]
#[path = "string_tests.rs"]
mod tests;
