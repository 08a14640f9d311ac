//! Owned parse result split into per-record readers.
//!
//! Event listings arrive either as one JSON object or as an array of objects.
//! [`Document`] hides that difference: [`Document::records`] always returns
//! one [`JsonReader`] per object.

use crate::error::{JsonError, Result};
use crate::parser::{parse_with, ParseOptions};
use crate::reader::JsonReader;
use crate::value::{Value, ValueKind};

/// A parsed document that owns its value tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self> {
        parse_with(text, options).map(|root| Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    /// One reader per record: the object itself, or each element of a
    /// top-level array. Every record must be an object.
    ///
    /// ```
    /// use json_reader::Document;
    ///
    /// let doc = Document::parse(r#"[{"name":"Tommy"},{"name":"Jerry"}]"#).unwrap();
    /// let names: Vec<&str> = doc
    ///     .records()
    ///     .unwrap()
    ///     .iter()
    ///     .map(|r| r.get_str("name").unwrap())
    ///     .collect();
    /// assert_eq!(names, ["Tommy", "Jerry"]);
    /// ```
    pub fn records(&self) -> Result<Vec<JsonReader<'_>>> {
        self.records_with_delimiter(crate::path::DEFAULT_DELIMITER)
    }

    /// Like [`Document::records`], with readers splitting paths on `delimiter`.
    pub fn records_with_delimiter<'a>(&'a self, delimiter: &'a str) -> Result<Vec<JsonReader<'a>>> {
        match &self.root {
            Value::Object(_) => Ok(vec![JsonReader::with_delimiter(&self.root, delimiter)?]),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(_) => JsonReader::with_delimiter(item, delimiter),
                    other => Err(JsonError::TypeMismatch {
                        path: format!("[{i}]"),
                        expected: ValueKind::Object,
                        found: other.kind(),
                    }),
                })
                .collect(),
            other => Err(JsonError::mismatch(ValueKind::Object, other.kind())),
        }
    }
}
