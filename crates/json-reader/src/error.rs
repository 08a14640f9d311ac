//! Error types for parsing and path resolution.

use crate::value::ValueKind;
use thiserror::Error;

/// Longest fragment of source text carried in a [`JsonError::Parse`].
const MAX_FRAGMENT_LEN: usize = 64;

/// Errors that can occur while parsing text or reading values out of a tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// Malformed structure or a literal that matches none of the known forms.
    /// `fragment` is the offending span, truncated for display.
    #[error("JSON parse error: {message} (near `{fragment}`)")]
    Parse { message: String, fragment: String },

    /// The input nests objects/arrays deeper than the configured limit.
    #[error("JSON nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// A bracket index pointed past the end of its array.
    #[error("index {index} is out of range for `{key}` (length {len})")]
    Index { key: String, index: usize, len: usize },

    /// The resolved value is not of the variant the caller asked for.
    /// `path` is empty when narrowing a bare value rather than a path lookup.
    #[error("type mismatch{}: expected {expected}, found {found}", describe_path(.path))]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A path string that does not follow the `key` / `key[n]` grammar.
    #[error("invalid path segment `{segment}`: {message}")]
    InvalidPath { segment: String, message: String },
}

impl JsonError {
    pub(crate) fn parse(message: impl Into<String>, fragment: &str) -> Self {
        JsonError::Parse {
            message: message.into(),
            fragment: truncate(fragment.trim()),
        }
    }

    pub(crate) fn mismatch(expected: ValueKind, found: ValueKind) -> Self {
        JsonError::TypeMismatch {
            path: String::new(),
            expected,
            found,
        }
    }

    /// Attach the path being read to a `TypeMismatch` that does not carry one yet.
    pub(crate) fn at_path(self, at: &str) -> Self {
        match self {
            JsonError::TypeMismatch {
                path,
                expected,
                found,
            } if path.is_empty() => JsonError::TypeMismatch {
                path: at.to_string(),
                expected,
                found,
            },
            other => other,
        }
    }
}

fn describe_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at `{path}`")
    }
}

fn truncate(s: &str) -> String {
    match s.char_indices().nth(MAX_FRAGMENT_LEN) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

/// Convenience alias used throughout json-reader.
pub type Result<T> = std::result::Result<T, JsonError>;
