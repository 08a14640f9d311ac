//! Path syntax and resolution.
//!
//! A path is split on a literal delimiter (default `.`) into segments. Each
//! segment is a plain key (`payload`) or a key with one bracket index
//! (`pages[2]`: look up `pages`, then take element 2 of that array).
//!
//! Resolution is deliberately asymmetric:
//!
//! - a plain key asked of something that is not an object stops the walk and
//!   returns the last value reached;
//! - a missing key resolves to null;
//! - an out-of-range bracket index is an error.

use crate::error::{JsonError, Result};
use crate::value::{Value, ValueKind, NULL};

/// Default segment delimiter.
pub const DEFAULT_DELIMITER: &str = ".";

/// One delimiter-separated unit of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'p> {
    pub key: &'p str,
    pub index: Option<usize>,
}

impl<'p> Segment<'p> {
    /// Parse `key` or `key[n]`. A `[` in first position does not start an index.
    fn parse(raw: &'p str) -> Result<Self> {
        let open = match raw.find('[') {
            Some(open) if open > 0 && raw.ends_with(']') => open,
            _ => {
                return Ok(Self {
                    key: raw,
                    index: None,
                })
            }
        };
        let digits = &raw[open + 1..raw.len() - 1];
        let index = digits
            .parse::<usize>()
            .map_err(|_| JsonError::InvalidPath {
                segment: raw.to_string(),
                message: format!("`{digits}` is not a valid array index"),
            })?;
        Ok(Self {
            key: &raw[..open],
            index: Some(index),
        })
    }
}

/// Split `path` on `delimiter` into segments. Trailing empty segments are
/// dropped, so the empty path has no segments and addresses the root.
///
/// ```
/// use json_reader::{parse_path, Segment};
///
/// let segments = parse_path("payload.pages[0].action", ".").unwrap();
/// assert_eq!(segments[1], Segment { key: "pages", index: Some(0) });
/// ```
pub fn parse_path<'p>(path: &'p str, delimiter: &str) -> Result<Vec<Segment<'p>>> {
    if delimiter.is_empty() {
        return Err(JsonError::InvalidPath {
            segment: path.to_string(),
            message: "path delimiter must not be empty".to_string(),
        });
    }
    let mut raw: Vec<&str> = path.split(delimiter).collect();
    while raw.last().is_some_and(|s| s.is_empty()) {
        raw.pop();
    }
    raw.into_iter().map(Segment::parse).collect()
}

/// Resolve `path` against `root`.
///
/// # Errors
///
/// - [`JsonError::Index`] when a bracket index is past the end of its array.
/// - [`JsonError::TypeMismatch`] when a bracketed segment does not land on an
///   array inside an object.
/// - [`JsonError::InvalidPath`] for malformed paths.
///
/// # Examples
///
/// ```
/// use json_reader::{get, parse, Value};
///
/// let root = parse(r#"{"students":[{"name":"A"},{"name":"B"}]}"#).unwrap();
/// assert_eq!(get(&root, "students[1].name", ".").unwrap(), &Value::Text("B".into()));
/// assert!(get(&root, "missing.path", ".").unwrap().is_null());
/// ```
pub fn get<'a>(root: &'a Value, path: &str, delimiter: &str) -> Result<&'a Value> {
    let mut current = root;
    for segment in parse_path(path, delimiter)? {
        match segment.index {
            Some(index) => current = index_into(current, segment, index)?,
            None => match current {
                Value::Object(map) => current = map.get(segment.key).unwrap_or(&NULL),
                // Lenient stop: hand back what was reached.
                _ => break,
            },
        }
    }
    Ok(current)
}

fn index_into<'a>(current: &'a Value, segment: Segment<'_>, index: usize) -> Result<&'a Value> {
    let map = current.as_object().ok_or_else(|| JsonError::TypeMismatch {
        path: segment.key.to_string(),
        expected: ValueKind::Object,
        found: current.kind(),
    })?;
    let target = map.get(segment.key).unwrap_or(&NULL);
    let items = target.as_array().ok_or_else(|| JsonError::TypeMismatch {
        path: segment.key.to_string(),
        expected: ValueKind::Array,
        found: target.kind(),
    })?;
    items.get(index).ok_or_else(|| JsonError::Index {
        key: segment.key.to_string(),
        index,
        len: items.len(),
    })
}
