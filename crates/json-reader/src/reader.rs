//! Path-addressable read access over a parsed tree.

use crate::error::{JsonError, Result};
use crate::path::{get, DEFAULT_DELIMITER};
use crate::value::{FromValue, Map, Value, ValueKind};

/// Borrowing reader that answers path queries against one value tree.
///
/// The reader never copies the tree, so it cannot outlive it.
///
/// ```
/// use json_reader::{parse, JsonReader};
///
/// let root = parse(r#"{"payload":{"issue":{"number":7,"pull_request":{}}}}"#).unwrap();
/// let reader = JsonReader::new(&root);
/// assert_eq!(reader.get_i64("payload.issue.number").unwrap(), 7);
/// assert!(reader.has_key("payload.issue", "pull_request").unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonReader<'a> {
    root: &'a Value,
    delimiter: &'a str,
}

impl<'a> JsonReader<'a> {
    /// Reader using the default `.` delimiter.
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Reader splitting paths on a custom delimiter.
    pub fn with_delimiter(root: &'a Value, delimiter: &'a str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(JsonError::InvalidPath {
                segment: String::new(),
                message: "path delimiter must not be empty".to_string(),
            });
        }
        Ok(Self { root, delimiter })
    }

    /// The tree this reader answers queries against.
    pub fn root(&self) -> &'a Value {
        self.root
    }

    /// The separator paths are split on.
    pub fn delimiter(&self) -> &'a str {
        self.delimiter
    }

    /// Resolve `path`; a missing key yields `Value::Null`.
    pub fn get(&self, path: &str) -> Result<&'a Value> {
        get(self.root, path, self.delimiter)
    }

    /// Resolve `path` and narrow the result to `T`.
    pub fn get_as<T: FromValue<'a>>(&self, path: &str) -> Result<T> {
        self.get(path)?.to::<T>().map_err(|e| e.at_path(path))
    }

    /// Text at `path`.
    pub fn get_str(&self, path: &str) -> Result<&'a str> {
        self.get_as(path)
    }

    /// Integer at `path`.
    pub fn get_i64(&self, path: &str) -> Result<i64> {
        self.get_as(path)
    }

    /// Number at `path`; integers widen to `f64`.
    pub fn get_f64(&self, path: &str) -> Result<f64> {
        self.get_as(path)
    }

    /// Boolean at `path`.
    pub fn get_bool(&self, path: &str) -> Result<bool> {
        self.get_as(path)
    }

    /// Object at `path`.
    pub fn get_object(&self, path: &str) -> Result<&'a Map> {
        self.get_as(path)
    }

    /// Array elements at `path`.
    pub fn get_array(&self, path: &str) -> Result<&'a [Value]> {
        self.get_as(path)
    }

    /// Length of the array at `path`, for iterating with bracket indices.
    pub fn array_len(&self, path: &str) -> Result<usize> {
        self.get_array(path).map(<[Value]>::len)
    }

    /// Whether the object at `path` contains `key`. The value at `path` must
    /// be an object.
    pub fn has_key(&self, path: &str, key: &str) -> Result<bool> {
        let value = self.get(path)?;
        match value.as_object() {
            Some(map) => Ok(map.contains_key(key)),
            None => Err(JsonError::TypeMismatch {
                path: path.to_string(),
                expected: ValueKind::Object,
                found: value.kind(),
            }),
        }
    }
}
