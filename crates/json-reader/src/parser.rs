//! Recursive-descent JSON parser over substrings.
//!
//! There is no separate tokenizer. Each container is handled by trimming its
//! enclosing delimiters and cutting the body into top-level elements with
//! [`split_top_level`], which is aware of quoted text and nesting. Every
//! element is then parsed recursively as its own span.
//!
//! # Key design decisions
//!
//! - **Depth budget**: each nested object/array costs one level of recursion,
//!   checked against [`ParseOptions::max_depth`] before descending, so hostile
//!   input fails with [`JsonError::DepthExceeded`] instead of overflowing the stack.
//! - **Last-wins keys**: a repeated object key replaces the earlier value in
//!   place (keeping the first position) unless `reject_duplicate_keys` is set.
//! - **Lenient text**: the simple backslash escapes are decoded; `\uXXXX` is
//!   left as written.

use crate::error::{JsonError, Result};
use crate::value::{Map, Number, Value};

/// Default nesting limit, matching what most JSON libraries allow.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed nesting of objects and arrays. The outermost container
    /// counts as depth 1.
    pub max_depth: usize,
    /// Fail on a repeated object key instead of letting the last one win.
    pub reject_duplicate_keys: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_duplicate_keys: false,
        }
    }
}

/// Parse JSON text into a [`Value`] tree using default options.
///
/// # Examples
///
/// ```
/// use json_reader::{parse, Number, Value};
///
/// let value = parse(r#"{"name":"Tommy","age":30}"#).unwrap();
/// let map = value.as_object().unwrap();
/// assert_eq!(map["name"], Value::Text("Tommy".into()));
/// assert_eq!(map["age"], Value::Number(Number::Integer(30)));
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ParseOptions::default())
}

/// Parse JSON text into a [`Value`] tree with explicit options.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value> {
    Parser { options }.parse_value(text, 0)
}

struct Parser<'o> {
    options: &'o ParseOptions,
}

impl Parser<'_> {
    /// Dispatch on the first significant character of the span.
    fn parse_value(&self, span: &str, depth: usize) -> Result<Value> {
        let s = span.trim();
        match s.as_bytes().first() {
            None => Err(JsonError::parse("expected a value", span)),
            Some(b'{') => self.parse_object(s, self.descend(depth)?),
            Some(b'[') => self.parse_array(s, self.descend(depth)?),
            Some(b'"') => parse_text(s).map(Value::Text),
            _ => parse_literal(s),
        }
    }

    fn descend(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        if next > self.options.max_depth {
            return Err(JsonError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(next)
    }

    fn parse_object(&self, s: &str, depth: usize) -> Result<Value> {
        let body = s
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| JsonError::parse("object is missing its closing '}'", s))?;

        let mut map = Map::new();
        for pair in split_top_level(body) {
            let colon = find_unquoted(pair, b':')
                .ok_or_else(|| JsonError::parse("key-value pair is missing ':'", pair))?;
            let key = parse_key(&pair[..colon])?;
            let value = self.parse_value(&pair[colon + 1..], depth)?;
            if map.insert(key.clone(), value).is_some() && self.options.reject_duplicate_keys {
                return Err(JsonError::parse(format!("duplicate key `{key}`"), pair));
            }
        }
        Ok(Value::Object(map))
    }

    fn parse_array(&self, s: &str, depth: usize) -> Result<Value> {
        let body = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| JsonError::parse("array is missing its closing ']'", s))?;

        split_top_level(body)
            .into_iter()
            .map(|item| self.parse_value(item, depth))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

/// Split a container body on commas that sit outside quoted text and outside
/// any nested `{}`/`[]`. Elements are trimmed. A blank trailing element is
/// dropped, so an empty body yields nothing.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut level: i64 = 0;
    let mut in_text = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, b) in body.bytes().enumerate() {
        if in_text {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_text = false;
            }
            continue;
        }
        match b {
            b'"' => in_text = true,
            b'{' | b'[' => level += 1,
            b'}' | b']' => level -= 1,
            b',' if level == 0 => {
                parts.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = body[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

/// Byte offset of the first `needle` outside quoted text.
fn find_unquoted(s: &str, needle: u8) -> Option<usize> {
    let mut in_text = false;
    let mut escaped = false;
    for (i, b) in s.bytes().enumerate() {
        if in_text {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_text = false;
            }
        } else if b == b'"' {
            in_text = true;
        } else if b == needle {
            return Some(i);
        }
    }
    None
}

/// Object keys may be quoted or bare.
fn parse_key(span: &str) -> Result<String> {
    let key = span.trim();
    if key.starts_with('"') {
        parse_text(key)
    } else {
        Ok(key.to_string())
    }
}

/// Parse a quoted text literal. The closing quote must end the span.
fn parse_text(s: &str) -> Result<String> {
    let end = find_closing_quote(s, 1)
        .ok_or_else(|| JsonError::parse("unterminated text literal", s))?;
    if end + 1 != s.len() {
        return Err(JsonError::parse("unexpected characters after text literal", s));
    }
    Ok(unescape(&s[1..end]))
}

/// Position of the closing quote, skipping escaped characters.
fn find_closing_quote(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// `null`, `true`, `false`, or a number; anything else is rejected.
fn parse_literal(s: &str) -> Result<Value> {
    match s {
        "null" => Ok(Value::Null),
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => parse_number(s).map(Value::Number),
    }
}

/// Accepts `-? digit+ ( . digit+ )? ( [eE] [+-]? digit+ )?`. A fraction or
/// exponent makes the literal a float; otherwise it must fit an `i64`.
fn parse_number(s: &str) -> Result<Number> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut is_float = false;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_end = skip_digits(bytes, i);
    if int_end == i {
        return Err(JsonError::parse("unrecognized literal", s));
    }
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = skip_digits(bytes, i + 1);
        if frac_end == i + 1 {
            return Err(JsonError::parse("missing digits after decimal point", s));
        }
        i = frac_end;
        is_float = true;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_end = skip_digits(bytes, i);
        if exp_end == i {
            return Err(JsonError::parse("missing digits in exponent", s));
        }
        i = exp_end;
        is_float = true;
    }

    if i != bytes.len() {
        return Err(JsonError::parse("unrecognized literal", s));
    }

    if is_float {
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(JsonError::parse("float literal out of range", s)),
        }
    } else {
        s.parse::<i64>()
            .map(Number::Integer)
            .map_err(|_| JsonError::parse("integer literal out of range", s))
    }
}

fn skip_digits(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}
