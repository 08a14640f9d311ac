//! # json-reader
//!
//! A small JSON parser that builds an immutable, order-preserving value tree,
//! plus a reader that pulls nested fields out of it with a compact path syntax
//! such as `payload.issue.number` or `payload.pages[0].action`.
//!
//! ## Quick start
//!
//! ```rust
//! use json_reader::{parse, JsonReader};
//!
//! let root = parse(r#"{"repo":{"name":"octo/hello"},"payload":{"pages":[{"action":"edited"}]}}"#).unwrap();
//! let reader = JsonReader::new(&root);
//!
//! assert_eq!(reader.get_str("repo.name").unwrap(), "octo/hello");
//! assert_eq!(reader.get_str("payload.pages[0].action").unwrap(), "edited");
//! assert!(reader.get("payload.missing").unwrap().is_null());
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: text → [`Value`] tree
//! - [`path`]: path grammar and resolution
//! - [`reader`]: [`JsonReader`], typed path queries over a borrowed tree
//! - [`document`]: owned parse result split into per-record readers
//! - [`value`]: the [`Value`] model and checked narrowing
//! - [`error`]: error types

pub mod document;
pub mod error;
pub mod parser;
pub mod path;
pub mod reader;
pub mod value;

pub use document::Document;
pub use error::JsonError;
pub use parser::{parse, parse_with, ParseOptions};
pub use path::{get, parse_path, Segment};
pub use reader::JsonReader;
pub use value::{FromValue, Map, Number, Value, ValueKind};
