//! # jot-core
//!
//! Pure-Rust lenient JSON parser. One call turns a text buffer into a typed
//! [`Value`] tree and reports how many bytes of the buffer it consumed.
//!
//! The dialect is deliberately looser than strict JSON: commas in lists and
//! objects are optional, duplicate keys overwrite, unterminated strings and
//! containers are closed silently at end of buffer, and trailing bytes after
//! a value are ignored. Failure is a single signal, a consumed length of 0,
//! with no error classification. See [`parser`] for the full contract.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::{parse, Value};
//!
//! let (value, consumed) = parse(r#"{"name":"Alice","scores":[95,87,92]}"#);
//! assert_eq!(consumed, 36);
//! assert_eq!(value.get("name").and_then(Value::as_text), Some("Alice"));
//!
//! // A malformed token anywhere fails the whole enclosing structure.
//! assert_eq!(parse("[1,,]"), (Value::Null, 0));
//! ```
//!
//! Whole-buffer validation goes through [`parse_document`]:
//!
//! ```rust
//! use jot_core::parse_document;
//!
//! assert!(parse_document("[1,2,3]").is_ok());
//! assert!(parse_document("[1,2,3] extra").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the [`Value`] tagged union and its accessor surface
//! - [`scan`]: scalar lexers for numeric and quoted literals
//! - [`parser`]: the recursive-descent structural parser
//! - [`render`]: diagnostic rendering of a tree back to text
//! - [`error`]: error type for the document-level API

pub mod error;
pub mod parser;
pub mod render;
pub mod scan;
pub mod value;

pub use error::ParseError;
pub use parser::{parse, parse_document};
pub use render::{render, render_pretty};
pub use value::Value;
