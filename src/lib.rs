//! A small, self-contained JSON parser and serializer.
//!
//! Text is parsed by recursive descent over an in-memory byte cursor with
//! full backtracking, producing a [`Value`] tree that owns all of its
//! content. The tree serializes back to canonical JSON, or to one of three
//! XML dialects ([`XmlFormat`]).
//!
//! Parsing is configured through [`ParseOptions`]: strict mode is the JSON
//! grammar, permissive mode additionally accepts single-quoted strings,
//! trailing commas, and implicit-null array holes.
//!
//! ```
//! use jsonish::Value;
//! use std::str::FromStr;
//!
//! let value = Value::from_str(r#"{"foo": 1, "data": ["abcd", 42]}"#).unwrap();
//! assert_eq!(value["foo"], Value::Number(1.0));
//! assert_eq!(value["data"][0].as_str(), Some("abcd"));
//! assert_eq!(value.to_string(), r#"{"foo": 1, "data": ["abcd", 42]}"#);
//! ```

mod cursor;
mod error;
mod index;
mod options;
mod parser;
mod serialize;
mod value;


pub use error::ParseError;
pub use index::Index;
pub use options::{Mode, ParseOptions};
pub use parser::{validate, validate_with};
pub use serialize::xml::{XML_HEADER, XmlFormat, xml_from_str, xml_from_str_with};
pub use value::Value;
