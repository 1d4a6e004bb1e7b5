#[cfg(feature = "serde")]
pub mod serde;

use std::{
    fmt::{self, Display, Write},
    io::Read,
    mem,
    str::FromStr,
};

use indexmap::IndexMap;

use crate::{
    error::ParseError,
    index::Index,
    options::ParseOptions,
    parser,
    serialize::{write_value, xml::XmlFormat, xml::value_to_xml},
};

/// Represents any valid JSON value.
///
/// Objects preserve key insertion order; duplicate keys during parsing keep
/// the first occurrence's position but the last occurrence's value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(IndexMap<String, Value>),
    Array(Vec<Value>),
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_writer(f)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    /// Deserialize a [`Value`] from a JSON document in strict mode. The root
    /// must be an object or array and nothing may follow it.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let data = Value::from_str("[1.0, true, null]").unwrap();
    /// assert_eq!(data, Value::Array(vec![Value::Number(1.0), Value::Bool(true), Value::Null]))
    /// ```
    ///
    /// # Errors
    ///
    /// This function can fail if the string is not a valid JSON document.
    fn from_str(string: &str) -> Result<Self, ParseError> {
        Self::from_slice(string.as_bytes())
    }
}

impl Value {
    /// Deserialize a [`Value`] from a JSON document string with explicit
    /// [`ParseOptions`].
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonish::{ParseOptions, Value};
    /// #
    /// let options = ParseOptions::permissive();
    /// let data = Value::from_str_with("{'a': 1,}", &options).unwrap();
    /// assert_eq!(data["a"], Value::Number(1.0));
    /// ```
    ///
    /// # Errors
    ///
    /// This function can fail if the string is not a valid document under the
    /// given options.
    pub fn from_str_with(string: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Self::from_slice_with(string.as_bytes(), options)
    }

    /// Deserialize a [`Value`] from a slice of JSON bytes in strict mode.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonish::Value;
    /// #
    /// let data = Value::from_slice(b"[1.0, true, null]").unwrap();
    /// assert_eq!(data, Value::Array(vec![Value::Number(1.0), Value::Bool(true), Value::Null]))
    /// ```
    ///
    /// # Errors
    ///
    /// This function can fail if the byte slice is not a valid JSON document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        Self::from_slice_with(bytes, &ParseOptions::default())
    }

    /// [`Value::from_slice`] with explicit [`ParseOptions`].
    pub fn from_slice_with(bytes: &[u8], options: &ParseOptions) -> Result<Self, ParseError> {
        parser::parse_document(bytes, options)
    }

    /// Deserialize a [`Value`] from an I/O stream of JSON in strict mode.
    ///
    /// The stream is read to memory up front; parsing itself does no I/O.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonish::Value;
    /// #
    /// use std::fs::File;
    ///
    /// fn main() {
    /// # }
    /// # fn fake_main() {
    ///     let value = Value::from_reader(File::open("data.json").unwrap()).unwrap();
    ///     println!("{value}");
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// This function can fail if the stream is not valid JSON, or if any
    /// errors were encountered while reading from it.
    pub fn from_reader(reader: impl Read) -> Result<Self, ParseError> {
        Self::from_reader_with(reader, &ParseOptions::default())
    }

    /// [`Value::from_reader`] with explicit [`ParseOptions`].
    pub fn from_reader_with(
        mut reader: impl Read,
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_slice_with(&bytes, options)
    }

    /// Parse a single value at the start of `string`, leaving any trailing
    /// input unconsumed. Unlike a document parse the root may be any value.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonish::{ParseOptions, Value};
    /// #
    /// let options = ParseOptions::strict();
    /// assert_eq!(Value::fragment_from_str("6 7", &options).unwrap(), Value::Number(6.0));
    /// assert!(Value::from_str_with("6 7", &options).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// This function can fail if no valid value starts the input.
    pub fn fragment_from_str(string: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Self::fragment_from_slice(string.as_bytes(), options)
    }

    /// [`Value::fragment_from_str`] for a byte slice.
    pub fn fragment_from_slice(bytes: &[u8], options: &ParseOptions) -> Result<Self, ParseError> {
        parser::parse_fragment(bytes, options)
    }

    /// Serialize a [`Value`] as JSON text using the given writer.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let value_string = r#"{"vec": [1, true, false, null]}"#;
    /// let value = Value::from_str(value_string).unwrap();
    ///
    /// let mut writer = String::new();
    /// value.to_writer(&mut writer).unwrap();
    /// assert_eq!(writer, value_string);
    /// ```
    ///
    /// This is also the function used by `Value`'s display implementation:
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let value_string = r#"{"escaped": "a\tb"}"#;
    /// let value = Value::from_str(value_string).unwrap();
    ///
    /// assert_eq!(value.to_string(), value_string);
    /// ```
    pub fn to_writer<W: Write>(&self, writer: &mut W) -> fmt::Result {
        write_value(self, writer)
    }

    /// Render this value as an XML document in the given dialect: the
    /// `<?xml?>` header line followed by one root element.
    ///
    /// ```
    /// # use jsonish::{Value, XmlFormat};
    /// # use std::str::FromStr;
    /// #
    /// let value = Value::from_str(r#"{"a": true}"#).unwrap();
    /// let xml = value.to_xml(XmlFormat::Jxml);
    /// assert!(xml.contains(r#"<j son="b:a">true</j>"#));
    /// ```
    pub fn to_xml(&self, format: XmlFormat) -> String {
        value_to_xml(self, format)
    }

    /// Return a string description of the `Value`.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let value = Value::from_str(r#"{"a": 2, "b": false}"#).unwrap();
    /// assert_eq!(value.value_type(), "object");
    /// assert_eq!(value["a"].value_type(), "number");
    /// assert_eq!(value["b"].value_type(), "boolean");
    /// ```
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Index into a JSON array or object. A string index can be used to
    /// access a value in an object, and a usize index can be used to access
    /// an element of an array.
    ///
    /// Returns `None` if the type of `self` does not match the type of the
    /// index, for example if the index is a string and `self` is an array or
    /// a number. Also returns `None` if the given key does not exist in the
    /// object or the given index is not within the bounds of the array.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let object = Value::from_str(r#"{ "A": 65, "B": 66, "C": 67 }"#).unwrap();
    /// assert_eq!(*object.get("A").unwrap(), Value::Number(65.0));
    ///
    /// let array = Value::from_str(r#"[ "A", "B", "C" ]"#).unwrap();
    /// assert_eq!(*array.get(2).unwrap(), Value::String("C".into()));
    ///
    /// assert_eq!(array.get("A"), None);
    /// ```
    ///
    /// Square brackets can also be used to index into a value in a more
    /// concise way. This returns `Value::Null` in cases where `get` would
    /// have returned `None`.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let object = Value::from_str(r#"{
    ///     "A": ["a", "b"],
    ///     "B": ["x", "y", "z"]
    /// }"#).unwrap();
    /// assert_eq!(object["B"][0], Value::String("x".into()));
    ///
    /// assert_eq!(object["D"], Value::Null);
    /// assert_eq!(object[0]["x"]["y"]["z"], Value::Null);
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Option<&Self> {
        index.index_into(self)
    }

    /// Mutably index into a JSON array or object. A string index can be used
    /// to access a value in an object, and a usize index can be used to
    /// access an element of an array.
    ///
    /// Returns `None` if the type of `self` does not match the type of the
    /// index. Also returns `None` if the given key does not exist in the
    /// object or the given index is not within the bounds of the array.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut object = Value::from_str(r#"{ "A": 65, "B": 66 }"#).unwrap();
    /// *object.get_mut("A").unwrap() = Value::Number(69.0);
    ///
    /// let mut array = Value::from_str(r#"[ "A", "B", "C" ]"#).unwrap();
    /// *array.get_mut(2).unwrap() = Value::String("D".into());
    /// ```
    pub fn get_mut<I: Index>(&mut self, index: I) -> Option<&mut Self> {
        index.index_into_mut(self)
    }

    /// Returns true if the `Value` is an Object. Returns false otherwise.
    ///
    /// For any Value on which `is_object` returns true, `as_object` and
    /// `as_object_mut` are guaranteed to return the map representing the
    /// object.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let obj = Value::from_str(r#"{ "a": { "nested": true }, "b": ["an", "array"] }"#).unwrap();
    ///
    /// assert!(obj.is_object());
    /// assert!(obj["a"].is_object());
    ///
    /// // array, not an object
    /// assert!(!obj["b"].is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        self.as_object().is_some()
    }

    /// If the `Value` is an Object, returns the associated map. Returns None
    /// otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": { "nested": true }, "b": ["an", "array"] }"#).unwrap();
    ///
    /// // The length of `{"nested": true}` is 1 entry.
    /// assert_eq!(v["a"].as_object().unwrap().len(), 1);
    ///
    /// // The array `["an", "array"]` is not an object.
    /// assert_eq!(v["b"].as_object(), None);
    /// ```
    pub fn as_object(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// If the `Value` is an Object, returns the associated mutable map.
    /// Returns None otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut v = Value::from_str(r#"{ "a": { "nested": true } }"#).unwrap();
    ///
    /// v["a"].as_object_mut().unwrap().clear();
    /// assert_eq!(v, Value::from_str(r#"{ "a": {} }"#).unwrap());
    /// ```
    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, Self>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true if the `Value` is an Array. Returns false otherwise.
    ///
    /// For any Value on which `is_array` returns true, `as_array` and
    /// `as_array_mut` are guaranteed to return the vector representing the
    /// array.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let obj = Value::from_str(r#"{ "a": ["an", "array"], "b": { "an": "object" } }"#).unwrap();
    ///
    /// assert!(obj["a"].is_array());
    ///
    /// // an object, not an array
    /// assert!(!obj["b"].is_array());
    /// ```
    pub fn is_array(&self) -> bool {
        self.as_array().is_some()
    }

    /// If the `Value` is an Array, returns the associated vector. Returns
    /// None otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": ["an", "array"], "b": { "an": "object" } }"#).unwrap();
    ///
    /// // The length of `["an", "array"]` is 2 elements.
    /// assert_eq!(v["a"].as_array().unwrap().len(), 2);
    ///
    /// // The object `{"an": "object"}` is not an array.
    /// assert_eq!(v["b"].as_array(), None);
    /// ```
    pub fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the `Value` is an Array, returns the associated mutable vector.
    /// Returns None otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut v = Value::from_str(r#"{ "a": ["an", "array"] }"#).unwrap();
    ///
    /// v["a"].as_array_mut().unwrap().clear();
    /// assert_eq!(v, Value::from_str(r#"{ "a": [] }"#).unwrap());
    /// ```
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Array(list) => Some(list),
            _ => None,
        }
    }

    /// Returns true if the `Value` is a String. Returns false otherwise.
    ///
    /// For any Value on which `is_string` returns true, `as_str` is
    /// guaranteed to return the string slice.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": "some string", "b": false }"#).unwrap();
    ///
    /// assert!(v["a"].is_string());
    ///
    /// // The boolean `false` is not a string.
    /// assert!(!v["b"].is_string());
    /// ```
    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    /// If the `Value` is a String, returns the associated str. Returns None
    /// otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": "some string", "b": false }"#).unwrap();
    ///
    /// assert_eq!(v["a"].as_str(), Some("some string"));
    ///
    /// // The boolean `false` is not a string.
    /// assert_eq!(v["b"].as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if the `Value` is a Number. Returns false otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": 1, "b": "2" }"#).unwrap();
    ///
    /// assert!(v["a"].is_number());
    ///
    /// // The string `"2"` is a string, not a number.
    /// assert!(!v["b"].is_number());
    /// ```
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// If the `Value` is a Number, returns the associated double. Returns
    /// None otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": 1, "b": "2" }"#).unwrap();
    ///
    /// assert_eq!(v["a"].as_number(), Some(&1.0));
    ///
    /// // The string `"2"` is not a number.
    /// assert_eq!(v["b"].as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<&f64> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns true if the `Value` is a Boolean. Returns false otherwise.
    ///
    /// For any Value on which `is_boolean` returns true, `as_bool` is
    /// guaranteed to return the boolean value.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": false, "b": "false" }"#).unwrap();
    ///
    /// assert!(v["a"].is_boolean());
    ///
    /// // The string `"false"` is a string, not a boolean.
    /// assert!(!v["b"].is_boolean());
    /// ```
    pub fn is_boolean(&self) -> bool {
        self.as_bool().is_some()
    }

    /// If the `Value` is a Boolean, returns the associated bool. Returns
    /// None otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": false, "b": "false" }"#).unwrap();
    ///
    /// assert_eq!(v["a"].as_bool(), Some(false));
    ///
    /// // The string `"false"` is a string, not a boolean.
    /// assert_eq!(v["b"].as_bool(), None);
    /// ```
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns true if the `Value` is a Null. Returns false otherwise.
    ///
    /// For any Value on which `is_null` returns true, `as_null` is
    /// guaranteed to return `Some(())`.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": null, "b": false }"#).unwrap();
    ///
    /// assert!(v["a"].is_null());
    ///
    /// // The boolean `false` is not null.
    /// assert!(!v["b"].is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        self.as_null().is_some()
    }

    /// If the `Value` is a Null, returns (). Returns None otherwise.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": null, "b": false }"#).unwrap();
    ///
    /// assert_eq!(v["a"].as_null(), Some(()));
    ///
    /// // The boolean `false` is not null.
    /// assert_eq!(v["b"].as_null(), None);
    /// ```
    pub fn as_null(&self) -> Option<()> {
        match *self {
            Self::Null => Some(()),
            _ => None,
        }
    }

    /// Takes the value out of the `Value`, leaving a `Null` in its place.
    ///
    /// ```
    /// # use jsonish::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut v = Value::from_str(r#"{ "x": "y" }"#).unwrap();
    /// assert_eq!(v["x"].take(), Value::String("y".into()));
    /// assert_eq!(v, Value::from_str(r#"{ "x": null }"#).unwrap());
    /// ```
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Bool(boolean)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(string.to_owned())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(string)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Object(map)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}
