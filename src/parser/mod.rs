use crate::{cursor::Cursor, error::ParseError, options::ParseOptions, value::Value};

mod array;
mod literal;
mod number;
mod object;
mod string;
mod value;

/// Parse a whole document: an object or array root, optionally surrounded by
/// whitespace, with nothing after it. Bare scalars are not documents.
pub(crate) fn parse_document(input: &[u8], options: &ParseOptions) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(input);
    let depth = options.max_depth.max(1);

    let root = match cursor.peek_after_whitespace() {
        Some(b'{') => Value::Object(object::parse_object(&mut cursor, options, depth)?),
        Some(b'[') => Value::Array(array::parse_array(&mut cursor, options, depth)?),
        Some(_) => return Err(ParseError::InvalidRoot),
        None => return Err(ParseError::Eof("document")),
    };

    if !cursor.at_end() {
        return Err(ParseError::TrailingCharacters(cursor.pos()));
    }
    Ok(root)
}

/// Parse a single value at the start of the input, leaving any trailing
/// input unconsumed.
pub(crate) fn parse_fragment(input: &[u8], options: &ParseOptions) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(input);
    value::parse_value(&mut cursor, options, options.max_depth.max(1))
}

/// Check that `input` starts with a syntactically complete object or array,
/// using the default (strict) options.
///
/// Leading bytes at or below `0x20` are skipped before dispatching on the
/// opening bracket; trailing input after the complete root is ignored.
///
/// ```
/// assert!(jsonish::validate(r#"{"a": [1, 2]}"#));
/// assert!(!jsonish::validate(r#"{"a": [1, 2}"#));
/// assert!(!jsonish::validate("6"));
/// ```
pub fn validate(input: &str) -> bool {
    validate_with(input, &ParseOptions::default())
}

/// [`validate`] with explicit [`ParseOptions`].
pub fn validate_with(input: &str, options: &ParseOptions) -> bool {
    parse_root(&mut Cursor::new(input.as_bytes()), options).is_ok()
}

/// Shared entry for the validator and the XML conversion gate: trim leading
/// insignificant bytes, then parse an object or array root.
pub(crate) fn parse_root(cursor: &mut Cursor, options: &ParseOptions) -> Result<Value, ParseError> {
    while matches!(cursor.peek(), Some(byte) if byte <= b' ') {
        cursor.bump();
    }
    let depth = options.max_depth.max(1);
    match cursor.peek() {
        Some(b'{') => Ok(Value::Object(object::parse_object(cursor, options, depth)?)),
        Some(b'[') => Ok(Value::Array(array::parse_array(cursor, options, depth)?)),
        _ => Err(ParseError::InvalidRoot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let options = ParseOptions::strict();
        assert!(parse_document(br#"  {"a": 1}  "#, &options).is_ok());
        assert!(parse_document(b" [1, 2] ", &options).is_ok());

        // A bare scalar is not a document.
        assert!(matches!(
            parse_document(b"6", &options),
            Err(ParseError::InvalidRoot)
        ));
        assert!(parse_document(b"6 7", &options).is_err());

        // Trailing garbage after a complete root.
        assert!(matches!(
            parse_document(b"[1] x", &options),
            Err(ParseError::TrailingCharacters(_))
        ));
        assert!(matches!(
            parse_document(b"", &options),
            Err(ParseError::Eof(_))
        ));
    }

    #[test]
    fn test_parse_fragment() {
        let options = ParseOptions::strict();
        assert_eq!(parse_fragment(b"6 7", &options).unwrap(), Value::Number(6.0));
        assert_eq!(
            parse_fragment(b"\"a\" leftover", &options).unwrap(),
            Value::String("a".to_owned())
        );
    }

    #[test]
    fn test_validate() {
        assert!(validate("{}"));
        assert!(validate("\x01\x02 [1]"));
        assert!(!validate(r#"{ "field1 : 6 }"#));
        assert!(!validate("true"));
        assert!(validate_with("[1, 2,]", &ParseOptions::permissive()));
        assert!(!validate("[1, 2,]"));
    }
}
