use crate::{
    cursor::Cursor,
    error::ParseError,
    options::ParseOptions,
    parser::{
        array::parse_array, literal::parse_bool, literal::parse_null, number::parse_number,
        object::parse_object, string::parse_string,
    },
    value::Value,
};

/// Parse a single value, trying each alternative in a fixed priority order:
/// string, number, boolean, null, then array if the next significant byte is
/// `[`, otherwise object. Every failed alternative restores the cursor before
/// the next one is tried, so the ordering cannot corrupt later attempts.
pub fn parse_value(
    cursor: &mut Cursor,
    options: &ParseOptions,
    depth: usize,
) -> Result<Value, ParseError> {
    if depth == 0 {
        return Err(ParseError::TooDeep(options.max_depth));
    }

    let start = cursor.pos();

    if let Ok(string) = parse_string(cursor, options) {
        return Ok(Value::String(string));
    }
    cursor.set_pos(start);

    if let Ok(number) = parse_number(cursor) {
        return Ok(Value::Number(number));
    }
    cursor.set_pos(start);

    if let Ok(boolean) = parse_bool(cursor) {
        return Ok(Value::Bool(boolean));
    }
    cursor.set_pos(start);

    if parse_null(cursor, options).is_ok() {
        return Ok(Value::Null);
    }
    cursor.set_pos(start);

    if cursor.peek_after_whitespace() == Some(b'[') {
        cursor.set_pos(start);
        return match parse_array(cursor, options, depth) {
            Ok(values) => Ok(Value::Array(values)),
            Err(err) => {
                cursor.set_pos(start);
                Err(err)
            }
        };
    }
    cursor.set_pos(start);

    match parse_object(cursor, options, depth) {
        Ok(map) => Ok(Value::Object(map)),
        Err(err) => {
            cursor.set_pos(start);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str, options: &ParseOptions) -> Result<Value, ParseError> {
        let mut cursor = Cursor::new(data.as_bytes());
        parse_value(&mut cursor, options, options.max_depth)
    }

    #[test]
    fn test_alternative_order() {
        let options = ParseOptions::strict();
        assert_eq!(parse("\"6\"", &options).unwrap(), Value::String("6".to_owned()));
        assert_eq!(parse("6", &options).unwrap(), Value::Number(6.0));
        assert_eq!(parse("true", &options).unwrap(), Value::Bool(true));
        assert_eq!(parse("null", &options).unwrap(), Value::Null);
        assert_eq!(parse("[6]", &options).unwrap(), Value::Array(vec![Value::Number(6.0)]));
        assert!(parse(r#"{"a": 6}"#, &options).unwrap().is_object());
    }

    #[test]
    fn test_leftover_input_is_left_unconsumed() {
        let mut cursor = Cursor::new(b"6 7");
        let options = ParseOptions::strict();
        assert_eq!(
            parse_value(&mut cursor, &options, options.max_depth).unwrap(),
            Value::Number(6.0)
        );
        assert!(!cursor.at_end());
    }

    #[test]
    fn test_failure_restores_cursor() {
        let mut cursor = Cursor::new(b"garbage");
        let options = ParseOptions::strict();
        assert!(parse_value(&mut cursor, &options, options.max_depth).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_depth_limit() {
        let deep = "[".repeat(200) + &"]".repeat(200);
        let options = ParseOptions::strict();
        assert!(matches!(
            parse(&deep, &options),
            Err(ParseError::TooDeep(_))
        ));

        let shallow = "[".repeat(20) + &"]".repeat(20);
        assert!(parse(&shallow, &options).is_ok());
    }
}
