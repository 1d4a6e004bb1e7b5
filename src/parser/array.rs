use crate::{
    cursor::Cursor, error::ParseError, options::ParseOptions, parser::value::parse_value,
    value::Value,
};

/// Parse an array: `[`, comma-separated values, `]`. Permissive mode
/// tolerates a trailing comma. A malformed element fails the whole array;
/// the partial sequence is dropped and the cursor restored.
pub fn parse_array(
    cursor: &mut Cursor,
    options: &ParseOptions,
    depth: usize,
) -> Result<Vec<Value>, ParseError> {
    let start = cursor.pos();
    if !cursor.match_token("[") {
        return Err(ParseError::expected("'['", cursor.pos()));
    }

    let mut values = Vec::new();
    if cursor.match_token("]") {
        return Ok(values);
    }

    loop {
        let element_start = cursor.pos();
        match parse_value(cursor, options, depth - 1) {
            Ok(value) => values.push(value),
            Err(err) => {
                cursor.set_pos(element_start);
                if options.is_permissive() && cursor.peek_after_whitespace() == Some(b']') {
                    // Trailing comma before `]`.
                    break;
                }
                cursor.set_pos(start);
                return Err(err);
            }
        }

        if !cursor.match_token(",") {
            break;
        }
    }

    if !cursor.match_token("]") {
        let offset = cursor.pos();
        cursor.set_pos(start);
        return Err(ParseError::expected("']'", offset));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str, options: &ParseOptions) -> Result<Vec<Value>, ParseError> {
        let mut cursor = Cursor::new(data.as_bytes());
        parse_array(&mut cursor, options, 100)
    }

    #[test]
    fn test_parse_array() {
        let options = ParseOptions::strict();
        assert!(parse("[]", &options).unwrap().is_empty());
        assert_eq!(
            parse(r#"["abcd", 42, 54.7]"#, &options).unwrap(),
            vec![
                Value::String("abcd".to_owned()),
                Value::Number(42.0),
                Value::Number(54.7),
            ]
        );
    }

    #[test]
    fn test_trailing_comma() {
        let data = "[1, 2,]";
        assert_eq!(
            parse(data, &ParseOptions::permissive()).unwrap(),
            vec![Value::Number(1.0), Value::Number(2.0)]
        );
        assert!(parse(data, &ParseOptions::strict()).is_err());
    }

    #[test]
    fn test_implicit_null_holes() {
        assert_eq!(
            parse("[1,,2]", &ParseOptions::permissive()).unwrap(),
            vec![Value::Number(1.0), Value::Null, Value::Number(2.0)]
        );
        assert!(parse("[1,,2]", &ParseOptions::strict()).is_err());
    }

    #[test]
    fn test_malformed_element_fails_whole_array() {
        let data = "[1, trux, 3]";
        let mut cursor = Cursor::new(data.as_bytes());
        assert!(parse_array(&mut cursor, &ParseOptions::strict(), 100).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_missing_closing_bracket_fails() {
        assert!(parse("[1, 2", &ParseOptions::strict()).is_err());
    }
}
