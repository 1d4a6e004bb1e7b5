use indexmap::IndexMap;

use crate::{
    cursor::Cursor, error::ParseError, options::ParseOptions, parser::string::parse_string,
    parser::value::parse_value, value::Value,
};

/// Parse an object: `{`, then `key: value` pairs separated by commas, then
/// `}`. Duplicate keys overwrite (last write wins) while the first
/// occurrence's position is kept. Permissive mode tolerates a trailing comma.
/// Any mid-pair failure fails the whole object; the partial map is dropped
/// and the cursor restored.
pub fn parse_object(
    cursor: &mut Cursor,
    options: &ParseOptions,
    depth: usize,
) -> Result<IndexMap<String, Value>, ParseError> {
    let start = cursor.pos();
    if !cursor.match_token("{") {
        return Err(ParseError::expected("'{'", cursor.pos()));
    }

    let mut map = IndexMap::new();
    if cursor.match_token("}") {
        return Ok(map);
    }

    loop {
        let pair_start = cursor.pos();
        let key = match parse_string(cursor, options) {
            Ok(key) => key,
            Err(err) => {
                cursor.set_pos(pair_start);
                if options.is_permissive() && cursor.peek_after_whitespace() == Some(b'}') {
                    // Trailing comma before `}`.
                    break;
                }
                cursor.set_pos(start);
                return Err(err);
            }
        };

        if !cursor.match_token(":") {
            let offset = cursor.pos();
            cursor.set_pos(start);
            return Err(ParseError::expected("':'", offset));
        }

        match parse_value(cursor, options, depth - 1) {
            Ok(value) => {
                map.insert(key, value);
            }
            Err(err) => {
                cursor.set_pos(start);
                return Err(err);
            }
        }

        if !cursor.match_token(",") {
            break;
        }
    }

    if !cursor.match_token("}") {
        let offset = cursor.pos();
        cursor.set_pos(start);
        return Err(ParseError::expected("'}'", offset));
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str, options: &ParseOptions) -> Result<IndexMap<String, Value>, ParseError> {
        let mut cursor = Cursor::new(data.as_bytes());
        parse_object(&mut cursor, options, 100)
    }

    #[test]
    fn test_parse_object() {
        let options = ParseOptions::strict();
        assert!(parse("{}", &options).unwrap().is_empty());
        assert!(parse("  {  }  ", &options).unwrap().is_empty());

        let map = parse(r#"{ "field1" : 6 }"#, &options).unwrap();
        assert_eq!(map["field1"], Value::Number(6.0));

        let map = parse(r#"{"a": 1, "b": false}"#, &options).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], Value::Bool(false));
    }

    #[test]
    fn test_missing_closing_quote_fails() {
        // The key never terminates, so the whole object fails and nothing of
        // the partial map is observable.
        let options = ParseOptions::strict();
        let data = r#"{ "field1 : 6 }"#;
        let mut cursor = Cursor::new(data.as_bytes());
        assert!(parse_object(&mut cursor, &options, 100).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_missing_colon_fails() {
        assert!(parse(r#"{"a" 1}"#, &ParseOptions::strict()).is_err());
        assert!(parse(r#"{"a" 1}"#, &ParseOptions::permissive()).is_err());
    }

    #[test]
    fn test_trailing_comma() {
        let data = r#"{"a": 1,}"#;
        let map = parse(data, &ParseOptions::permissive()).unwrap();
        assert_eq!(map.len(), 1);
        assert!(parse(data, &ParseOptions::strict()).is_err());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let map = parse(r#"{"a": 1, "b": 2, "a": 3}"#, &ParseOptions::strict()).unwrap();
        assert_eq!(map["a"], Value::Number(3.0));
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec![&"a".to_owned(), &"b".to_owned()]
        );
    }

    #[test]
    fn test_key_order_preserved() {
        let map = parse(r#"{"z": 1, "a": 2, "m": 3}"#, &ParseOptions::strict()).unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
