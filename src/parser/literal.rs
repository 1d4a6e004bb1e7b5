use crate::{cursor::Cursor, error::ParseError, options::ParseOptions};

/// Exact keyword match against `true` or `false`.
pub fn parse_bool(cursor: &mut Cursor) -> Result<bool, ParseError> {
    if cursor.match_token("true") {
        Ok(true)
    } else if cursor.match_token("false") {
        Ok(false)
    } else {
        Err(ParseError::expected("boolean", cursor.pos()))
    }
}

/// Exact keyword match against `null`. In permissive mode a `,` immediately
/// ahead also counts as an implicit null, which is what turns `[1,,2]`-style
/// holes into `null` elements.
pub fn parse_null(cursor: &mut Cursor, options: &ParseOptions) -> Result<(), ParseError> {
    if cursor.match_token("null") {
        return Ok(());
    }
    let start = cursor.pos();
    if options.is_permissive() && cursor.peek_after_whitespace() == Some(b',') {
        return Ok(());
    }
    cursor.set_pos(start);
    Err(ParseError::expected("null", start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        let mut cursor = Cursor::new(b" true");
        assert_eq!(parse_bool(&mut cursor).unwrap(), true);
        assert!(cursor.at_end());

        let mut cursor = Cursor::new(b"false!");
        assert_eq!(parse_bool(&mut cursor).unwrap(), false);
        assert_eq!(cursor.peek(), Some(b'!'));

        let mut cursor = Cursor::new(b"truthy");
        assert!(parse_bool(&mut cursor).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_parse_null() {
        let mut cursor = Cursor::new(b"null");
        assert!(parse_null(&mut cursor, &ParseOptions::strict()).is_ok());

        let mut cursor = Cursor::new(b", 2]");
        assert!(parse_null(&mut cursor, &ParseOptions::permissive()).is_ok());
        assert_eq!(cursor.peek(), Some(b','));

        let mut cursor = Cursor::new(b", 2]");
        assert!(parse_null(&mut cursor, &ParseOptions::strict()).is_err());
        assert_eq!(cursor.pos(), 0);
    }
}
