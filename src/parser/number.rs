use crate::{cursor::Cursor, error::ParseError};

/// Parse a number literal by scanning the longest plausible float lexeme and
/// delegating to [`f64::from_str`], which accepts a leading `+` or `-`, a
/// decimal point, and an exponent. On failure the cursor is restored.
pub fn parse_number(cursor: &mut Cursor) -> Result<f64, ParseError> {
    let start = cursor.pos();
    cursor.skip_whitespace();

    let mut lexeme = String::new();
    while let Some(byte) = cursor.peek() {
        if byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E') {
            lexeme.push(byte as char);
            cursor.bump();
        } else {
            break;
        }
    }

    match lexeme.parse() {
        Ok(number) => Ok(number),
        Err(_) => {
            let offset = cursor.pos();
            cursor.set_pos(start);
            Err(ParseError::expected("number", offset))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Result<f64, ParseError> {
        let mut cursor = Cursor::new(data.as_bytes());
        parse_number(&mut cursor)
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse("6").unwrap(), 6.0);
        assert_eq!(parse("+6").unwrap(), 6.0);
        assert_eq!(parse("-6").unwrap(), -6.0);
        assert_eq!(parse("54.7").unwrap(), 54.7);
        assert_eq!(parse("  2.5e3").unwrap(), 2500.0);
        assert_eq!(parse(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_stops_at_delimiter() {
        let mut cursor = Cursor::new(b"42, 43]");
        assert_eq!(parse_number(&mut cursor).unwrap(), 42.0);
        assert_eq!(cursor.peek(), Some(b','));
    }

    #[test]
    fn test_failure_restores_cursor() {
        for data in ["true", "", "- ", "e4"] {
            let mut cursor = Cursor::new(data.as_bytes());
            assert!(parse_number(&mut cursor).is_err(), "parsed {data:?}");
            assert_eq!(cursor.pos(), 0);
        }
    }
}
