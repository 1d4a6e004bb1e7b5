use crate::{cursor::Cursor, error::ParseError, options::ParseOptions};

/// Parse a string literal. Strict mode requires `"` as the delimiter;
/// permissive mode also accepts `'`. The closing delimiter must match the
/// opening one. On failure the cursor is restored to its pre-call position.
pub fn parse_string(cursor: &mut Cursor, options: &ParseOptions) -> Result<String, ParseError> {
    let start = cursor.pos();
    let delimiter = if cursor.match_token("\"") {
        b'"'
    } else if options.is_permissive() && cursor.match_token("'") {
        b'\''
    } else {
        return Err(ParseError::expected("string", cursor.pos()));
    };

    let mut bytes = Vec::new();
    loop {
        let Some(byte) = cursor.bump() else {
            cursor.set_pos(start);
            return Err(ParseError::UnclosedString(start));
        };
        if byte == delimiter {
            break;
        }
        if byte != b'\\' {
            bytes.push(byte);
            continue;
        }

        let Some(escaped) = cursor.bump() else {
            cursor.set_pos(start);
            return Err(ParseError::UnclosedString(start));
        };
        match escaped {
            b'\\' => bytes.push(b'\\'),
            b'/' => bytes.push(b'/'),
            b'b' => bytes.push(0x8),
            b'f' => bytes.push(0xc),
            b'n' => bytes.push(b'\n'),
            b'r' => bytes.push(b'\r'),
            b't' => bytes.push(b'\t'),
            b'u' => decode_unicode_escape(cursor, &mut bytes),
            escaped if escaped == delimiter => bytes.push(escaped),
            // Unrecognized escapes pass through as two literal characters.
            escaped => {
                bytes.push(b'\\');
                bytes.push(escaped);
            }
        }
    }

    match String::from_utf8(bytes) {
        Ok(string) => Ok(string),
        Err(err) => {
            cursor.set_pos(start);
            Err(err.into())
        }
    }
}

/// Decode the `XXXX` following a `\u`. A malformed escape is passed through
/// literally; a surrogate half with no valid partner becomes U+FFFD.
fn decode_unicode_escape(cursor: &mut Cursor, bytes: &mut Vec<u8>) {
    let Some(unit) = hex4(cursor) else {
        bytes.extend_from_slice(b"\\u");
        return;
    };

    let code_point = match unit {
        // High surrogate: look for a low surrogate escape right after. No
        // whitespace skipping here, this is string content.
        0xd800..=0xdbff => {
            let snapshot = cursor.pos();
            let low = if cursor.bump() == Some(b'\\') && cursor.bump() == Some(b'u') {
                hex4(cursor).filter(|low| (0xdc00..=0xdfff).contains(low))
            } else {
                None
            };
            match low {
                Some(low) => {
                    0x10000 + ((u32::from(unit) - 0xd800) << 10) + (u32::from(low) - 0xdc00)
                }
                None => {
                    cursor.set_pos(snapshot);
                    0xfffd
                }
            }
        }
        // Lone low surrogate.
        0xdc00..=0xdfff => 0xfffd,
        unit => u32::from(unit),
    };

    let c = char::from_u32(code_point).unwrap_or('\u{fffd}');
    let mut buffer = [0; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
}

/// Read exactly four hex digits. Restores the cursor and returns `None` if
/// anything else is found.
fn hex4(cursor: &mut Cursor) -> Option<u16> {
    let snapshot = cursor.pos();
    let mut value: u16 = 0;
    for _ in 0..4 {
        let Some(digit) = cursor.bump().and_then(|byte| (byte as char).to_digit(16)) else {
            cursor.set_pos(snapshot);
            return None;
        };
        value = value << 4 | digit as u16;
    }
    Some(value)
}
