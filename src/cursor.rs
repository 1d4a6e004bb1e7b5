/// Byte cursor over an in-memory buffer with position snapshot/restore.
///
/// Every grammar rule backtracks through this type: save [`pos`], attempt a
/// parse, and on failure [`set_pos`] back to the saved position so sibling
/// alternatives start from the same place. Backtracking over a slice is just
/// resetting an index, so there is no pushback-buffer depth to worry about.
///
/// [`pos`]: Cursor::pos
/// [`set_pos`]: Cursor::set_pos
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// The current position, usable as a snapshot for [`Cursor::set_pos`].
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Restore a position previously returned by [`Cursor::pos`].
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.input.len());
        self.pos = pos;
    }

    /// Look at the next byte without consuming it. Returns `None` at EOF.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the next byte. Returns `None` at EOF.
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Skip insignificant whitespace (space, tab, newlines, form/vertical feed).
    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if byte.is_ascii_whitespace() || byte == 0x0b {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Skip whitespace, then peek at the first significant byte.
    pub fn peek_after_whitespace(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.peek()
    }

    /// The sole lexical matching primitive: skip leading whitespace, then try
    /// to consume exactly the bytes of `pattern`. On a mismatch at any
    /// position the cursor is restored to its pre-call position (including
    /// the whitespace skip) and `false` is returned; on success the cursor is
    /// left immediately after the matched text.
    pub fn match_token(&mut self, pattern: &str) -> bool {
        let start = self.pos;
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(pattern.as_bytes()) {
            self.pos += pattern.len();
            true
        } else {
            self.pos = start;
            false
        }
    }

    /// True if only whitespace (or nothing) remains.
    pub fn at_end(&mut self) -> bool {
        self.peek_after_whitespace().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_token() {
        let mut cursor = Cursor::new(b"  {  \"key\": 1}");
        assert!(cursor.match_token("{"));
        assert!(!cursor.match_token("}"));
        assert!(cursor.match_token("\""));
        assert_eq!(cursor.bump(), Some(b'k'));
    }

    #[test]
    fn test_match_token_backtracks_fully() {
        let mut cursor = Cursor::new(b"   truthy");
        let start = cursor.pos();
        // "truthy" starts like "true" but diverges; the whitespace skip must
        // be undone too.
        assert!(!cursor.match_token("true "));
        assert_eq!(cursor.pos(), start);
        assert!(cursor.match_token("truthy"));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new(b"[1, 2]");
        let snapshot = cursor.pos();
        assert!(cursor.match_token("["));
        assert_eq!(cursor.peek(), Some(b'1'));
        cursor.set_pos(snapshot);
        assert_eq!(cursor.peek(), Some(b'['));
    }

    #[test]
    fn test_peek_and_bump_at_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.bump(), None);
        assert!(cursor.at_end());
        assert!(!cursor.match_token("x"));
    }
}
