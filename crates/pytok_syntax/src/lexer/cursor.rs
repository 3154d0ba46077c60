//! Character cursor over a single physical line.
//!
//! The cursor lives for one line only; the driver builds a fresh one for every line it reads.

/// Lookahead ran past the end of the line.
///
/// Carries whatever characters were still available so callers can inspect a partial peek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidPeek<'c> {
    pub available: &'c [char],
}

/// Cursor over the characters of one physical line with single-step pushback.
#[derive(Debug)]
pub(crate) struct LineCursor {
    chars: Vec<char>,
    pos: usize,
}

impl LineCursor {
    pub fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    /// Consume the next character, or `None` at end of line.
    pub fn read(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    /// Push back the most recently read character.
    ///
    /// A no-op at the start of the line.
    pub fn unread(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Look at the next character without consuming it.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Look at the next `n` characters without consuming them.
    pub fn peek(&self, n: usize) -> Result<&[char], InvalidPeek<'_>> {
        let rest = &self.chars[self.pos..];
        if rest.len() >= n {
            Ok(&rest[..n])
        } else {
            Err(InvalidPeek { available: rest })
        }
    }

    /// Consume `n` characters that a successful [`peek`](Self::peek) already inspected.
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    /// Consume characters while `pred` holds, appending them to `buf`.
    pub fn eat_while(&mut self, buf: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            buf.push(c);
            self.pos += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_unread() {
        let mut cursor = LineCursor::new("ab");
        assert_eq!(cursor.read(), Some('a'));
        cursor.unread();
        assert_eq!(cursor.read(), Some('a'));
        assert_eq!(cursor.read(), Some('b'));
        assert_eq!(cursor.read(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_unread_at_start_is_noop() {
        let mut cursor = LineCursor::new("x");
        cursor.unread();
        assert_eq!(cursor.read(), Some('x'));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = LineCursor::new("\"\"\"body");
        assert_eq!(cursor.peek(3), Ok(&['"', '"', '"'][..]));
        assert_eq!(cursor.read(), Some('"'));
    }

    #[test]
    fn test_partial_peek_at_line_end() {
        let mut cursor = LineCursor::new("ab'");
        cursor.skip(2);
        let err = cursor.peek(2).unwrap_err();
        assert_eq!(err.available, &['\''][..]);
        assert_eq!(cursor.read(), Some('\''));
        assert_eq!(cursor.peek(1).unwrap_err().available, &[][..] as &[char]);
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = LineCursor::new("abc1 d");
        let mut buf = String::from("_");
        cursor.eat_while(&mut buf, |c| c.is_ascii_alphanumeric());
        assert_eq!(buf, "_abc1");
        assert_eq!(cursor.current(), Some(' '));
    }
}
