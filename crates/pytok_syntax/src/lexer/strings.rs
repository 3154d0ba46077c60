//! String and bytes literal scanning for the pytok tokenizer
//!
//! Handles every prefix combination (`u`, `r`, `f`, `rf`/`fr`, `b`, `rb`/`br`, any letter case), short and
//! triple-quoted delimiters, and triple-quoted literals that span physical lines.
//!
//! Literal bodies are kept verbatim: escapes are not decoded, and a delimiter counts as escaped exactly when it
//! follows an odd number of consecutive backslashes. This holds for raw literals too.

use pytok_core::lang::literals::{self, PrefixFlags};

use super::LineScanner;
use super::cursor::InvalidPeek;
use super::tokens::TokenKind;
use crate::diagnostics::LexError;

/// Outcome of trying to scan a literal at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LiteralAttempt {
    /// A literal was recognised: its token was emitted, or it is now pending across lines.
    Scanned,
    /// No literal starts here. Carries the prefix letters consumed so far; the caller continues an identifier
    /// with them instead of re-reading the line.
    NotLiteral(String),
}

/// A triple-quoted literal left open at the end of a physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingLiteral {
    /// One of the `Long*` literal kinds.
    pub kind: TokenKind,
    pub delim: char,
    /// Body scanned so far, including a `\n` for every line break crossed.
    pub body: String,
    /// Physical line holding the opening delimiter.
    pub opened_on: usize,
}

// ============================================================================
// Prefix and delimiter detection
// ============================================================================

impl LineScanner<'_> {
    /// Try to scan a string or bytes literal starting at the cursor.
    ///
    /// Letters are consumed only while they can still form a valid prefix. The first character that cannot is
    /// pushed back, and the letters read so far are handed back as [`LiteralAttempt::NotLiteral`].
    pub(super) fn scan_literal(&mut self) -> Result<LiteralAttempt, LexError> {
        let mut prefix = String::new();
        loop {
            let Some(c) = self.cursor.read() else {
                return Ok(LiteralAttempt::NotLiteral(prefix));
            };

            if literals::is_quote(c) {
                return match literals::prefix_flags(&prefix) {
                    Some(flags) => {
                        self.open_literal(flags, c)?;
                        Ok(LiteralAttempt::Scanned)
                    }
                    None => {
                        self.cursor.unread();
                        Ok(LiteralAttempt::NotLiteral(prefix))
                    }
                };
            }

            prefix.push(c);
            if !literals::is_prefix_start(&prefix) {
                prefix.pop();
                self.cursor.unread();
                return Ok(LiteralAttempt::NotLiteral(prefix));
            }
        }
    }

    /// Scan a literal whose prefix and opening delimiter have been consumed.
    fn open_literal(&mut self, flags: PrefixFlags, delim: char) -> Result<(), LexError> {
        let run = match self.cursor.peek(2) {
            Ok(next) | Err(InvalidPeek { available: next }) => next.iter().take_while(|&&c| c == delim).count(),
        };
        match run {
            2 => {
                self.cursor.skip(2);
                let literal = PendingLiteral {
                    kind: TokenKind::literal(true, flags),
                    delim,
                    body: String::new(),
                    opened_on: self.line_no,
                };
                self.scan_long_body(literal);
                Ok(())
            }
            1 => {
                // Two delimiters in a row, not three: an empty literal.
                self.cursor.skip(1);
                self.emit(TokenKind::literal(false, flags), String::new());
                Ok(())
            }
            _ => self.scan_short_body(TokenKind::literal(false, flags), delim),
        }
    }

    // ========================================================================
    // Body scanning
    // ========================================================================

    /// Scan a single-quoted body up to its closing delimiter on this line.
    fn scan_short_body(&mut self, kind: TokenKind, delim: char) -> Result<(), LexError> {
        let mut body = String::new();
        loop {
            match self.cursor.read() {
                None => {
                    return Err(LexError::UnterminatedShortLiteral {
                        line: self.line_no,
                        kind,
                    });
                }
                Some(c) if c == delim && !is_escaped(&body) => {
                    self.emit(kind, body);
                    return Ok(());
                }
                Some(c) => body.push(c),
            }
        }
    }

    /// Scan a triple-quoted body, either freshly opened or resumed from an earlier line.
    ///
    /// Runs of one or two delimiters are content. If the line ends first, the literal is parked in the
    /// cross-line state and the rest of the literal is scanned on the next line.
    pub(super) fn scan_long_body(&mut self, mut literal: PendingLiteral) {
        loop {
            let Some(c) = self.cursor.read() else {
                literal.body.push('\n');
                if literal.opened_on == self.line_no {
                    tracing::debug!(line = self.line_no, "triple-quoted literal continues past end of line");
                }
                self.state.pending = Some(literal);
                return;
            };

            if c == literal.delim && !is_escaped(&literal.body) && self.closes_long(literal.delim) {
                self.cursor.skip(2);
                if literal.opened_on != self.line_no {
                    tracing::debug!(
                        line = self.line_no,
                        opened_on = literal.opened_on,
                        "closed multi-line triple-quoted literal"
                    );
                }
                self.emit(literal.kind, literal.body);
                return;
            }
            literal.body.push(c);
        }
    }

    /// True when the two characters after an unescaped delimiter complete a closing triple.
    fn closes_long(&self, delim: char) -> bool {
        matches!(self.cursor.peek(2), Ok(&[a, b]) if a == delim && b == delim)
    }
}

/// True when `body` ends in an odd number of backslashes, escaping whatever follows.
fn is_escaped(body: &str) -> bool {
    body.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

// ============================================================================
// TESTS
// ============================================================================
