//! Bracket and symbol scanning for the pytok tokenizer
//!
//! Brackets are the only punctuation with their own tokens; every other symbol, operators and inline `#`
//! included, becomes an `ILLEGAL` token carrying the character. A backslash is the one exception: as the final
//! character of a line that ends in an odd run of backslashes it is consumed silently and requests a line join.

use pytok_core::lang::brackets::{self, BracketSide};
use pytok_core::lang::literals;

use super::LineScanner;
use super::continuation::signals_line_join;
use super::strings::LiteralAttempt;
use super::tokens::TokenKind;
use crate::diagnostics::LexError;

impl LineScanner<'_> {
    /// Scan a character that is neither whitespace, a letter nor a digit.
    ///
    /// Quotes go to the literal scanner first; anything that does not open a literal is a symbol.
    pub(super) fn scan_other(&mut self) -> Result<(), LexError> {
        if self.cursor.current().is_some_and(literals::is_quote) {
            if let LiteralAttempt::NotLiteral(_) = self.scan_literal()? {
                self.scan_symbol();
            }
            return Ok(());
        }
        self.scan_symbol();
        Ok(())
    }

    fn scan_symbol(&mut self) {
        let Some(c) = self.cursor.read() else {
            return;
        };

        if let Some(id) = brackets::from_char(c) {
            match brackets::side(id) {
                BracketSide::Open => self.state.continuation.open_bracket(),
                BracketSide::Close => self.state.continuation.close_bracket(),
            }
            self.emit_marker(TokenKind::Bracket(id));
            return;
        }

        if c == '\\' && self.cursor.is_at_end() && signals_line_join(self.text) {
            self.explicit_join = true;
            return;
        }

        self.emit(TokenKind::Illegal, c.to_string());
    }
}
