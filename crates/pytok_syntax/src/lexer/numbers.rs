//! Number scanning for the pytok tokenizer
//!
//! Only decimal integers are recognised. A `.` or an exponent letter after the digits is left for the next scan,
//! so `1.5` lexes as `INTEGER`, `ILLEGAL`, `INTEGER`.

use super::LineScanner;
use super::tokens::TokenKind;

impl LineScanner<'_> {
    pub(super) fn scan_number(&mut self) {
        let mut digits = String::new();
        self.cursor.eat_while(&mut digits, |c| c.is_ascii_digit());
        self.emit(TokenKind::Integer, digits);
    }
}
