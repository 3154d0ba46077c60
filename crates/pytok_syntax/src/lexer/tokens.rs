//! Token types for the pytok tokenizer.
//!
//! The tokenizer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Bracket(BracketId)` for the six bracket characters
//!
//! ## Notes
//! - A token is an immutable `(kind, literal)` pair. Structural, bracket and keyword tokens carry an empty
//!   literal; identifiers, integers and string/bytes literals carry their scanned text (escapes undecoded,
//!   quotes and prefix letters stripped).

use std::fmt;

use pytok_core::lang::brackets::{self, BracketId};
use pytok_core::lang::keywords::{self, KeywordId};
use pytok_core::lang::literals::PrefixFlags;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Structural ==========
    Newline,
    Indent,
    Deindent,
    Eof,
    Illegal,

    // ========== Keyword / bracket (ID-based) ==========
    Bracket(BracketId),
    Keyword(KeywordId),

    // ========== Identifiers and numbers ==========
    Identifier,
    Integer,

    // ========== Short literals ==========
    String,
    RawString,
    FString,
    RawFString,
    Bytes,
    RawBytes,

    // ========== Long (triple-quoted) literals ==========
    LongString,
    LongRawString,
    LongFString,
    LongRawFString,
    LongBytes,
    LongRawBytes,
}

impl TokenKind {
    /// Select the literal kind for a short or long literal with the given prefix flags.
    ///
    /// ## Notes
    /// - `format` is ignored for bytes: the prefix registry never produces format bytes.
    pub fn literal(long: bool, flags: PrefixFlags) -> TokenKind {
        match (long, flags.bytes, flags.raw, flags.format) {
            (false, true, false, _) => TokenKind::Bytes,
            (false, true, true, _) => TokenKind::RawBytes,
            (false, false, false, false) => TokenKind::String,
            (false, false, true, false) => TokenKind::RawString,
            (false, false, false, true) => TokenKind::FString,
            (false, false, true, true) => TokenKind::RawFString,
            (true, true, false, _) => TokenKind::LongBytes,
            (true, true, true, _) => TokenKind::LongRawBytes,
            (true, false, false, false) => TokenKind::LongString,
            (true, false, true, false) => TokenKind::LongRawString,
            (true, false, false, true) => TokenKind::LongFString,
            (true, false, true, true) => TokenKind::LongRawFString,
        }
    }

    /// True for any of the twelve string/bytes literal kinds.
    pub fn is_literal(self) -> bool {
        self.is_string_literal() || self.is_bytes_literal()
    }

    pub fn is_string_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::RawString
                | TokenKind::FString
                | TokenKind::RawFString
                | TokenKind::LongString
                | TokenKind::LongRawString
                | TokenKind::LongFString
                | TokenKind::LongRawFString
        )
    }

    pub fn is_bytes_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Bytes | TokenKind::RawBytes | TokenKind::LongBytes | TokenKind::LongRawBytes
        )
    }

    /// True for triple-quoted literal kinds.
    pub fn is_long_literal(self) -> bool {
        matches!(
            self,
            TokenKind::LongString
                | TokenKind::LongRawString
                | TokenKind::LongFString
                | TokenKind::LongRawFString
                | TokenKind::LongBytes
                | TokenKind::LongRawBytes
        )
    }

    /// True for tokens that only mark structure (`NEWLINE`, `INDENT`, `DEINDENT`, `EOF`).
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Deindent | TokenKind::Eof
        )
    }

    /// Upper-case tag used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Deindent => "DEINDENT",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Bracket(id) => brackets::info_for(id).tag,
            TokenKind::Keyword(id) => keyword_tag(id),
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::RawString => "RAWSTRING",
            TokenKind::FString => "FSTRING",
            TokenKind::RawFString => "RAWFSTRING",
            TokenKind::Bytes => "BYTES",
            TokenKind::RawBytes => "RAWBYTES",
            TokenKind::LongString => "LONGSTRING",
            TokenKind::LongRawString => "LONGRAWSTRING",
            TokenKind::LongFString => "LONGFSTRING",
            TokenKind::LongRawFString => "LONGRAWFSTRING",
            TokenKind::LongBytes => "LONGBYTES",
            TokenKind::LongRawBytes => "LONGRAWBYTES",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keyword tags are the upper-cased spelling (`FOR`, `NONLOCAL`, `TRUE`).
fn keyword_tag(id: KeywordId) -> &'static str {
    match id {
        KeywordId::If => "IF",
        KeywordId::Elif => "ELIF",
        KeywordId::Else => "ELSE",
        KeywordId::For => "FOR",
        KeywordId::While => "WHILE",
        KeywordId::Break => "BREAK",
        KeywordId::Continue => "CONTINUE",
        KeywordId::Return => "RETURN",
        KeywordId::Yield => "YIELD",
        KeywordId::Pass => "PASS",
        KeywordId::Raise => "RAISE",
        KeywordId::Try => "TRY",
        KeywordId::Except => "EXCEPT",
        KeywordId::Finally => "FINALLY",
        KeywordId::With => "WITH",
        KeywordId::Assert => "ASSERT",
        KeywordId::Def => "DEF",
        KeywordId::Class => "CLASS",
        KeywordId::Lambda => "LAMBDA",
        KeywordId::Async => "ASYNC",
        KeywordId::Await => "AWAIT",
        KeywordId::Import => "IMPORT",
        KeywordId::From => "FROM",
        KeywordId::As => "AS",
        KeywordId::Global => "GLOBAL",
        KeywordId::Nonlocal => "NONLOCAL",
        KeywordId::Del => "DEL",
        KeywordId::True => "TRUE",
        KeywordId::False => "FALSE",
        KeywordId::None => "NONE",
        KeywordId::And => "AND",
        KeywordId::Or => "OR",
        KeywordId::Not => "NOT",
        KeywordId::In => "IN",
        KeywordId::Is => "IS",
    }
}

/// A token: its kind and the literal text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    /// Construct a token carrying scanned text.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Construct a token with an empty literal (structural, bracket, keyword).
    pub fn marker(kind: TokenKind) -> Self {
        Self {
            kind,
            literal: String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_empty() && !self.kind.is_literal() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {:?}", self.kind, self.literal)
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_kind_cross() {
        assert_eq!(TokenKind::literal(false, PrefixFlags::STRING), TokenKind::String);
        assert_eq!(TokenKind::literal(false, PrefixFlags::RAW_FSTRING), TokenKind::RawFString);
        assert_eq!(TokenKind::literal(true, PrefixFlags::FSTRING), TokenKind::LongFString);
        assert_eq!(TokenKind::literal(true, PrefixFlags::RAW_BYTES), TokenKind::LongRawBytes);
        assert_eq!(TokenKind::literal(false, PrefixFlags::BYTES), TokenKind::Bytes);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::marker(TokenKind::Keyword(KeywordId::For)).to_string(), "FOR");
        assert_eq!(Token::new(TokenKind::Identifier, "forest").to_string(), r#"IDENTIFIER "forest""#);
        assert_eq!(Token::new(TokenKind::LongString, "a\nb").to_string(), r#"LONGSTRING "a\nb""#);
        assert_eq!(Token::new(TokenKind::String, "").to_string(), r#"STRING """#);
        assert_eq!(Token::marker(TokenKind::Bracket(BracketId::LBrace)).to_string(), "BRACE_LEFT");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::LongRawBytes.is_bytes_literal());
        assert!(TokenKind::LongRawBytes.is_long_literal());
        assert!(!TokenKind::FString.is_long_literal());
        assert!(TokenKind::Deindent.is_structural());
        assert!(!TokenKind::Illegal.is_structural());
    }
}
