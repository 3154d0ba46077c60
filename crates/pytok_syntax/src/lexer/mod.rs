//! Tokenizer for Python source
//!
//! Handles tokenization including:
//! - Keywords and identifiers (ASCII identifier classes)
//! - Decimal integers
//! - String and bytes literals with every prefix combination, short and triple-quoted
//! - Brackets (with implicit line joining while any bracket is open)
//! - Indentation-based blocks (INDENT/DEINDENT tokens)
//! - Explicit line joining with a trailing backslash
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `cursor` - Character cursor over one physical line
//! - `indent` - INDENT/DEINDENT handling
//! - `continuation` - Bracket nesting and line joining
//! - `strings` - String/bytes literal scanning, including literals spanning lines
//! - `numbers` - Integer scanning
//! - `symbols` - Brackets, backslashes and illegal characters
//! - `stream` - Worker-thread token stream with a one-slot handoff

mod continuation;
mod cursor;
mod indent;
mod numbers;
mod strings;
pub mod stream;
mod symbols;
pub mod tokens;

pub use indent::TAB_WIDTH;
pub use stream::TokenStream;
pub use tokens::{Token, TokenKind, keyword_id};

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::diagnostics::LexError;
use continuation::Continuation;
use cursor::LineCursor;
use indent::IndentStack;
use strings::{LiteralAttempt, PendingLiteral};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Per physical line (simplified):
//
// [blank/comment, no literal open] → skipped
// [literal open]  → resume literal body → [Scanning]
// [joining]       → [Scanning]
// [otherwise]     → measure indentation → [Scanning]
//
// [Scanning] → whitespace / identifier / digit / other … → end of line
//            → update joining → NEWLINE unless joining or literal open
// ============================================================================

/// State carried from one physical line to the next.
#[derive(Debug)]
pub(crate) struct LexState {
    indents: IndentStack,
    continuation: Continuation,
    /// Triple-quoted literal still open at the end of the previous line.
    pending: Option<PendingLiteral>,
}

impl LexState {
    fn new() -> Self {
        Self {
            indents: IndentStack::new(),
            continuation: Continuation::default(),
            pending: None,
        }
    }
}

/// Tokenizer for Python source, driven one physical line at a time.
///
/// The tokenizer pulls lines from `I` on demand and yields tokens in source order, followed by exactly one `Eof`
/// token. A fatal [`LexError`] is yielded after the tokens that preceded it on the failing line; the iterator is
/// exhausted afterwards.
pub struct Tokenizer<I> {
    lines: I,
    line_no: usize,
    state: LexState,
    queue: VecDeque<Token>,
    error: Option<LexError>,
    finished: bool,
}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// Create a tokenizer over newline-stripped physical lines.
    pub fn new(lines: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            lines: lines.into_iter(),
            line_no: 0,
            state: LexState::new(),
            queue: VecDeque::new(),
            error: None,
            finished: false,
        }
    }

    /// Indent widths of the currently open blocks, bottom (always `0`) first.
    pub fn indent_depths(&self) -> &[usize] {
        self.state.indents.levels()
    }

    /// Net number of unmatched open brackets seen so far.
    pub fn nesting_depth(&self) -> isize {
        self.state.continuation.depth()
    }

    /// Whether the next physical line continues the current logical line.
    pub fn is_joining(&self) -> bool {
        self.state.continuation.joining
    }

    /// Whether a triple-quoted literal is open across the line boundary.
    pub fn has_pending_literal(&self) -> bool {
        self.state.pending.is_some()
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// Pull the next physical line and tokenize it, or finish the stream.
    fn advance(&mut self) -> Result<(), LexError> {
        match self.lines.next() {
            Some(Ok(text)) => {
                self.line_no += 1;
                self.tokenize_line(&text)
            }
            Some(Err(err)) => Err(LexError::Source {
                line: self.line_no + 1,
                message: err.to_string(),
            }),
            None => self.finish(),
        }
    }

    fn tokenize_line(&mut self, text: &str) -> Result<(), LexError> {
        // A blank line inside a triple-quoted literal is content.
        if self.state.pending.is_none() && is_blank_or_comment(text) {
            tracing::trace!(line = self.line_no, "skipped blank or comment line");
            return Ok(());
        }

        let before = self.queue.len();
        LineScanner::new(text, self.line_no, &mut self.state, &mut self.queue).scan()?;
        tracing::trace!(
            line = self.line_no,
            tokens = self.queue.len() - before,
            "tokenized line"
        );
        Ok(())
    }

    fn finish(&mut self) -> Result<(), LexError> {
        self.finished = true;
        if let Some(pending) = self.state.pending.take() {
            return Err(LexError::UnterminatedLongLiteral {
                line: pending.opened_on,
            });
        }
        self.queue.push_back(Token::marker(TokenKind::Eof));
        Ok(())
    }
}

impl<R: BufRead> Tokenizer<io::Lines<R>> {
    /// Create a tokenizer reading lines from a buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(reader.lines())
    }
}

impl<'a> Tokenizer<io::Lines<&'a [u8]>> {
    /// Create a tokenizer over an in-memory source.
    ///
    /// Lines are split on `\n`; a trailing `\r` is stripped.
    pub fn from_source(source: &'a str) -> Self {
        Self::from_reader(source.as_bytes())
    }
}

impl<I> Iterator for Tokenizer<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(Ok(token));
            }
            if let Some(err) = self.error.take() {
                return Some(Err(err));
            }
            if self.finished {
                return None;
            }
            if let Err(err) = self.advance() {
                self.finished = true;
                self.error = Some(err);
            }
        }
    }
}

impl<I> std::iter::FusedIterator for Tokenizer<I> where I: Iterator<Item = io::Result<String>> {}

// ============================================================================
// Per-line scanning
// ============================================================================

/// Character classes the line dispatcher routes on, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    IdentifierStart,
    Digit,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_ascii_whitespace() {
        CharClass::Whitespace
    } else if is_ident_start(c) {
        CharClass::IdentifierStart
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Scanner for one physical line, borrowing the cross-line state for the duration of the line.
pub(crate) struct LineScanner<'a> {
    text: &'a str,
    cursor: LineCursor,
    line_no: usize,
    state: &'a mut LexState,
    out: &'a mut VecDeque<Token>,
    /// Set when the trailing backslash of this line was consumed as a line join.
    explicit_join: bool,
}

impl<'a> LineScanner<'a> {
    fn new(text: &'a str, line_no: usize, state: &'a mut LexState, out: &'a mut VecDeque<Token>) -> Self {
        Self {
            text,
            cursor: LineCursor::new(text),
            line_no,
            state,
            out,
            explicit_join: false,
        }
    }

    fn scan(mut self) -> Result<(), LexError> {
        if let Some(pending) = self.state.pending.take() {
            self.scan_long_body(pending);
        } else if !self.state.continuation.joining {
            self.handle_indentation();
        }

        while let Some(c) = self.cursor.current() {
            match classify(c) {
                CharClass::Whitespace => self.skip_whitespace(),
                CharClass::IdentifierStart => self.scan_identifier()?,
                CharClass::Digit => self.scan_number(),
                CharClass::Other => self.scan_other()?,
            }
        }

        self.end_line();
        Ok(())
    }

    fn emit(&mut self, kind: TokenKind, literal: String) {
        self.out.push_back(Token::new(kind, literal));
    }

    fn emit_marker(&mut self, kind: TokenKind) {
        self.out.push_back(Token::marker(kind));
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current().is_some_and(|c| c.is_ascii_whitespace()) {
            self.cursor.skip(1);
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    /// Scan an identifier or keyword, unless the letters turn out to prefix a literal.
    fn scan_identifier(&mut self) -> Result<(), LexError> {
        let mut spelling = match self.scan_literal()? {
            LiteralAttempt::Scanned => return Ok(()),
            LiteralAttempt::NotLiteral(prefix) => prefix,
        };
        self.cursor.eat_while(&mut spelling, is_ident_continue);

        match keyword_id(&spelling) {
            Some(id) => self.emit_marker(TokenKind::Keyword(id)),
            None => self.emit(TokenKind::Identifier, spelling),
        }
        Ok(())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lines holding only whitespace, optionally followed by a `#` comment.
fn is_blank_or_comment(text: &str) -> bool {
    let rest = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    rest.is_empty() || rest.starts_with('#')
}

/// Convenience function to tokenize a source string.
///
/// This is a shorthand for collecting `Tokenizer::from_source(source)`; it stops at the first fatal error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::from_source(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pytok_core::lang::brackets::BracketId;
    use pytok_core::lang::keywords::{self, KeywordId};

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|err| panic!("lex({:?}) failed: {err}", k.canonical));
            assert_eq!(
                tokens,
                vec![
                    Token::marker(TokenKind::Keyword(k.id)),
                    Token::marker(TokenKind::Newline),
                    Token::marker(TokenKind::Eof),
                ],
                "keyword {:?}",
                k.id
            );
        }
    }

    #[test]
    fn test_keyword_versus_identifier() {
        let tokens = lex("forest").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "forest"));
        assert_eq!(tokens.len(), 3);

        assert_eq!(kinds("for")[0], TokenKind::Keyword(KeywordId::For));
        assert_eq!(lex("For").unwrap()[0], Token::new(TokenKind::Identifier, "For"));
    }

    #[test]
    fn test_simple_statement() {
        let tokens = lex("integer = 42").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "integer"),
                Token::new(TokenKind::Illegal, "="),
                Token::new(TokenKind::Integer, "42"),
                Token::marker(TokenKind::Newline),
                Token::marker(TokenKind::Eof),
            ]
        );
    }

    #[test]
    fn test_identifier_with_prefix_letters() {
        // Prefix letters not followed by a quote are replayed as identifier text.
        for name in ["r", "rb", "bar", "fr_x", "u2", "fb", "Rbx", "b_"] {
            let tokens = lex(name).unwrap();
            assert_eq!(tokens[0], Token::new(TokenKind::Identifier, name), "{name:?}");
            assert_eq!(tokens.len(), 3, "{name:?}: {tokens:?}");
        }
    }

    #[test]
    fn test_identifier_followed_by_symbol() {
        let tokens = lex("rb(1)").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "rb"));
        assert_eq!(tokens[1], Token::marker(TokenKind::Bracket(BracketId::LParen)));
        assert_eq!(tokens[2], Token::new(TokenKind::Integer, "1"));
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let source = "x\n\n   \n# comment\n    # indented comment\ny";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("\n\n# only a comment\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_trailing_comment_is_not_stripped() {
        // Only whole comment lines are skipped; an inline `#` is an illegal character.
        let tokens = lex("x # note").unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "#"));
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "note"));
    }

    #[test]
    fn test_numbers_then_identifier() {
        let tokens = lex("123abc").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Integer, "123"));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "abc"));
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            kinds("a\r\nb\r\n"),
            vec![
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokens_before_error_are_delivered() {
        let mut tokenizer = Tokenizer::from_source("x 'oops");
        assert_eq!(tokenizer.next(), Some(Ok(Token::new(TokenKind::Identifier, "x"))));
        assert_eq!(
            tokenizer.next(),
            Some(Err(LexError::UnterminatedShortLiteral {
                line: 1,
                kind: TokenKind::String
            }))
        );
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_source_error_carries_line() {
        let lines = vec![
            Ok("x".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
        ];
        let result: Result<Vec<Token>, LexError> = Tokenizer::new(lines).collect();
        assert_eq!(
            result,
            Err(LexError::Source {
                line: 2,
                message: "bad bytes".to_string()
            })
        );
    }

    #[test]
    fn test_exactly_one_eof() {
        let mut tokenizer = Tokenizer::from_source("pass");
        let tokens: Vec<_> = tokenizer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.line_number(), 1);
    }
}
