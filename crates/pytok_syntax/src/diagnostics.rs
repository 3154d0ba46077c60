//! Lexical diagnostics.
//!
//! Every variant is fatal and carries the 1-based physical line it was detected on. Illegal characters are not
//! errors: they reach the consumer as `Illegal` tokens.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::TokenKind;

/// Fatal failure that aborts a tokenizer run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    /// End of a physical line reached inside a single-quoted string or bytes body.
    #[error("error parsing line {line}: EOL while scanning {} literal", kind_label(.kind))]
    #[diagnostic(
        code(pytok::lex::unterminated_literal),
        help("close the literal on the same line, or use a triple-quoted literal to span lines")
    )]
    UnterminatedShortLiteral { line: usize, kind: TokenKind },

    /// End of input reached while a triple-quoted literal is still open.
    #[error("error parsing line {line}: EOF while scanning triple-quoted literal")]
    #[diagnostic(
        code(pytok::lex::unterminated_long_literal),
        help("the triple-quoted literal opened on this line is never closed")
    )]
    UnterminatedLongLiteral { line: usize },

    /// The line source failed to produce the next physical line.
    #[error("error reading line {line}: {message}")]
    #[diagnostic(code(pytok::lex::source))]
    Source { line: usize, message: String },
}

impl LexError {
    /// The 1-based physical line number the failure is attached to.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedShortLiteral { line, .. }
            | LexError::UnterminatedLongLiteral { line }
            | LexError::Source { line, .. } => *line,
        }
    }
}

fn kind_label(kind: &TokenKind) -> &'static str {
    if kind.is_bytes_literal() { "bytes" } else { "string" }
}
