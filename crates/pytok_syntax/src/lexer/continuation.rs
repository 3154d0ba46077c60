//! Line continuation for the pytok tokenizer
//!
//! A logical line continues onto the next physical line when the line ends in a joining backslash or while any
//! bracket is still open. While joining, NEWLINE is suppressed and the next line's indentation is not measured.

use super::LineScanner;
use super::tokens::TokenKind;

/// Joining flag and bracket nesting depth, carried across physical lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Continuation {
    /// The next physical line continues the current logical line.
    pub joining: bool,
    /// Net unmatched open brackets. Goes negative only on malformed input, until the end of the line.
    depth: isize,
}

impl Continuation {
    pub fn open_bracket(&mut self) {
        self.depth += 1;
    }

    pub fn close_bracket(&mut self) {
        self.depth -= 1;
    }

    pub fn depth(&self) -> isize {
        self.depth
    }

    /// Decide whether the logical line goes on after the current physical line.
    pub fn end_of_line(&mut self, explicit_join: bool) {
        if explicit_join || self.depth > 0 {
            self.joining = true;
        } else if self.depth < 0 {
            tracing::debug!(depth = self.depth, "unbalanced closing bracket; nesting depth reset");
            self.depth = 0;
            self.joining = false;
        } else {
            self.joining = false;
        }
    }
}

/// True when `text` ends in a backslash that is not itself escaped.
pub(super) fn signals_line_join(text: &str) -> bool {
    text.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

impl LineScanner<'_> {
    /// Update joining state and emit NEWLINE if the logical line ended here.
    pub(super) fn end_line(&mut self) {
        self.state.continuation.end_of_line(self.explicit_join);
        if !self.state.continuation.joining && self.state.pending.is_none() {
            self.emit_marker(TokenKind::Newline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Token, Tokenizer, lex};

    fn newlines(source: &str) -> usize {
        lex(source)
            .unwrap()
            .iter()
            .filter(|t| t.kind == TokenKind::Newline)
            .count()
    }

    #[test]
    fn test_signals_line_join() {
        assert!(signals_line_join("x = 1 + \\"));
        assert!(!signals_line_join("x = 1"));
        assert!(!signals_line_join("x = '\\\\"));
        assert!(signals_line_join("\\\\\\"));
        assert!(!signals_line_join(""));
    }

    #[test]
    fn test_explicit_join() {
        let tokens = lex("x = 1 + \\\n2").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Illegal,
                TokenKind::Integer,
                TokenKind::Illegal,
                TokenKind::Integer,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_joined_line_skips_indentation() {
        let source = "if a \\\n        and b:\n    c";
        let tokens = lex(source).unwrap();
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        // Only `c` opens a block; the continued line's leading spaces are plain whitespace.
        assert_eq!(indents, 1);
        assert_eq!(newlines(source), 2);
    }

    #[test]
    fn test_newlines_inside_brackets() {
        let source = "f(\n  1,\n  2\n)";
        let mut tokenizer = Tokenizer::from_source(source);
        let tokens: Vec<Token> = tokenizer.by_ref().map(|t| t.unwrap()).collect();
        let newline_at: Vec<_> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind == TokenKind::Newline)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(newline_at.len(), 1);
        assert_eq!(tokens[newline_at[0] - 1].kind.name(), "PAREN_RIGHT");
        assert_eq!(tokenizer.nesting_depth(), 0);
        assert!(!tokenizer.is_joining());
    }

    #[test]
    fn test_unbalanced_closing_bracket_is_clamped() {
        let mut tokenizer = Tokenizer::from_source(")\nx");
        let kinds: Vec<_> = tokenizer.by_ref().map(|t| t.unwrap().kind).collect();
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Newline).count(), 2);
        assert_eq!(tokenizer.nesting_depth(), 0);
    }

    #[test]
    fn test_backslash_mid_line_is_illegal() {
        let tokens = lex("a \\ b").unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "\\"));
        assert_eq!(newlines("a \\ b"), 1);
    }

    #[test]
    fn test_double_backslash_does_not_join() {
        let tokens = lex("a \\\\\nb").unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "\\"));
        assert_eq!(tokens[2], Token::new(TokenKind::Illegal, "\\"));
        assert_eq!(newlines("a \\\\\nb"), 2);
    }

    #[test]
    fn test_join_is_one_shot() {
        let source = "a \\\nb\nc";
        assert_eq!(newlines(source), 2);
    }
}
