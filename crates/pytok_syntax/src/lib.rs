//! Scanning engine for Python source: physical lines in, classified tokens out.
//!
//! This crate is dependency-light and intended for reuse by a downstream parser and by tooling.
//!
//! ## Notes
//! - This crate is intentionally “lexical-only”: it builds no syntax tree and decodes no escapes.
//! - Vocabulary identity (keywords/brackets/literal prefixes) comes from `pytok_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use pytok_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::lex("x = 1\n").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

pub mod diagnostics;
pub mod lexer;
