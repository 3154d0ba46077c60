#![forbid(unsafe_code)]
//! pytok: a line-oriented tokenizer for Python source
//!
//! This crate is the facade over the workspace: the vocabulary registries live in `pytok_core`, the scanning
//! engine in `pytok_syntax`, and the `pytok` binary in [`cli`].
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups by ID use `.expect()`; a missing entry is a registry bug.
//!
//! ## Examples
//! ```rust
//! use pytok::lexer::{self, TokenKind};
//!
//! let tokens = lexer::lex("if x:\n    pass\n").unwrap();
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

pub mod cli;
pub mod version;

pub use pytok_core::lang;
pub use pytok_syntax::diagnostics;
pub use pytok_syntax::lexer;

pub use pytok_syntax::diagnostics::LexError;
pub use pytok_syntax::lexer::{Token, TokenKind, TokenStream, Tokenizer, lex};
