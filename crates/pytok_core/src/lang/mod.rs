//! Python vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, brackets, and
//! string/bytes literal prefixes.
//!
//! The design goal is to avoid stringly-typed checks scattered across the scanners. Callers work with
//! **stable IDs** (e.g. `KeywordId`, `BracketId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The tokenizer enforces lexical structure; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use pytok_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("lambda"), Some(KeywordId::Lambda));
//! assert_eq!(keywords::as_str(KeywordId::Lambda), "lambda");
//! ```

pub mod brackets;
pub mod keywords;
pub mod literals;
pub mod registry;
