//! Provide the canonical Python vocabulary used by the pytok tokenizer.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the scanning engine
//! (`pytok_syntax`) consults when it classifies source text: reserved keywords, bracket characters, and the
//! string/bytes literal prefixes.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no token types.
//! - Every registry is a `const` table, so it is safe to share across threads without synchronisation.

pub mod lang;
