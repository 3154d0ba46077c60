//! Shareable metadata for `pytok_core::lang` registries.
//!
//! These are the small, dependency-free metadata types reused across all registries.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs; enforcement of lexical rules lives in the tokenizer.

use std::fmt;

/// The Python release a vocabulary item became part of the grammar, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use pytok_core::lang::registry::Since;
///
/// assert!(Since(3, 7) > Since(3, 0));
/// assert_eq!(Since(3, 7).to_string(), "3.7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u8, pub u8);

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - `Legacy` marks spellings kept only for source compatibility (the `u` string prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Legacy,
}
