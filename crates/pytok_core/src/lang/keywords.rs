//! Define the reserved keyword vocabulary of the Python grammar.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording canonical spellings,
//! categories, and the Python release in which the word became reserved.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `None` is a keyword, `none` is an identifier.
//! - Soft keywords (`match`, `case`, `type`, `_`) are not reserved and are not listed here.
//!
//! ## Examples
//! ```rust
//! use pytok_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("nonlocal"), Some(KeywordId::Nonlocal));
//! assert_eq!(keywords::from_str("forest"), None);
//! assert_eq!(keywords::as_str(KeywordId::True), "True");
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Elif,
    Else,
    For,
    While,
    Break,
    Continue,
    Return,
    Yield,
    Pass,
    Raise,
    Try,
    Except,
    Finally,
    With,
    Assert,

    // Definitions / coroutines
    Def,
    Class,
    Lambda,
    Async,
    Await,

    // Imports
    Import,
    From,
    As,

    // Name binding
    Global,
    Nonlocal,
    Del,

    // Literals
    True,
    False,
    None,

    // Word operators
    And,
    Or,
    Not,
    In,
    Is,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Import,
    Binding,
    Literal,
    Operator,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// First Python 3 release in which the spelling is reserved.
    pub since: Since,
    pub stability: Stability,
}

const PY3: Since = Since(3, 0);

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Elif, "elif", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Yield, "yield", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Pass, "pass", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Raise, "raise", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Except, "except", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Finally, "finally", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::With, "with", KeywordCategory::ControlFlow, PY3),
    info(KeywordId::Assert, "assert", KeywordCategory::ControlFlow, PY3),

    // Definitions / coroutines
    info(KeywordId::Def, "def", KeywordCategory::Definition, PY3),
    info(KeywordId::Class, "class", KeywordCategory::Definition, PY3),
    info(KeywordId::Lambda, "lambda", KeywordCategory::Definition, PY3),
    info(KeywordId::Async, "async", KeywordCategory::Definition, Since(3, 7)),
    info(KeywordId::Await, "await", KeywordCategory::Definition, Since(3, 7)),

    // Imports
    info(KeywordId::Import, "import", KeywordCategory::Import, PY3),
    info(KeywordId::From, "from", KeywordCategory::Import, PY3),
    info(KeywordId::As, "as", KeywordCategory::Import, PY3),

    // Name binding
    info(KeywordId::Global, "global", KeywordCategory::Binding, PY3),
    info(KeywordId::Nonlocal, "nonlocal", KeywordCategory::Binding, PY3),
    info(KeywordId::Del, "del", KeywordCategory::Binding, PY3),

    // Literals
    info(KeywordId::True, "True", KeywordCategory::Literal, PY3),
    info(KeywordId::False, "False", KeywordCategory::Literal, PY3),
    info(KeywordId::None, "None", KeywordCategory::Literal, PY3),

    // Word operators
    info(KeywordId::And, "and", KeywordCategory::Operator, PY3),
    info(KeywordId::Or, "or", KeywordCategory::Operator, PY3),
    info(KeywordId::Not, "not", KeywordCategory::Operator, PY3),
    info(KeywordId::In, "in", KeywordCategory::Operator, PY3),
    info(KeywordId::Is, "is", KeywordCategory::Operator, PY3),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved spelling.
/// - `None` otherwise (including prefixes and extensions such as `fo` or `forest`).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since,
        stability: Stability::Stable,
    }
}
