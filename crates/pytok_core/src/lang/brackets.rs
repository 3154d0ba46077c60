//! Bracket vocabulary.
//!
//! Brackets are the only punctuation the tokenizer classifies; every other symbol is surfaced as an
//! illegal character. Brackets matter beyond their own tokens because unmatched open brackets force
//! implicit line joining.
//!
//! ## Examples
//! ```rust
//! use pytok_core::lang::brackets::{self, BracketId, BracketSide};
//!
//! assert_eq!(brackets::from_char('['), Some(BracketId::LBracket));
//! assert_eq!(brackets::side(BracketId::RBrace), BracketSide::Close);
//! assert_eq!(brackets::counterpart(BracketId::LParen), BracketId::RParen);
//! ```

/// Stable identifier for each bracket character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Whether a bracket opens or closes a nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketSide {
    Open,
    Close,
}

/// Metadata for a bracket.
#[derive(Debug, Clone, Copy)]
pub struct BracketInfo {
    pub id: BracketId,
    pub spelling: char,
    pub side: BracketSide,
    pub counterpart: BracketId,
    /// Upper-case tag used in token dumps (e.g. `PAREN_LEFT`).
    pub tag: &'static str,
}

/// Registry of all brackets.
pub const BRACKETS: &[BracketInfo] = &[
    info(BracketId::LParen, '(', BracketSide::Open, BracketId::RParen, "PAREN_LEFT"),
    info(BracketId::RParen, ')', BracketSide::Close, BracketId::LParen, "PAREN_RIGHT"),
    info(BracketId::LBracket, '[', BracketSide::Open, BracketId::RBracket, "BRACKET_LEFT"),
    info(BracketId::RBracket, ']', BracketSide::Close, BracketId::LBracket, "BRACKET_RIGHT"),
    info(BracketId::LBrace, '{', BracketSide::Open, BracketId::RBrace, "BRACE_LEFT"),
    info(BracketId::RBrace, '}', BracketSide::Close, BracketId::LBrace, "BRACE_RIGHT"),
];

/// Resolve a character to its bracket identifier.
pub fn from_char(c: char) -> Option<BracketId> {
    BRACKETS.iter().find(|b| b.spelling == c).map(|b| b.id)
}

/// Return the source character for a bracket.
pub fn as_char(id: BracketId) -> char {
    info_for(id).spelling
}

/// Return whether the bracket opens or closes a nesting level.
pub fn side(id: BracketId) -> BracketSide {
    info_for(id).side
}

/// Return the matching bracket on the other side.
pub fn counterpart(id: BracketId) -> BracketId {
    info_for(id).counterpart
}

/// Return the full metadata entry for a bracket.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BracketId) -> &'static BracketInfo {
    BRACKETS.iter().find(|b| b.id == id).expect("bracket info missing")
}

const fn info(
    id: BracketId,
    spelling: char,
    side: BracketSide,
    counterpart: BracketId,
    tag: &'static str,
) -> BracketInfo {
    BracketInfo {
        id,
        spelling,
        side,
        counterpart,
        tag,
    }
}
