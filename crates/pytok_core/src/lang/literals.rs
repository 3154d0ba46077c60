//! String and bytes literal prefix vocabulary.
//!
//! A literal prefix is zero, one, or two letters written immediately before the opening quote. Each
//! letter is matched ASCII case-insensitively and contributes a flag:
//!
//! | Letter | Flag |
//! |--------|------|
//! | `r` | raw |
//! | `f` | format (strings only) |
//! | `b` | bytes |
//! | `u` | none (legacy unicode marker, only valid alone) |
//!
//! ## Examples
//! ```rust
//! use pytok_core::lang::literals::{self, PrefixFlags};
//!
//! assert_eq!(literals::prefix_flags("Rb"), Some(PrefixFlags::RAW_BYTES));
//! assert_eq!(literals::prefix_flags("fb"), None);
//! assert!(literals::is_prefix_start("r"));
//! assert!(!literals::is_prefix_start("ru"));
//! ```

use super::registry::Stability;

/// Flags derived from a literal prefix.
///
/// A literal is a string exactly when it is not bytes, so `is_string` is derived rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrefixFlags {
    pub bytes: bool,
    pub raw: bool,
    pub format: bool,
}

impl PrefixFlags {
    pub const STRING: PrefixFlags = PrefixFlags::new(false, false, false);
    pub const RAW_STRING: PrefixFlags = PrefixFlags::new(false, true, false);
    pub const FSTRING: PrefixFlags = PrefixFlags::new(false, false, true);
    pub const RAW_FSTRING: PrefixFlags = PrefixFlags::new(false, true, true);
    pub const BYTES: PrefixFlags = PrefixFlags::new(true, false, false);
    pub const RAW_BYTES: PrefixFlags = PrefixFlags::new(true, true, false);

    const fn new(bytes: bool, raw: bool, format: bool) -> Self {
        Self { bytes, raw, format }
    }

    pub fn is_string(self) -> bool {
        !self.bytes
    }

    pub fn is_bytes(self) -> bool {
        self.bytes
    }
}

/// Metadata for one accepted prefix spelling (lower-case canonical form).
#[derive(Debug, Clone, Copy)]
pub struct PrefixInfo {
    pub canonical: &'static str,
    pub flags: PrefixFlags,
    pub stability: Stability,
}

/// Registry of every accepted prefix, including the empty one.
///
/// ## Notes
/// - Two-letter prefixes are listed in both orders; `f` never combines with `b`, and `u` never combines.
pub const PREFIXES: &[PrefixInfo] = &[
    info("", PrefixFlags::STRING),
    PrefixInfo {
        canonical: "u",
        flags: PrefixFlags::STRING,
        stability: Stability::Legacy,
    },
    info("r", PrefixFlags::RAW_STRING),
    info("f", PrefixFlags::FSTRING),
    info("rf", PrefixFlags::RAW_FSTRING),
    info("fr", PrefixFlags::RAW_FSTRING),
    info("b", PrefixFlags::BYTES),
    info("rb", PrefixFlags::RAW_BYTES),
    info("br", PrefixFlags::RAW_BYTES),
];

/// Longest accepted prefix, in characters.
pub const MAX_PREFIX_LEN: usize = 2;

/// Resolve a prefix spelling (any letter case) to its flags.
///
/// ## Returns
/// - `Some(PrefixFlags)` when `spelling` is one of [`PREFIXES`] ignoring ASCII case.
/// - `None` for anything else.
pub fn prefix_flags(spelling: &str) -> Option<PrefixFlags> {
    PREFIXES
        .iter()
        .find(|p| p.canonical.eq_ignore_ascii_case(spelling))
        .map(|p| p.flags)
}

/// Return true if `spelling` is the start of (or equal to) some accepted prefix.
///
/// The literal scanner uses this to stop consuming letters as soon as they can no longer lead to a quote.
pub fn is_prefix_start(spelling: &str) -> bool {
    PREFIXES.iter().any(|p| {
        p.canonical.len() >= spelling.len()
            && p.canonical.is_char_boundary(spelling.len())
            && p.canonical[..spelling.len()].eq_ignore_ascii_case(spelling)
    })
}

/// Return true for the two literal delimiter characters.
pub fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

const fn info(canonical: &'static str, flags: PrefixFlags) -> PrefixInfo {
    PrefixInfo {
        canonical,
        flags,
        stability: Stability::Stable,
    }
}
