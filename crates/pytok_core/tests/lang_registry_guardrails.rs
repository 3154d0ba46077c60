use std::collections::HashMap;
use std::collections::HashSet;

use pytok_core::lang::brackets::{self, BracketSide};
use pytok_core::lang::keywords;
use pytok_core::lang::literals;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_spellings_are_identifier_shaped() {
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().expect("keyword spelling must not be empty");
        assert!(first.is_ascii_alphabetic() || first == '_', "{:?}", info.canonical);
        assert!(
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "{:?}",
            info.canonical
        );
    }
}

#[test]
fn keyword_ids_unique() {
    let ids: HashSet<_> = keywords::KEYWORDS.iter().map(|k| k.id).collect();
    assert_eq!(ids.len(), keywords::KEYWORDS.len());
}

#[test]
fn brackets_pair_up() {
    for info in brackets::BRACKETS {
        let other = brackets::counterpart(info.id);
        assert_eq!(brackets::counterpart(other), info.id, "{:?} counterpart mismatch", info.id);
        assert_ne!(brackets::side(other), info.side);
        assert_eq!(brackets::from_char(info.spelling), Some(info.id));
        assert_eq!(brackets::as_char(info.id), info.spelling);
    }

    let opens = brackets::BRACKETS
        .iter()
        .filter(|b| b.side == BracketSide::Open)
        .count();
    assert_eq!(opens * 2, brackets::BRACKETS.len());
}

#[test]
fn prefixes_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for info in literals::PREFIXES {
        assert!(seen.insert(info.canonical), "duplicate prefix {:?}", info.canonical);
        assert!(info.canonical.len() <= literals::MAX_PREFIX_LEN);
        assert_eq!(literals::prefix_flags(info.canonical), Some(info.flags));
        assert_eq!(
            literals::prefix_flags(&info.canonical.to_ascii_uppercase()),
            Some(info.flags)
        );
        assert!(literals::is_prefix_start(info.canonical));
    }
}

#[test]
fn format_prefixes_never_produce_bytes() {
    for info in literals::PREFIXES {
        assert!(
            !(info.flags.format && info.flags.bytes),
            "prefix {:?} combines format and bytes",
            info.canonical
        );
    }
}
