//! Character-class tables shared by the atomizer and the rule chain
//!
//! All lookups are allocation-free `&str::contains` / `matches!` checks over
//! small constant sets.

use regex::Regex;
use std::sync::OnceLock;

/// Sentence-ending punctuation
pub const ENDINGS: &str = ".?!…";

/// Dash variants: non-breaking hyphen, en dash, em dash, minus, hyphen-minus
pub const DASHES: &str = "‑–—−-";

pub const OPEN_QUOTES: &str = "«“‘";
pub const CLOSE_QUOTES: &str = "»”’";
pub const GENERIC_QUOTES: &str = "\"„'";

pub const OPEN_BRACKETS: &str = "([{";
pub const CLOSE_BRACKETS: &str = ")]}";

/// Characters that glue an elided or possessive part to a word
///
/// All three are `PUNCT` atoms. The modifier letter `ʼ` is not listed: it
/// atomizes as `OTHER` and sticks to its neighbours through the `other` rule.
pub const APOSTROPHES: &str = "'’`";

/// Emoticons such as `:-)`, `;)` or `=(((`
pub const SMILES: &str = r"[=:;]-?[)(]{1,3}";

/// Characters that can sit between two digit runs (`3x4`, `20:55`, `1/2`)
pub const DIGIT_BRIDGES: &str = "xXхХ:/\\";

/// Decimal separators
pub const DECIMAL_SEPARATORS: &str = ".,";

/// Every character the atomizer classifies as a single `PUNCT` atom
pub fn punct_chars() -> String {
    let mut chars = String::from("\\/!#$%&*+,.:;<=>?@^_`|~№…");
    for table in [
        DASHES,
        OPEN_QUOTES,
        CLOSE_QUOTES,
        GENERIC_QUOTES,
        OPEN_BRACKETS,
        CLOSE_BRACKETS,
    ] {
        chars.push_str(table);
    }
    chars
}

/// Anchored emoticon matcher
pub fn smile() -> &'static Regex {
    static SMILE: OnceLock<Regex> = OnceLock::new();
    SMILE.get_or_init(|| {
        Regex::new(&format!("^(?:{SMILES})$")).expect("emoticon pattern is a valid regex")
    })
}

/// Single-character check: `text` is exactly one character from `table`
#[inline]
pub fn is_one_of(text: &str, table: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => table.contains(ch),
        _ => false,
    }
}

#[inline]
pub fn is_dash(text: &str) -> bool {
    is_one_of(text, DASHES)
}

#[inline]
pub fn is_apostrophe(text: &str) -> bool {
    is_one_of(text, APOSTROPHES)
}

#[inline]
pub fn is_ending(text: &str) -> bool {
    is_one_of(text, ENDINGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_membership() {
        assert!(is_dash("-"));
        assert!(is_dash("—"));
        assert!(!is_dash("--"));
        assert!(!is_dash(""));
        assert!(is_apostrophe("’"));
        assert!(is_apostrophe("`"));
        assert!(!is_apostrophe("ʼ"));
        assert!(is_ending("…"));
        assert!(!is_ending(","));
    }

    #[test]
    fn test_punct_chars_cover_tables() {
        let chars = punct_chars();
        for ch in DASHES.chars().chain(APOSTROPHES.chars()) {
            assert!(chars.contains(ch), "missing {ch:?}");
        }
        assert!(chars.contains('«'));
        assert!(chars.contains('№'));
    }

    #[test]
    fn test_smiles() {
        let smile = smile();
        assert!(smile.is_match(":)"));
        assert!(smile.is_match(":-)))"));
        assert!(smile.is_match("=("));
        assert!(!smile.is_match(":))))"));
        assert!(!smile.is_match(":),"));
    }
}
