//! Atomizer: carves text into typed minimal spans
//!
//! A single prioritized alternation classifies every non-space run. The
//! first matching alternative wins:
//! URI > DOI > DOMAIN > EMAIL > RU > LAT > INT > PUNCT > OTHER.
//!
//! Address-like atoms (URI, DOI, DOMAIN, EMAIL) greedily swallow trailing
//! punctuation, so they go through [`clean_uri_atom`] and every stripped
//! character is re-emitted as its own `PUNCT` atom.

use crate::punct::punct_chars;
use crate::types::{Atom, AtomKind};
use regex::{CaptureMatches, Regex, RegexBuilder};
use std::collections::VecDeque;
use std::sync::OnceLock;

const URI_SCHEME: &str = r"\b(?:https?|git|s3)://";
const URI_FULL_VALID_PATH: &str = r"(?:[!#$&-;=?-\x5B\]_a-z~]|%[0-9a-f]{2})*";
const URI_SANE_PATH: &str = r"(?:[-!#$&*+.-;=?-Z_a-z~]|%[0-9a-f]{2})*";
const URI_HOST: &str = r"[-a-zа-я0-9.@:_\+~=]{1,256}\b";
const COMMON_TLD: &str =
    r"(?:com|net|org|int|edu|gov|de|icu|uk|ru|info|top|xyz|tk|cn|ga|cf|nl|io)";
const EMAIL: &str = r"\b[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9.-]{1,256}\b";

/// Group names in priority order, paired with the kind they produce
const GROUPS: [(&str, AtomKind); 9] = [
    ("URI", AtomKind::Uri),
    ("DOI", AtomKind::Doi),
    ("DOM", AtomKind::Domain),
    ("EMAIL", AtomKind::Email),
    ("RU", AtomKind::Ru),
    ("LAT", AtomKind::Lat),
    ("INT", AtomKind::Int),
    ("PUNCT", AtomKind::Punct),
    ("OTHER", AtomKind::Other),
];

fn atom_pattern() -> String {
    let uri = format!("{URI_SCHEME}{URI_HOST}{URI_SANE_PATH}");
    let doi = format!(r"doi:10\.\d+{URI_FULL_VALID_PATH}");
    let domain = format!(r"\b[-a-zа-я0-9.]{{1,256}}\.{COMMON_TLD}{URI_SANE_PATH}");
    let punct: String = punct_chars()
        .chars()
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
        .collect();

    [
        format!("(?P<URI>{uri})"),
        format!("(?P<DOI>{doi})"),
        format!("(?P<DOM>{domain})"),
        format!("(?P<EMAIL>{EMAIL})"),
        "(?P<RU>[а-яё]+)".to_string(),
        "(?P<LAT>[a-z]+)".to_string(),
        r"(?P<INT>\d+)".to_string(),
        format!("(?P<PUNCT>[{punct}])"),
        r"(?P<OTHER>\S)".to_string(),
    ]
    .join("|")
}

fn atom_regex() -> &'static Regex {
    static ATOM: OnceLock<Regex> = OnceLock::new();
    ATOM.get_or_init(|| {
        RegexBuilder::new(&atom_pattern())
            .case_insensitive(true)
            .unicode(true)
            .size_limit(64 * (1 << 20))
            .build()
            .expect("atom pattern is a valid regex")
    })
}

/// Strip punctuation an address match swallowed from the surrounding text
///
/// An unbalanced closing `)`/`]` is removed; otherwise a trailing
/// `,:;.!?*` is removed. Repeats until neither applies, so
/// `...ch2f(ii)),` loses both the comma and the extra bracket.
pub fn clean_uri_atom(text: &str) -> &str {
    let mut cleaned = text;
    while let Some(last) = cleaned.chars().next_back() {
        let strip = match last {
            ')' | ']' => {
                let open = if last == ')' { '(' } else { '[' };
                cleaned.matches(open).count() != cleaned.matches(last).count()
            }
            ',' | ':' | ';' | '.' | '!' | '?' | '*' => true,
            _ => false,
        };
        if !strip {
            break;
        }
        cleaned = &cleaned[..cleaned.len() - last.len_utf8()];
    }
    cleaned
}

/// Produces the atom stream of a text
#[derive(Debug, Clone, Copy)]
pub struct Atomizer {
    regex: &'static Regex,
}

impl Default for Atomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Atomizer {
    pub fn new() -> Self {
        Self {
            regex: atom_regex(),
        }
    }

    /// Lazy atom stream over `text`; call again to restart
    pub fn atoms<'t>(&self, text: &'t str) -> Atoms<'static, 't> {
        Atoms {
            text,
            matches: self.regex.captures_iter(text),
            pending: VecDeque::new(),
            byte_cursor: 0,
            char_cursor: 0,
        }
    }
}

/// Iterator over the atoms of one text
pub struct Atoms<'r, 't> {
    text: &'t str,
    matches: CaptureMatches<'r, 't>,
    /// Punctuation stripped from an address, waiting to be emitted
    pending: VecDeque<Atom>,
    byte_cursor: usize,
    char_cursor: usize,
}

impl Atoms<'_, '_> {
    /// Code-point offset of byte position `byte`, moving forward only
    fn char_offset(&mut self, byte: usize) -> usize {
        self.char_cursor += self.text[self.byte_cursor..byte].chars().count();
        self.byte_cursor = byte;
        self.char_cursor
    }

    fn push_address(&mut self, start: usize, bytes: std::ops::Range<usize>, kind: AtomKind) -> Atom {
        let matched = &self.text[bytes.clone()];
        let cleaned = clean_uri_atom(matched);
        let cleaned_end = bytes.start + cleaned.len();
        let mut char_pos = start + cleaned.chars().count();

        for (offset, ch) in matched[cleaned.len()..].char_indices() {
            let byte = cleaned_end + offset;
            self.pending.push_back(Atom::new(
                char_pos,
                byte..byte + ch.len_utf8(),
                AtomKind::Punct,
                &matched[cleaned.len() + offset..cleaned.len() + offset + ch.len_utf8()],
            ));
            char_pos += 1;
        }

        if cleaned.is_empty() {
            // Nothing of the address survived; only the punctuation remains.
            return self
                .pending
                .pop_front()
                .unwrap_or_else(|| Atom::new(start, bytes, kind, matched));
        }
        Atom::new(start, bytes.start..cleaned_end, kind, cleaned)
    }
}

impl Iterator for Atoms<'_, '_> {
    type Item = Atom;

    fn next(&mut self) -> Option<Atom> {
        if let Some(atom) = self.pending.pop_front() {
            return Some(atom);
        }

        let captures = self.matches.next()?;
        let (kind, found) = GROUPS
            .iter()
            .find_map(|(name, kind)| captures.name(name).map(|m| (*kind, m)))?;

        let start = self.char_offset(found.start());
        if kind.is_address() {
            Some(self.push_address(start, found.range(), kind))
        } else {
            Some(Atom::new(start, found.range(), kind, found.as_str()))
        }
    }
}
