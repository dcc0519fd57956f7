//! Value types flowing through the tokenizer pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Class of a minimal span produced by the atomizer
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AtomKind {
    /// Cyrillic letter run
    #[serde(rename = "RU")]
    Ru,
    /// Latin letter run
    #[serde(rename = "LAT")]
    Lat,
    /// Digit run
    #[serde(rename = "INT")]
    Int,
    /// Single punctuation character
    #[serde(rename = "PUNCT")]
    Punct,
    /// `scheme://host/path`
    #[serde(rename = "URI")]
    Uri,
    /// `doi:10.NNNN/...`
    #[serde(rename = "DOI")]
    Doi,
    /// Bare host with a known top-level domain
    #[serde(rename = "DOM")]
    Domain,
    /// `local@host`
    #[serde(rename = "EMAIL")]
    Email,
    /// Any other non-space character
    #[serde(rename = "OTHER")]
    Other,
}

impl AtomKind {
    /// Name used in token output
    pub fn as_str(&self) -> &'static str {
        match self {
            AtomKind::Ru => "RU",
            AtomKind::Lat => "LAT",
            AtomKind::Int => "INT",
            AtomKind::Punct => "PUNCT",
            AtomKind::Uri => "URI",
            AtomKind::Doi => "DOI",
            AtomKind::Domain => "DOM",
            AtomKind::Email => "EMAIL",
            AtomKind::Other => "OTHER",
        }
    }

    /// Letter runs of either script
    #[inline]
    pub fn is_word(&self) -> bool {
        matches!(self, AtomKind::Ru | AtomKind::Lat)
    }

    /// Addresses that go through trailing-punctuation repair
    #[inline]
    pub fn is_address(&self) -> bool {
        matches!(
            self,
            AtomKind::Uri | AtomKind::Doi | AtomKind::Domain | AtomKind::Email
        )
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal classified span of the input
///
/// `start`/`stop` are code-point offsets; `bytes` is the same span in bytes
/// so gaps and token buffers can be sliced from the source without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub start: usize,
    pub stop: usize,
    pub bytes: Range<usize>,
    pub kind: AtomKind,
    pub text: String,
    /// Lowercased `text`, used for lexicon lookups and literal exceptions
    pub normal: String,
}

impl Atom {
    pub fn new(start: usize, bytes: Range<usize>, kind: AtomKind, text: &str) -> Self {
        let stop = start + text.chars().count();
        Self {
            start,
            stop,
            bytes,
            kind,
            text: text.to_string(),
            normal: text.to_lowercase(),
        }
    }

    /// Text is a single character from `table`
    #[inline]
    pub fn is_one_of(&self, table: &str) -> bool {
        crate::punct::is_one_of(&self.text, table)
    }

    /// First character upper-case, no other upper-case characters
    pub fn is_title(&self) -> bool {
        is_title(&self.text)
    }
}

pub(crate) fn is_title(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|ch| !ch.is_uppercase()),
        _ => false,
    }
}

/// Type tag of an emitted token
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TokenKind {
    Atom(AtomKind),
    /// Fallback for names the output mapping does not recognize
    Unknown,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Atom(kind) => kind.as_str(),
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl From<AtomKind> for TokenKind {
    fn from(kind: AtomKind) -> Self {
        TokenKind::Atom(kind)
    }
}

impl FromStr for TokenKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "RU" => AtomKind::Ru,
            "LAT" => AtomKind::Lat,
            "INT" => AtomKind::Int,
            "PUNCT" => AtomKind::Punct,
            "URI" => AtomKind::Uri,
            "DOI" => AtomKind::Doi,
            "DOM" => AtomKind::Domain,
            "EMAIL" => AtomKind::Email,
            "OTHER" => AtomKind::Other,
            _ => return Ok(TokenKind::Unknown),
        };
        Ok(TokenKind::Atom(kind))
    }
}

impl From<String> for TokenKind {
    fn from(name: String) -> Self {
        match name.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<TokenKind> for String {
    fn from(kind: TokenKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally visible unit of tokenized text
///
/// The kind of a token fused from several atoms is the kind of its first
/// atom; `"5-й"` is `INT`, `"т.д."` is `RU`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Code-point offset of the first character
    pub start: usize,
    /// Code-point offset one past the last character
    pub stop: usize,
    pub text: String,
    pub kind: TokenKind,
    /// Byte span in the source text
    #[serde(skip)]
    pub bytes: Range<usize>,
}

impl Token {
    pub fn new(start: usize, bytes: Range<usize>, text: &str, kind: TokenKind) -> Self {
        Self {
            start,
            stop: start + text.chars().count(),
            text: text.to_string(),
            kind,
            bytes,
        }
    }
}

/// Language passed to the lexical oracles
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    /// `ru` when either side is Cyrillic, `en` otherwise
    pub fn infer(left: &Atom, right: &Atom) -> Self {
        if left.kind == AtomKind::Ru || right.kind == AtomKind::Ru {
            Lang::Ru
        } else {
            Lang::En
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
