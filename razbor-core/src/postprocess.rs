//! Forced splitting of English contractions
//!
//! The rule chain keeps `can't` together so that apostrophe handling stays
//! simple; this pass cuts such tokens at a fixed point afterwards
//! (`can't` → `ca` + `n't`, `gonna` → `gon` + `na`).

use crate::error::{Result, TokenizerError};
use crate::types::Token;
use std::collections::HashMap;

/// Lowercase form and its two parts
const CONTRACTIONS: &[(&str, &str, &str)] = &[
    ("can't", "ca", "n't"),
    ("cannot", "can", "not"),
    ("didn't", "did", "n't"),
    ("don't", "do", "n't"),
    ("doesn't", "does", "n't"),
    ("won't", "wo", "n't"),
    ("haven't", "have", "n't"),
    ("hasn't", "has", "n't"),
    ("hadn't", "had", "n't"),
    ("isn't", "is", "n't"),
    ("wasn't", "was", "n't"),
    ("aren't", "are", "n't"),
    ("ain't", "ai", "n't"),
    ("weren't", "were", "n't"),
    ("couldn't", "could", "n't"),
    ("shouldn't", "should", "n't"),
    ("wouldn't", "would", "n't"),
    ("youll", "you", "ll"),
    ("thats", "that", "s"),
    ("theres", "there", "s"),
    ("im", "i", "m"),
    ("ive", "i", "ve"),
    ("hes", "he", "s"),
    ("youre", "you", "re"),
    ("ur", "u", "r"),
    ("wanna", "wan", "na"),
    ("gonna", "gon", "na"),
    ("gotta", "got", "ta"),
    ("outta", "out", "ta"),
    ("sorta", "sort", "a"),
];

/// Spellings of the apostrophe in contraction forms: dropped, typographic
const APOSTROPHE_VARIANTS: [&str; 2] = ["", "’"];

/// Prefixes that precede `'t` in the contraction table (`can`, `don`, ...)
pub fn contraction_prefixes() -> impl Iterator<Item = &'static str> {
    CONTRACTIONS
        .iter()
        .filter_map(|(form, _, _)| form.find('\'').map(|idx| &form[..idx]))
}

/// Check that `parts` split `form` in exactly two non-empty pieces
pub fn check_contraction<S: AsRef<str>>(form: &str, parts: &[S]) -> Result<()> {
    let malformed = |reason: String| TokenizerError::MalformedContraction {
        form: form.to_string(),
        reason,
    };

    if form.is_empty() {
        return Err(malformed("empty form".to_string()));
    }
    if parts.len() != 2 {
        return Err(malformed(format!("expected 2 parts, got {}", parts.len())));
    }
    let (head, tail) = (parts[0].as_ref(), parts[1].as_ref());
    if head.is_empty() || tail.is_empty() {
        return Err(malformed("parts must be non-empty".to_string()));
    }
    if format!("{head}{tail}").to_lowercase() != form.to_lowercase() {
        return Err(malformed(format!("{head:?} + {tail:?} does not spell the form")));
    }
    Ok(())
}

/// Splits tokens whose lowercase text is a known contraction
#[derive(Debug, Clone)]
pub struct ContractionSplitter {
    /// Lowercase form to the code-point length of its first part
    table: HashMap<String, usize>,
}

impl Default for ContractionSplitter {
    fn default() -> Self {
        Self::english()
    }
}

impl ContractionSplitter {
    /// The English table with its apostrophe variants
    pub fn english() -> Self {
        let mut splitter = Self {
            table: HashMap::with_capacity(CONTRACTIONS.len() * 2),
        };
        for (form, head, _) in CONTRACTIONS {
            splitter.insert_with_variants(form, head);
        }
        splitter
    }

    /// Splitter that leaves every token alone
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Add entries; each is validated first
    pub fn with_entries<I, P>(mut self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, P)>,
        P: AsRef<[String]>,
    {
        for (form, parts) in entries {
            let parts = parts.as_ref();
            check_contraction(&form, parts)?;
            self.insert_with_variants(&form.to_lowercase(), &parts[0].to_lowercase());
        }
        Ok(self)
    }

    fn insert_with_variants(&mut self, form: &str, head: &str) {
        self.table.insert(form.to_string(), head.chars().count());
        if form.contains('\'') {
            for variant in APOSTROPHE_VARIANTS {
                self.table.insert(
                    form.replace('\'', variant),
                    head.replace('\'', variant).chars().count(),
                );
            }
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, form: &str) -> bool {
        self.table.contains_key(&form.to_lowercase())
    }

    /// Cut `token` in two if it is a known form
    pub fn split(&self, token: &Token) -> Option<(Token, Token)> {
        let head_chars = *self.table.get(&token.text.to_lowercase())?;
        let (mid, _) = token.text.char_indices().nth(head_chars)?;

        let mid_byte = token.bytes.start + mid;
        let head = Token::new(
            token.start,
            token.bytes.start..mid_byte,
            &token.text[..mid],
            token.kind,
        );
        let tail = Token::new(
            head.stop,
            mid_byte..token.bytes.end,
            &token.text[mid..],
            token.kind,
        );
        Some((head, tail))
    }

    /// Lazily split every contraction in a token stream
    pub fn apply<I>(&self, tokens: I) -> PostProcess<'_, I>
    where
        I: Iterator<Item = Token>,
    {
        PostProcess {
            splitter: self,
            tokens,
            pending: None,
        }
    }
}

/// Iterator returned by [`ContractionSplitter::apply`]
pub struct PostProcess<'s, I> {
    splitter: &'s ContractionSplitter,
    tokens: I,
    pending: Option<Token>,
}

impl<I> Iterator for PostProcess<'_, I>
where
    I: Iterator<Item = Token>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(tail) = self.pending.take() {
            return Some(tail);
        }
        let token = self.tokens.next()?;
        match self.splitter.split(&token) {
            Some((head, tail)) => {
                self.pending = Some(tail);
                Some(head)
            }
            None => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AtomKind;

    fn token(start: usize, byte_start: usize, text: &str) -> Token {
        Token::new(
            start,
            byte_start..byte_start + text.len(),
            text,
            AtomKind::Lat.into(),
        )
    }

    fn texts(tokens: impl Iterator<Item = Token>) -> Vec<String> {
        tokens.map(|t| t.text).collect()
    }

    #[test]
    fn test_table_variants() {
        let splitter = ContractionSplitter::english();
        assert!(splitter.contains("can't"));
        assert!(splitter.contains("can’t"));
        assert!(splitter.contains("cant"));
        assert!(splitter.contains("DON'T"));
        assert!(!splitter.contains("kinda"));
    }

    #[test]
    fn test_split_keeps_original_case_and_offsets() {
        let splitter = ContractionSplitter::english();
        let (head, tail) = splitter.split(&token(4, 4, "DON’T")).unwrap();
        assert_eq!((head.text.as_str(), head.start, head.stop), ("DO", 4, 6));
        assert_eq!((tail.text.as_str(), tail.start, tail.stop), ("N’T", 6, 9));
        assert_eq!(head.bytes, 4..6);
        assert_eq!(tail.bytes, 6..11);
    }

    #[test]
    fn test_apply_stream() {
        let splitter = ContractionSplitter::english();
        let tokens = vec![
            token(0, 0, "I"),
            token(2, 2, "wouldnt"),
            token(10, 10, "sorta"),
            token(16, 16, "kinda"),
        ];
        assert_eq!(
            texts(splitter.apply(tokens.into_iter())),
            vec!["I", "would", "nt", "sort", "a", "kinda"]
        );
    }

    #[test]
    fn test_prefixes() {
        let prefixes: Vec<&str> = contraction_prefixes().collect();
        assert!(prefixes.contains(&"can"));
        assert!(prefixes.contains(&"don"));
        assert!(prefixes.contains(&"wouldn"));
        assert!(!prefixes.contains(&"cannot"));
    }

    #[test]
    fn test_custom_entries() {
        let splitter = ContractionSplitter::english()
            .with_entries([("Dunno".to_string(), vec!["dun".to_string(), "no".to_string()])])
            .unwrap();
        assert!(splitter.contains("dunno"));

        let err = ContractionSplitter::english()
            .with_entries([("gimme".to_string(), vec!["gimme".to_string()])])
            .unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedContraction { .. }));
    }

    #[test]
    fn test_check_contraction() {
        assert!(check_contraction("can't", &["ca", "n't"]).is_ok());
        assert!(check_contraction("can't", &["can", "'t", "x"]).is_err());
        assert!(check_contraction("can't", &["", "can't"]).is_err());
        assert!(check_contraction("can't", &["ca", "nt"]).is_err());
    }
}
