//! Lexical oracles consulted by the rule chain
//!
//! Two capabilities are injected into a tokenizer: a word dictionary (is
//! `что-то` a word?) and an abbreviation dictionary (is `т.д` an
//! abbreviation?). Both answer the same question through [`WordDictionary`]
//! and are shared read-only across threads.

pub mod config;

use crate::types::Lang;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

pub use config::TokenizerConfig;

/// Read-only "is this word known" capability
///
/// Queries are lowercase. Hyphenated words are joined with `-`
/// (`что-то`), abbreviation pairs with `.` and without the final dot
/// (`т.д`).
pub trait WordDictionary: Send + Sync + fmt::Debug {
    fn is_word_known(&self, word: &str, lang: Lang) -> bool;
}

impl<T: WordDictionary + ?Sized> WordDictionary for Arc<T> {
    fn is_word_known(&self, word: &str, lang: Lang) -> bool {
        (**self).is_word_known(word, lang)
    }
}

/// Dictionary that knows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWords;

impl WordDictionary for NoWords {
    fn is_word_known(&self, _word: &str, _lang: Lang) -> bool {
        false
    }
}

/// In-memory word set per language
#[derive(Debug, Clone, Default)]
pub struct WordList {
    ru: HashSet<String>,
    en: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one word; stored lowercase, a trailing dot is dropped
    pub fn insert(&mut self, word: &str, lang: Lang) {
        let word = word.trim().trim_end_matches('.').to_lowercase();
        if word.is_empty() {
            return;
        }
        match lang {
            Lang::Ru => self.ru.insert(word),
            Lang::En => self.en.insert(word),
        };
    }

    pub fn with_words<I, S>(mut self, lang: Lang, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref(), lang);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.ru.len() + self.en.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WordDictionary for WordList {
    fn is_word_known(&self, word: &str, lang: Lang) -> bool {
        match lang {
            Lang::Ru => self.ru.contains(word),
            Lang::En => self.en.contains(word),
        }
    }
}

/// Abbreviations shipped with the crate
///
/// Loaded once from the embedded `configs/builtin.toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAbbreviations;

impl BuiltinAbbreviations {
    fn table() -> &'static WordList {
        static TABLE: OnceLock<WordList> = OnceLock::new();
        TABLE.get_or_init(|| {
            match TokenizerConfig::from_toml_str(include_str!("../../configs/builtin.toml")) {
                Ok(config) => config.abbreviation_list(),
                Err(e) => {
                    log::warn!("Failed to load built-in abbreviations: {e}");
                    WordList::new()
                }
            }
        })
    }

    /// Number of built-in entries across both languages
    pub fn len(&self) -> usize {
        Self::table().len()
    }

    pub fn is_empty(&self) -> bool {
        Self::table().is_empty()
    }
}

impl WordDictionary for BuiltinAbbreviations {
    fn is_word_known(&self, word: &str, lang: Lang) -> bool {
        Self::table().is_word_known(word, lang)
    }
}

/// Union of several dictionaries; a word is known if any member knows it
#[derive(Debug, Clone, Default)]
pub struct AnyOf {
    members: Vec<Arc<dyn WordDictionary>>,
}

impl AnyOf {
    pub fn new(members: Vec<Arc<dyn WordDictionary>>) -> Self {
        Self { members }
    }

    pub fn push(&mut self, member: Arc<dyn WordDictionary>) {
        self.members.push(member);
    }
}

impl WordDictionary for AnyOf {
    fn is_word_known(&self, word: &str, lang: Lang) -> bool {
        self.members
            .iter()
            .any(|member| member.is_word_known(word, lang))
    }
}
