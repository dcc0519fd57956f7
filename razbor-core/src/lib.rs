//! Rule-based word tokenizer for Russian and English text
//!
//! Text is carved into typed atoms (letter runs, digit runs, punctuation,
//! addresses), then a chain of boundary rules decides which neighbouring
//! atoms form one token: `5-й`, `1,5`, `20:55`, `т.д.`, `Кот-д'Ивуар`,
//! `:)))`. English contractions are cut apart at the end (`can't` → `ca`
//! `n't`).
//!
//! # Pipeline
//!
//! - [`atoms`]: prioritized regex producing [`Atom`]s, with trailing
//!   punctuation repair for URLs, DOIs, domains and emails
//! - [`window`]: three atoms of context on each side of every boundary
//! - [`rules`]: Russian, English and shared rule layers
//! - [`segmenter`]: token assembly driven by the rule chain
//! - [`postprocess`]: contraction splitting
//! - [`lexicon`]: injectable word and abbreviation dictionaries
//!
//! # Example
//!
//! ```rust
//! use razbor_core::{Tokenizer, WordList, Lang};
//! use std::sync::Arc;
//!
//! let tokenizer = Tokenizer::new();
//! let texts: Vec<String> = tokenizer
//!     .tokenize("Цена 1,5 руб., т.е. can't")
//!     .into_iter()
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(texts, ["Цена", "1,5", "руб.", ",", "т.е.", "ca", "n't"]);
//!
//! // Dashed words are only joined when a dictionary knows them
//! let words = WordList::new().with_words(Lang::Ru, ["что-то"]);
//! let tokenizer = Tokenizer::builder().words(Arc::new(words)).build().unwrap();
//! assert_eq!(tokenizer.tokenize("что-то").len(), 1);
//! ```

pub mod atoms;
pub mod error;
pub mod lexicon;
pub mod postprocess;
pub mod punct;
pub mod rules;
pub mod segmenter;
pub mod tokenizer;
pub mod types;
pub mod window;

pub use atoms::{clean_uri_atom, Atomizer};
pub use error::{Result, TokenizerError};
pub use lexicon::{AnyOf, BuiltinAbbreviations, NoWords, TokenizerConfig, WordDictionary, WordList};
pub use postprocess::ContractionSplitter;
pub use rules::{Decision, Rule, RuleChain};
pub use tokenizer::{Profile, Tokenizer, TokenizerBuilder, Tokens};
pub use types::{Atom, AtomKind, Lang, Token, TokenKind};
pub use window::Split;

use std::sync::OnceLock;

/// Tokenize with the default mixed-language tokenizer
pub fn tokenize(text: &str) -> Vec<Token> {
    static DEFAULT: OnceLock<Tokenizer> = OnceLock::new();
    DEFAULT.get_or_init(Tokenizer::new).tokenize(text)
}
