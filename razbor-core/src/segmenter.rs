//! Token assembly
//!
//! Walks the atoms left to right keeping one open token. At every boundary
//! the rule chain either extends the open token with the next atom or
//! closes it and opens a new one. Decisions are final; nothing is revisited.

use crate::rules::{Decision, RuleChain};
use crate::types::{Atom, Token};
use crate::window::Split;

/// Lazy token stream over one text
pub struct Segments<'a> {
    text: &'a str,
    atoms: Vec<Atom>,
    chain: &'a RuleChain,
    /// First atom of the next token
    index: usize,
}

impl<'a> Segments<'a> {
    pub fn new(text: &'a str, atoms: Vec<Atom>, chain: &'a RuleChain) -> Self {
        Self {
            text,
            atoms,
            chain,
            index: 0,
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let first = self.atoms.get(self.index)?;
        let start_byte = first.bytes.start;
        let mut next = self.index + 1;

        while let Some(split) = Split::at(self.text, &self.atoms, next) {
            let buffer = &self.text[start_byte..split.left_1.bytes.end];
            if self.chain.decide(&split.with_buffer(buffer)) != Decision::Join {
                break;
            }
            next += 1;
        }

        let last = &self.atoms[next - 1];
        let bytes = start_byte..last.bytes.end;
        let token = Token::new(first.start, bytes.clone(), &self.text[bytes], first.kind.into());
        self.index = next;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.atoms.len() - self.index;
        (remaining.min(1), Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Atomizer;
    use crate::lexicon::{BuiltinAbbreviations, NoWords};
    use crate::tokenizer::Profile;
    use crate::types::{AtomKind, TokenKind};
    use std::sync::Arc;

    fn segment(text: &str) -> Vec<Token> {
        let chain = RuleChain::for_profile(
            Profile::Mixed,
            Arc::new(NoWords),
            Arc::new(BuiltinAbbreviations),
        );
        let atoms = Atomizer::new().atoms(text).collect();
        Segments::new(text, atoms, &chain).collect()
    }

    #[test]
    fn test_joined_token_spans() {
        let tokens = segment("Это 5-й том.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Это", "5-й", "том", "."]);

        let fifth = &tokens[1];
        assert_eq!((fifth.start, fifth.stop), (4, 7));
        assert_eq!(fifth.kind, TokenKind::Atom(AtomKind::Int));
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(segment("").is_empty());
        assert!(segment(" \n ").is_empty());
    }

    #[test]
    fn test_single_atom() {
        let tokens = segment("  слово  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].start, tokens[0].stop), (2, 7));
        assert_eq!(tokens[0].bytes, 2..12);
    }

    #[test]
    fn test_buffer_grows_across_boundaries() {
        // each smile boundary sees the whole open token
        let texts: Vec<String> = segment(":))) ok").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec![":)))", "ok"]);
    }
}
