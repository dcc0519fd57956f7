//! Tokenizer facade: profile selection, oracle injection, batch API

use crate::atoms::{Atomizer, Atoms};
use crate::error::{Result, TokenizerError};
use crate::lexicon::{AnyOf, BuiltinAbbreviations, NoWords, TokenizerConfig, WordDictionary};
use crate::postprocess::{ContractionSplitter, PostProcess};
use crate::rules::RuleChain;
use crate::segmenter::Segments;
use crate::types::Token;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which language layers run before the shared rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Russian layer, no contraction splitting
    Russian,
    /// English layer and contraction splitting
    English,
    /// Both layers and contraction splitting
    #[default]
    Mixed,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Mixed, Profile::Russian, Profile::English];

    pub fn code(&self) -> &'static str {
        match self {
            Profile::Russian => "ru",
            Profile::English => "en",
            Profile::Mixed => "mixed",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Russian => "Russian",
            Profile::English => "English",
            Profile::Mixed => "Mixed",
        }
    }

    pub fn has_russian(&self) -> bool {
        matches!(self, Profile::Russian | Profile::Mixed)
    }

    pub fn has_english(&self) -> bool {
        matches!(self, Profile::English | Profile::Mixed)
    }

    /// Contraction splitting runs after assembly
    pub fn splits_contractions(&self) -> bool {
        self.has_english()
    }
}

impl FromStr for Profile {
    type Err = TokenizerError;

    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Ok(Profile::Russian),
            "en" | "eng" | "english" => Ok(Profile::English),
            "mixed" | "ru+en" => Ok(Profile::Mixed),
            _ => Err(TokenizerError::UnsupportedLanguage(code.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fluent builder for [`Tokenizer`]
#[derive(Debug, Default)]
pub struct TokenizerBuilder {
    profile: Profile,
    words: Option<Arc<dyn WordDictionary>>,
    abbreviations: Option<Arc<dyn WordDictionary>>,
    contractions: Vec<(String, Vec<String>)>,
    threads: Option<usize>,
}

impl TokenizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded from a configuration file's contents
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self::new().profile(config.profile()?);

        let words = config.word_list();
        if !words.is_empty() {
            builder = builder.words(Arc::new(words));
        }

        let listed = config.abbreviation_list();
        let abbreviations: Arc<dyn WordDictionary> =
            match (config.abbreviations.builtin, listed.is_empty()) {
                (true, true) => Arc::new(BuiltinAbbreviations),
                (true, false) => {
                    let mut union = AnyOf::default();
                    union.push(Arc::new(BuiltinAbbreviations));
                    union.push(Arc::new(listed));
                    Arc::new(union)
                }
                (false, _) => Arc::new(listed),
            };
        builder = builder.abbreviations(abbreviations);

        for (form, parts) in &config.contractions {
            builder = builder.contraction(form, parts.clone());
        }
        Ok(builder)
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the profile by code (`ru`, `en`, `mixed`)
    pub fn language(self, code: &str) -> Result<Self> {
        Ok(self.profile(code.parse()?))
    }

    /// Word oracle consulted for dashed compounds
    pub fn words(mut self, words: Arc<dyn WordDictionary>) -> Self {
        self.words = Some(words);
        self
    }

    /// Abbreviation oracle consulted for dotted abbreviations
    pub fn abbreviations(mut self, abbreviations: Arc<dyn WordDictionary>) -> Self {
        self.abbreviations = Some(abbreviations);
        self
    }

    /// Extra contraction form; checked in [`build`](Self::build)
    pub fn contraction(mut self, form: impl Into<String>, parts: Vec<String>) -> Self {
        self.contractions.push((form.into(), parts));
        self
    }

    /// Worker threads for [`Tokenizer::tokenize_batch`] (None = rayon default)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    pub fn build(self) -> Result<Tokenizer> {
        if self.threads == Some(0) {
            return Err(TokenizerError::Configuration(
                "threads must be greater than 0".into(),
            ));
        }

        let words = self.words.unwrap_or_else(|| Arc::new(NoWords));
        let abbreviations = self
            .abbreviations
            .unwrap_or_else(|| Arc::new(BuiltinAbbreviations));
        let chain = RuleChain::for_profile(self.profile, words, abbreviations);

        let contractions = if self.profile.splits_contractions() {
            ContractionSplitter::english().with_entries(self.contractions)?
        } else {
            // validated all the same so a bad config fails for every profile
            let ignored = self.contractions.len();
            ContractionSplitter::empty().with_entries(self.contractions)?;
            if ignored > 0 {
                log::warn!(
                    "{ignored} contraction entries ignored: {} profile does not split contractions",
                    self.profile
                );
            }
            ContractionSplitter::empty()
        };

        log::debug!(
            "Built {} tokenizer: {} rules, {} contraction forms",
            self.profile,
            chain.len(),
            contractions.len()
        );

        Ok(Tokenizer {
            profile: self.profile,
            atomizer: Atomizer::new(),
            chain,
            contractions,
            threads: self.threads,
        })
    }
}

/// Token stream returned by [`Tokenizer::tokenize_iter`]
pub type Tokens<'a> = PostProcess<'a, Segments<'a>>;

/// Word tokenizer for Russian and English text
///
/// Immutable once built; share it across threads freely.
pub struct Tokenizer {
    profile: Profile,
    atomizer: Atomizer,
    chain: RuleChain,
    contractions: ContractionSplitter,
    threads: Option<usize>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("profile", &self.profile)
            .field("rules", &self.chain)
            .field("contractions", &self.contractions.len())
            .finish()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Mixed profile, no word oracle, built-in abbreviations
    pub fn new() -> Self {
        Self::with_profile(Profile::Mixed)
    }

    /// Given profile with the default oracles
    pub fn with_profile(profile: Profile) -> Self {
        let chain = RuleChain::for_profile(
            profile,
            Arc::new(NoWords),
            Arc::new(BuiltinAbbreviations),
        );
        let contractions = if profile.splits_contractions() {
            ContractionSplitter::english()
        } else {
            ContractionSplitter::empty()
        };
        Self {
            profile,
            atomizer: Atomizer::new(),
            chain,
            contractions,
            threads: None,
        }
    }

    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Build from a configuration file
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = TokenizerConfig::from_file(path)?;
        TokenizerBuilder::from_config(&config)?.build()
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn rules(&self) -> &RuleChain {
        &self.chain
    }

    /// Raw atom stream, before any joining
    pub fn atoms<'t>(&self, text: &'t str) -> Atoms<'static, 't> {
        self.atomizer.atoms(text)
    }

    /// Lazy token stream over `text`
    pub fn tokenize_iter<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        let atoms = self.atomizer.atoms(text).collect();
        self.contractions
            .apply(Segments::new(text, atoms, &self.chain))
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenize_iter(text).collect()
    }

    /// Tokenize many texts; results keep input order
    pub fn tokenize_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<Token>>>
    where
        S: AsRef<str> + Sync,
    {
        self.tokenize_batch_with(texts, |_| {})
    }

    /// [`Tokenizer::tokenize_batch`] calling `on_done` with the index of each
    /// text as soon as it is tokenized, in completion order
    #[cfg(feature = "parallel")]
    pub fn tokenize_batch_with<S, F>(&self, texts: &[S], on_done: F) -> Result<Vec<Vec<Token>>>
    where
        S: AsRef<str> + Sync,
        F: Fn(usize) + Sync,
    {
        let run = || {
            texts
                .par_iter()
                .enumerate()
                .map(|(index, text)| {
                    let tokens = self.tokenize(text.as_ref());
                    on_done(index);
                    tokens
                })
                .collect::<Vec<_>>()
        };

        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| TokenizerError::Configuration(e.to_string()))?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }

    /// [`Tokenizer::tokenize_batch`] calling `on_done` with the index of each
    /// text as soon as it is tokenized
    #[cfg(not(feature = "parallel"))]
    pub fn tokenize_batch_with<S, F>(&self, texts: &[S], on_done: F) -> Result<Vec<Vec<Token>>>
    where
        S: AsRef<str> + Sync,
        F: Fn(usize) + Sync,
    {
        Ok(texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = self.tokenize(text.as_ref());
                on_done(index);
                tokens
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordList;
    use crate::types::Lang;

    fn texts(tokenizer: &Tokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_profile_codes() {
        assert_eq!("ru".parse::<Profile>().unwrap(), Profile::Russian);
        assert_eq!("English".parse::<Profile>().unwrap(), Profile::English);
        assert_eq!(" MIXED ".parse::<Profile>().unwrap(), Profile::Mixed);
        assert!(matches!(
            "de".parse::<Profile>(),
            Err(TokenizerError::UnsupportedLanguage(_))
        ));
        assert_eq!(Profile::default(), Profile::Mixed);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Tokenizer>();
    }

    #[test]
    fn test_profiles_differ_on_contractions() {
        let mixed = Tokenizer::new();
        let russian = Tokenizer::with_profile(Profile::Russian);
        assert_eq!(texts(&mixed, "can't"), vec!["ca", "n't"]);
        assert_eq!(texts(&russian, "can't"), vec!["can", "'", "t"]);
    }

    #[test]
    fn test_injected_word_oracle() {
        let words = WordList::new().with_words(Lang::Ru, ["что-то"]);
        let tokenizer = Tokenizer::builder()
            .words(Arc::new(words))
            .build()
            .unwrap();
        assert_eq!(texts(&tokenizer, "что-то"), vec!["что-то"]);
        assert_eq!(texts(&Tokenizer::new(), "что-то"), vec!["что", "-", "то"]);
    }

    #[test]
    fn test_custom_contraction() {
        let tokenizer = Tokenizer::builder()
            .language("en")
            .unwrap()
            .contraction("dunno", vec!["dun".into(), "no".into()])
            .build()
            .unwrap();
        assert_eq!(texts(&tokenizer, "I dunno"), vec!["I", "dun", "no"]);

        let err = Tokenizer::builder()
            .contraction("dunno", vec!["dunno".into()])
            .build()
            .unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedContraction { .. }));

        let err = Tokenizer::builder()
            .profile(Profile::Russian)
            .contraction("dunno", vec!["du".into(), "no".into()])
            .build()
            .unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedContraction { .. }));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = Tokenizer::builder().threads(Some(0)).build().unwrap_err();
        assert!(matches!(err, TokenizerError::Configuration(_)));
    }

    #[test]
    fn test_from_config() {
        let config = TokenizerConfig::from_toml_str(
            r#"
[metadata]
language = "ru"

[words]
ru = ["кое-как"]

[abbreviations]
ru = ["им"]
builtin = false
"#,
        )
        .unwrap();
        let tokenizer = TokenizerBuilder::from_config(&config).unwrap().build().unwrap();
        assert_eq!(tokenizer.profile(), Profile::Russian);
        assert_eq!(texts(&tokenizer, "Кое-как, им."), vec!["Кое-как", ",", "им."]);
        // builtin table switched off
        assert_eq!(texts(&tokenizer, "ул."), vec!["ул", "."]);
    }

    #[test]
    fn test_batch_keeps_order() {
        let tokenizer = Tokenizer::builder().threads(Some(2)).build().unwrap();
        let inputs = vec!["1,5 кг", "", "can't stop", "т.д."];
        let batch = tokenizer.tokenize_batch(&inputs).unwrap();
        assert_eq!(batch.len(), 4);
        for (input, tokens) in inputs.iter().zip(&batch) {
            assert_eq!(&tokenizer.tokenize(input), tokens);
        }
        assert!(batch[1].is_empty());
    }

    #[test]
    fn test_batch_reports_each_text() {
        use std::sync::Mutex;

        let tokenizer = Tokenizer::builder().threads(Some(3)).build().unwrap();
        let inputs = ["один", "two", "3x4", "т.д."];
        let done = Mutex::new(Vec::new());
        let batch = tokenizer
            .tokenize_batch_with(&inputs, |index| done.lock().unwrap().push(index))
            .unwrap();

        let mut done = done.into_inner().unwrap();
        done.sort_unstable();
        assert_eq!(done, vec![0, 1, 2, 3]);
        assert_eq!(batch[2][0].text, "3x4");
    }
}
