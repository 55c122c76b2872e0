//! Stopword corpora and the immutable stopword set.
//!
//! A [`StopwordSet`] is built once from a [`StopwordCorpus`], the fixed
//! [`DOMAIN_STOPWORDS`] and any configured extras, and is read-only from then
//! on. [`StopwordSet::english`] hands out a process-wide shared instance.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{StopwordConfig, DEFAULT_LANGUAGE};
use crate::errors::CleanTextError;

/// Greeting, sign-off and social-network terms filtered on top of the corpus.
pub const DOMAIN_STOPWORDS: &[&str] = &[
    "hello", "hi", "dear", "sir", "sirs", "thank", "facebook", "twitter", "linkedin",
];

const CAPABILITY: &str = "stopword corpus";

/// Source of the common-word list for a language.
pub trait StopwordCorpus {
    /// Returns the raw word list for `language`.
    fn load(&self, language: &str) -> Result<Vec<String>, CleanTextError>;
}

/// The English list compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCorpus;

impl StopwordCorpus for EmbeddedCorpus {
    fn load(&self, language: &str) -> Result<Vec<String>, CleanTextError> {
        match language.to_lowercase().as_str() {
            "english" | "en" => Ok(parse_word_list(include_str!(
                "../data/stopwords/english.txt"
            ))),
            other => Err(CleanTextError::capability(
                CAPABILITY,
                format!("no embedded stopword list for language '{other}'"),
            )),
        }
    }
}

/// A word list read from disk, one word per line.
///
/// Blank lines and lines starting with `#` are skipped. The language argument
/// is ignored: the file is whatever the user pointed at.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StopwordCorpus for FileCorpus {
    fn load(&self, _language: &str) -> Result<Vec<String>, CleanTextError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            CleanTextError::capability(
                CAPABILITY,
                format!("cannot read {}: {e}", self.path.display()),
            )
        })?;
        Ok(parse_word_list(&text))
    }
}

fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Immutable set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

static ENGLISH: OnceCell<Arc<StopwordSet>> = OnceCell::new();

impl StopwordSet {
    /// Corpus words for `language`, plus [`DOMAIN_STOPWORDS`], plus `extra`.
    pub fn build<C, I, S>(corpus: &C, language: &str, extra: I) -> Result<Self, CleanTextError>
    where
        C: StopwordCorpus + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = corpus.load(language)?;
        if base.is_empty() {
            return Err(CleanTextError::capability(
                CAPABILITY,
                format!("stopword list for '{language}' is empty"),
            ));
        }
        debug!("Loaded {} corpus stopwords for '{}'.", base.len(), language);

        let words: HashSet<String> = base
            .iter()
            .map(String::as_str)
            .chain(DOMAIN_STOPWORDS.iter().copied())
            .map(str::to_lowercase)
            .chain(extra.into_iter().map(|w| w.as_ref().to_lowercase()))
            .collect();

        debug!("Stopword set ready with {} entries.", words.len());
        Ok(Self { words })
    }

    /// Builds the set described by a [`StopwordConfig`].
    pub fn from_config(config: &StopwordConfig) -> Result<Self, CleanTextError> {
        match &config.corpus_file {
            Some(path) => {
                info!("Loading stopword corpus from {}", path.display());
                Self::build(&FileCorpus::new(path), &config.language, &config.extra)
            }
            None => Self::build(&EmbeddedCorpus, &config.language, &config.extra),
        }
    }

    /// The process-wide English set: embedded corpus plus domain terms.
    ///
    /// Built on first use and shared afterwards.
    pub fn english() -> Result<Arc<StopwordSet>, CleanTextError> {
        ENGLISH
            .get_or_try_init(|| {
                Self::build(&EmbeddedCorpus, DEFAULT_LANGUAGE, std::iter::empty::<&str>())
                    .map(Arc::new)
            })
            .cloned()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keeps the tokens that are not stopwords, in their original order.
    ///
    /// Matching is exact; tokens are expected to be lowercase already.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}
