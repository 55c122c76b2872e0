//! Stemming capability for the clean-and-stem pipeline.
//!
//! License: MIT OR APACHE 2.0

use rust_stemmers::Algorithm;

use crate::errors::CleanTextError;

/// Reduces a single token to its stem.
pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> String;

    /// Stems every token, keeping length and order.
    fn stem_all(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.iter().map(|t| self.stem(t)).collect()
    }
}

/// Snowball stemmer backed by `rust-stemmers`.
pub struct SnowballStemmer {
    language: &'static str,
    inner: rust_stemmers::Stemmer,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl SnowballStemmer {
    /// Creates a stemmer for a Snowball language name such as "english".
    pub fn new(language: &str) -> Result<Self, CleanTextError> {
        let (language, algorithm) = match language.to_lowercase().as_str() {
            "english" | "en" => ("english", Algorithm::English),
            "arabic" | "ar" => ("arabic", Algorithm::Arabic),
            "danish" | "da" => ("danish", Algorithm::Danish),
            "dutch" | "nl" => ("dutch", Algorithm::Dutch),
            "finnish" | "fi" => ("finnish", Algorithm::Finnish),
            "french" | "fr" => ("french", Algorithm::French),
            "german" | "de" => ("german", Algorithm::German),
            "greek" | "el" => ("greek", Algorithm::Greek),
            "hungarian" | "hu" => ("hungarian", Algorithm::Hungarian),
            "italian" | "it" => ("italian", Algorithm::Italian),
            "norwegian" | "no" => ("norwegian", Algorithm::Norwegian),
            "portuguese" | "pt" => ("portuguese", Algorithm::Portuguese),
            "romanian" | "ro" => ("romanian", Algorithm::Romanian),
            "russian" | "ru" => ("russian", Algorithm::Russian),
            "spanish" | "es" => ("spanish", Algorithm::Spanish),
            "swedish" | "sv" => ("swedish", Algorithm::Swedish),
            "tamil" | "ta" => ("tamil", Algorithm::Tamil),
            "turkish" | "tr" => ("turkish", Algorithm::Turkish),
            other => {
                return Err(CleanTextError::capability(
                    "stemmer",
                    format!("no Snowball algorithm for language '{other}'"),
                ))
            }
        };
        Ok(Self {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm),
        })
    }

    pub fn english() -> Self {
        Self {
            language: "english",
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }

    pub fn language(&self) -> &str {
        self.language
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_stems_common_suffixes() {
        let stemmer = SnowballStemmer::english();
        let tokens = vec!["running".to_string(), "flies".to_string(), "happiness".to_string()];
        assert_eq!(stemmer.stem_all(tokens), vec!["run", "fli", "happi"]);
    }

    #[test]
    fn stem_all_preserves_length() {
        let stemmer = SnowballStemmer::english();
        let tokens: Vec<String> = ["a", "the", "connections", "x"].iter().map(|s| s.to_string()).collect();
        let stems = stemmer.stem_all(tokens.clone());
        assert_eq!(stems.len(), tokens.len());
        assert_eq!(stems[2], "connect");
    }

    #[test]
    fn language_lookup_accepts_codes() {
        assert_eq!(SnowballStemmer::new("EN").unwrap().language(), "english");
        assert_eq!(SnowballStemmer::new("german").unwrap().language(), "german");
    }

    #[test]
    fn unknown_language_is_a_capability_error() {
        let err = SnowballStemmer::new("esperanto").unwrap_err();
        assert!(matches!(err, CleanTextError::CapabilityInitError { capability: "stemmer", .. }));
    }
}
