//! Punctuation stripping, lowercasing and whitespace tokenization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is neither a word character nor whitespace.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Removes punctuation, lowercases, and splits on runs of whitespace.
///
/// Word characters follow Unicode rules (letters, marks, digits and
/// connector punctuation such as `_`). The returned tokens are never empty.
pub fn normalize(text: &str) -> Vec<String> {
    NON_WORD
        .replace_all(text, "")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(
            normalize("Hello, World! It's 2024_Q1."),
            vec!["hello", "world", "its", "2024_q1"]
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("  a \t\n b   "), vec!["a", "b"]);
    }

    #[test]
    fn punctuation_only_input_yields_nothing() {
        assert!(normalize("!!! ... ---").is_empty());
        assert!(normalize("").is_empty());
    }

    #[test]
    fn punctuation_joins_adjacent_words() {
        assert_eq!(normalize("e-mail co.uk"), vec!["email", "couk"]);
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(normalize("Café Über"), vec!["café", "über"]);
    }

    #[test]
    fn is_idempotent_on_its_output() {
        let once = normalize("Some <b>MIXED</b> text, with: punctuation!!");
        let twice = normalize(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn output_has_no_punctuation_or_uppercase() {
        for token in normalize("A.B,C;D:E?F(G)H[I]J{K}L'M\"N") {
            assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'));
            assert_eq!(token, token.to_lowercase());
        }
    }
}
