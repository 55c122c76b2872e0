//! Pattern-based redaction, the first pipeline stage.
//!
//! The redactor applies its compiled rules in order. Each rule replaces every
//! non-overlapping match with its replacement text (empty for the built-in
//! rules) before the next rule sees the result. Matching is case-sensitive and
//! happens on the raw text, before any lowercasing.
//!
//! License: MIT OR APACHE 2.0

use regex::Captures;
use std::sync::Arc;

use crate::config::CleanConfig;
use crate::errors::CleanTextError;
use crate::sanitizers::compiler::{get_or_compile_rules, CompiledRules};

/// Per-rule count of matches removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
}

/// Running totals of redactions, kept in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionTally {
    items: Vec<RedactionSummaryItem>,
}

impl RedactionTally {
    fn record(&mut self, rule_name: &str, occurrences: usize) {
        match self.items.iter_mut().find(|i| i.rule_name == rule_name) {
            Some(item) => item.occurrences += occurrences,
            None => self.items.push(RedactionSummaryItem {
                rule_name: rule_name.to_string(),
                occurrences,
            }),
        }
    }

    /// Items in the order their rules are applied.
    pub fn items(&self) -> &[RedactionSummaryItem] {
        &self.items
    }

    /// Occurrences recorded for one rule, zero if it never ran.
    pub fn occurrences(&self, rule_name: &str) -> usize {
        self.items
            .iter()
            .find(|i| i.rule_name == rule_name)
            .map_or(0, |i| i.occurrences)
    }

    pub fn total(&self) -> usize {
        self.items.iter().map(|i| i.occurrences).sum()
    }
}

/// Strips emails, markup fragments and URL-like tokens from raw text.
#[derive(Debug, Clone)]
pub struct Redactor {
    compiled_rules: Arc<CompiledRules>,
}

impl Redactor {
    /// Builds a redactor from the rules of `config`, compiling them if needed.
    pub fn new(config: &CleanConfig) -> Result<Self, CleanTextError> {
        let compiled_rules = get_or_compile_rules(&config.rules)?;
        Ok(Self { compiled_rules })
    }

    /// Builds a redactor over the embedded default rules.
    pub fn with_default_rules() -> Result<Self, CleanTextError> {
        Self::new(&CleanConfig::load_default_rules()?)
    }

    pub fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    /// Applies every rule in order and returns the redacted text.
    pub fn redact(&self, content: &str) -> String {
        let mut text = content.to_string();
        for rule in &self.compiled_rules.rules {
            text = rule
                .regex
                .replace_all(&text, rule.replace_with.as_str())
                .into_owned();
        }
        text
    }

    /// Same as [`redact`](Self::redact), also counting matches per rule into `tally`.
    pub fn redact_with_tally(&self, content: &str, tally: &mut RedactionTally) -> String {
        let mut text = content.to_string();
        for rule in &self.compiled_rules.rules {
            let mut occurrences = 0usize;
            text = rule
                .regex
                .replace_all(&text, |caps: &Captures| {
                    occurrences += 1;
                    let mut dst = String::new();
                    caps.expand(&rule.replace_with, &mut dst);
                    dst
                })
                .into_owned();
            tally.record(&rule.name, occurrences);
        }
        text
    }
}
