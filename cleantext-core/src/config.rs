//! Configuration management for `cleantext-core`.
//!
//! This module defines the core data structures for redaction rules, stopword
//! settings and cell handling. It handles deserialization of YAML
//! configurations and provides utilities for loading, merging, and validating
//! these configs.
//!
//! Rule order matters: rules are applied top to bottom, so every operation
//! here keeps the order in which rules were declared.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Language used when a config does not name one.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Represents a single redaction rule applied by the [`Redactor`](crate::Redactor).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RedactionRule {
    /// Unique identifier for the rule (e.g., "email").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// The string to replace matches with. `$1`-style group references are allowed.
    pub replace_with: String,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
    /// If true, the rule is disabled unless explicitly enabled.
    pub opt_in: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
    /// Metadata tags for categorization.
    pub tags: Option<Vec<String>>,
}

impl Default for RedactionRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: None,
            replace_with: String::new(),
            multiline: false,
            dot_matches_new_line: false,
            opt_in: false,
            enabled: None,
            tags: None,
        }
    }
}

/// Where the stopword set comes from and what gets added to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StopwordConfig {
    /// Corpus language, e.g. "english".
    pub language: String,
    /// Additional words filtered on top of the corpus and the built-in domain terms.
    pub extra: Vec<String>,
    /// Load the base corpus from this file instead of the embedded list.
    pub corpus_file: Option<PathBuf>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            extra: Vec::new(),
            corpus_file: None,
        }
    }
}

/// How to treat designated-column cells that are not text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellPolicy {
    /// Render the value as text and keep going.
    #[default]
    Coerce,
    /// Fail the run with `InvalidCellType`.
    Strict,
}

/// Represents the top-level configuration structure for cleantext.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CleanConfig {
    /// Ordered list of regex-based redaction rules.
    pub rules: Vec<RedactionRule>,
    /// Stopword corpus settings.
    pub stopwords: StopwordConfig,
    /// Handling of non-text cells in the designated column.
    pub cells: CellPolicy,
}

lazy_static! {
    static ref CAPTURE_REFERENCE: Regex = Regex::new(r"\$\{?(\d+)\}?").unwrap();
}

impl CleanConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CleanConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in redaction rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: CleanConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    ///
    /// Disabled names are dropped, as are opt-in rules that were not named
    /// in `enable_rules`. Rules with `enabled: false` are dropped unless
    /// explicitly enabled.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let name = rule.name.as_str();
            if disable_set.contains(name) {
                return false;
            }
            if enable_set.contains(name) {
                return true;
            }
            !rule.opt_in && rule.enabled != Some(false)
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }

    /// Names of the rules in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Merges a user configuration into the defaults.
///
/// A user rule whose name already exists replaces the default rule in place,
/// so the default application order is kept. New user rules are appended in
/// the order the user declared them. Stopword extras are unioned; a user
/// language, corpus file or cell policy overrides the default.
pub fn merge_rules(default_config: CleanConfig, user_config: Option<CleanConfig>) -> CleanConfig {
    debug!(
        "merge_rules called. Initial default rules count: {}",
        default_config.rules.len()
    );

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    let CleanConfig {
        mut rules,
        mut stopwords,
        mut cells,
    } = default_config;

    debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
    for user_rule in user_cfg.rules {
        match rules.iter_mut().find(|r| r.name == user_rule.name) {
            Some(existing) => *existing = user_rule,
            None => rules.push(user_rule),
        }
    }

    if user_cfg.stopwords.language != DEFAULT_LANGUAGE {
        debug!("Overriding stopword language with '{}'", user_cfg.stopwords.language);
        stopwords.language = user_cfg.stopwords.language;
    }
    if user_cfg.stopwords.corpus_file.is_some() {
        stopwords.corpus_file = user_cfg.stopwords.corpus_file;
    }
    for word in user_cfg.stopwords.extra {
        if !stopwords.extra.contains(&word) {
            stopwords.extra.push(word);
        }
    }
    if user_cfg.cells != CellPolicy::default() {
        cells = user_cfg.cells;
    }

    debug!("Final total rules after merge: {}", rules.len());
    CleanConfig {
        rules,
        stopwords,
        cells,
    }
}

/// Validates rule integrity (names, regex compilation, capture references).
fn validate_rules(rules: &[RedactionRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        let pattern = match &rule.pattern {
            Some(p) if !p.is_empty() => p,
            Some(_) => {
                errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
                continue;
            }
            None => {
                errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                continue;
            }
        };

        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                continue;
            }
        };

        // captures_len counts the implicit whole-match group.
        let group_count = regex.captures_len() - 1;
        for cap in CAPTURE_REFERENCE.captures_iter(&rule.replace_with) {
            if let Ok(group_num) = cap[1].parse::<usize>() {
                if group_num > group_count {
                    errors.push(format!(
                        "Rule '{}': replacement references non-existent capture group '${}'.",
                        rule.name, group_num
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, pattern: &str) -> RedactionRule {
        RedactionRule {
            name: name.to_string(),
            pattern: Some(pattern.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn default_rules_keep_declared_order() {
        let config = CleanConfig::load_default_rules().unwrap();
        assert_eq!(
            config.rule_names(),
            vec!["email", "angle_bracket", "www_prefix", "http_prefix", "https_prefix"]
        );
        assert!(config.rules.iter().all(|r| r.replace_with.is_empty()));
        assert_eq!(config.stopwords, StopwordConfig::default());
        assert_eq!(config.cells, CellPolicy::Coerce);
    }

    #[test]
    fn merge_replaces_in_place_and_appends_new() {
        let defaults = CleanConfig {
            rules: vec![rule("a", "a+"), rule("b", "b+")],
            ..Default::default()
        };
        let user = CleanConfig {
            rules: vec![rule("c", "c+"), rule("a", "x+")],
            stopwords: StopwordConfig {
                extra: vec!["regards".to_string()],
                ..Default::default()
            },
            cells: CellPolicy::Strict,
        };
        let merged = merge_rules(defaults, Some(user));
        assert_eq!(merged.rule_names(), vec!["a", "b", "c"]);
        assert_eq!(merged.rules[0].pattern.as_deref(), Some("x+"));
        assert_eq!(merged.stopwords.extra, vec!["regards".to_string()]);
        assert_eq!(merged.cells, CellPolicy::Strict);
    }

    #[test]
    fn set_active_rules_honours_opt_in_and_disable() {
        let mut config = CleanConfig {
            rules: vec![
                rule("keep", "k"),
                RedactionRule { opt_in: true, ..rule("optional", "o") },
                RedactionRule { opt_in: true, ..rule("wanted", "w") },
                rule("dropped", "d"),
            ],
            ..Default::default()
        };
        config.set_active_rules(&["wanted".to_string()], &["dropped".to_string()]);
        assert_eq!(config.rule_names(), vec!["keep", "wanted"]);
    }

    #[test]
    fn validation_reports_every_problem() {
        let rules = vec![
            rule("dup", "a"),
            rule("dup", "b"),
            rule("bad", "("),
            RedactionRule { replace_with: "$2".to_string(), ..rule("refs", "(x)") },
            RedactionRule { pattern: None, ..rule("nopattern", "") },
        ];
        let message = validate_rules(&rules).unwrap_err().to_string();
        assert!(message.contains("Duplicate rule name found: 'dup'"));
        assert!(message.contains("Rule 'bad' has an invalid regex pattern"));
        assert!(message.contains("non-existent capture group '$2'"));
        assert!(message.contains("Rule 'nopattern' is missing the `pattern` field."));
    }
}
