//! compiler.rs - Manages the compilation and caching of redaction rules.
//!
//! This module provides a thread-safe, cached mechanism to convert the rules
//! of a `CleanConfig` into `CompiledRules`. It uses a global, shared cache to
//! avoid recompiling the same rule set for every pipeline that is built.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{RedactionRule, MAX_PATTERN_LENGTH};
use crate::errors::CleanTextError;

/// Represents a single compiled redaction rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The string to replace matches of this rule's pattern with.
    pub replace_with: String,
    /// The unique name of the redaction rule.
    pub name: String,
}

/// The ordered set of compiled rules a [`Redactor`](crate::Redactor) applies.
#[derive(Debug)]
pub struct CompiledRules {
    /// Compiled rules, in application order.
    pub rules: Vec<CompiledRule>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules.
    /// The key is a hash of the ordered rule list.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the rule list to create a cache key.
///
/// Rules are hashed in declaration order: the same rules in a different order
/// redact differently and must not share an entry.
fn hash_rules(rules: &[RedactionRule]) -> u64 {
    let mut hasher = DefaultHasher::new();
    rules.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `RedactionRule`s into `CompiledRules`, keeping their order.
pub fn compile_rules(rules_to_compile: Vec<RedactionRule>) -> Result<CompiledRules, CleanTextError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        let Some(pattern) = rule.pattern.as_ref() else {
            warn!("Skipping rule '{}' because its pattern is missing.", &rule.name);
            continue;
        };
        debug!("Attempting to compile rule: '{}' with pattern '{:?}'", &rule.name, pattern);

        if pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(CleanTextError::PatternLengthExceeded(
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(pattern)
            .multi_line(rule.multiline)
            .dot_matches_new_line(rule.dot_matches_new_line)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                log::debug!(
                    target: "cleantext_core::sanitizer",
                    "Rule '{}' compiled successfully.",
                    &rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                });
            }
            Err(e) => compilation_errors.push(CleanTextError::RuleCompilationError(rule.name, e)),
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(CleanTextError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}

/// Gets a `CompiledRules` instance from the cache or compiles them if not found.
pub fn get_or_compile_rules(rules: &[RedactionRule]) -> Result<Arc<CompiledRules>, CleanTextError> {
    let cache_key = hash_rules(rules);

    {
        let cache = COMPILED_RULES_CACHE
            .read()
            .map_err(|_| CleanTextError::Fatal("compiled rule cache lock poisoned".to_string()))?;
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(compiled));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = Arc::new(compile_rules(rules.to_vec())?);

    COMPILED_RULES_CACHE
        .write()
        .map_err(|_| CleanTextError::Fatal("compiled rule cache lock poisoned".to_string()))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled)
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
    fn compiles_in_declaration_order() {
        let compiled = compile_rules(vec![rule("b", "b+"), rule("a", "a+")]).unwrap();
        let names: Vec<&str> = compiled.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn rejects_overlong_and_invalid_patterns() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = compile_rules(vec![rule("long", &long), rule("broken", "(")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to compile 2 rule(s)"));
        assert!(message.contains("Rule 'long': pattern length"));
        assert!(message.contains("Failed to compile redaction rule 'broken'"));
    }

    #[test]
    fn skips_rules_without_pattern() {
        let compiled = compile_rules(vec![RedactionRule {
            name: "empty".to_string(),
            ..Default::default()
        }])
        .unwrap();
        assert!(compiled.rules.is_empty());
    }

    #[test]
    fn cache_returns_shared_instance() {
        let rules = vec![rule("cache_probe", "probe[0-9]+")];
        let first = get_or_compile_rules(&rules).unwrap();
        let second = get_or_compile_rules(&rules).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
