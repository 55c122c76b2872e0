// cleantext-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use cleantext_core::config::{self, CellPolicy, CleanConfig, RedactionRule};
use cleantext_core::{CleaningPipeline, PipelineVariant};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_default_rules() {
    let config = CleanConfig::load_default_rules().unwrap();
    assert_eq!(config.rules.len(), 5);
    let email_rule = config.rules.iter().find(|r| r.name == "email").unwrap();
    assert_eq!(email_rule.replace_with, "");
    assert!(!email_rule.opt_in);
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_config(
        r#"
rules:
  - name: phone
    pattern: '\d{3}-\d{4}'
    replace_with: ""
    description: "Short phone numbers"
stopwords:
  extra: ["regards", "cheers"]
cells: strict
"#,
    )?;
    let config = CleanConfig::load_from_file(file.path())?;
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].name, "phone");
    assert_eq!(config.rules[0].pattern, Some(r"\d{3}-\d{4}".to_string()));
    assert_eq!(config.stopwords.language, "english");
    assert_eq!(config.stopwords.extra, vec!["regards", "cheers"]);
    assert_eq!(config.cells, CellPolicy::Strict);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_invalid_rules() -> Result<()> {
    let file = write_config(
        r#"
rules:
  - name: broken
    pattern: "(unclosed"
"#,
    )?;
    let err = CleanConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Rule 'broken' has an invalid regex pattern"));
    Ok(())
}

#[test]
fn test_load_from_missing_file_has_context() {
    let err = CleanConfig::load_from_file("/nonexistent/cleantext.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_merge_rules_no_user_config() {
    let defaults = CleanConfig::load_default_rules().unwrap();
    let merged = config::merge_rules(defaults.clone(), None);
    assert_eq!(merged, defaults);
}

#[test]
fn test_merged_config_drives_pipeline() -> Result<()> {
    let user = write_config(
        r#"
rules:
  - name: phone
    pattern: '\d{3}-\d{4}'
stopwords:
  extra: ["regards"]
"#,
    )?;
    let merged = config::merge_rules(
        CleanConfig::load_default_rules()?,
        Some(CleanConfig::load_from_file(user.path())?),
    );
    assert_eq!(
        merged.rule_names(),
        vec!["email", "angle_bracket", "www_prefix", "http_prefix", "https_prefix", "phone"]
    );

    let pipeline = CleaningPipeline::from_config(&merged, PipelineVariant::CleanOnly)?;
    assert_eq!(
        pipeline.clean_text("Call 555-1234, regards, <i>Ann</i>"),
        vec!["call", "ann"]
    );
    Ok(())
}

#[test]
fn test_disabling_a_default_rule_changes_output() -> Result<()> {
    let mut config = CleanConfig::load_default_rules()?;
    config.set_active_rules(&[], &["angle_bracket".to_string()]);
    let pipeline = CleaningPipeline::from_config(&config, PipelineVariant::CleanOnly)?;
    assert_eq!(pipeline.clean_text("<b>bold</b>"), vec!["bboldb"]);
    Ok(())
}

#[test]
fn test_opt_in_rule_needs_enable() {
    let mut config = CleanConfig {
        rules: vec![RedactionRule {
            name: "digits".to_string(),
            pattern: Some(r"\d+".to_string()),
            opt_in: true,
            ..Default::default()
        }],
        ..Default::default()
    };
    let mut enabled = config.clone();
    config.set_active_rules(&[], &[]);
    assert!(config.rules.is_empty());
    enabled.set_active_rules(&["digits".to_string()], &[]);
    assert_eq!(enabled.rule_names(), vec!["digits"]);
}
