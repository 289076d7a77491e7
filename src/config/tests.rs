//! Tests for config functionality.

use crate::config::types::default_steps;
use crate::config::{Config, DEFAULT_CONFIG_FILE, StepConfig};
use crate::error::PasschainError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(
        config.steps,
        vec![
            StepConfig::NotEmpty,
            StepConfig::LengthInRange {
                min_size: 10,
                max_size: 12
            },
            StepConfig::ContainsCharacter {
                character: "S".to_string()
            },
            StepConfig::HasMixedCase,
        ]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use the default chain
    assert_eq!(config.steps, default_steps());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r##"
steps:
  - kind: not_empty
  - kind: length_in_range
    min_size: 8
    max_size: 64
  - kind: contains_character
    character: "#"
  - kind: has_mixed_case
"##;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        config.steps,
        vec![
            StepConfig::NotEmpty,
            StepConfig::LengthInRange {
                min_size: 8,
                max_size: 64
            },
            StepConfig::ContainsCharacter {
                character: "#".to_string()
            },
            StepConfig::HasMixedCase,
        ]
    );
}

#[test]
fn test_length_in_range_uses_default_bounds() {
    let yaml = r#"
steps:
  - kind: length_in_range
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        config.steps,
        vec![StepConfig::LengthInRange {
            min_size: 6,
            max_size: 12
        }]
    );
}

#[test]
fn test_length_in_range_partial_bounds() {
    let yaml = r#"
steps:
  - kind: length_in_range
    min_size: 10
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        config.steps,
        vec![StepConfig::LengthInRange {
            min_size: 10,
            max_size: 12
        }]
    );
}

#[test]
fn test_unknown_top_level_fields_are_ignored() {
    let yaml = r#"
steps:
  - kind: not_empty
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.steps, vec![StepConfig::NotEmpty]);
}

#[test]
fn test_unknown_step_kind_is_rejected() {
    let yaml = r#"
steps:
  - kind: has_emoji
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PasschainError::ConfigError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_contains_character_requires_character() {
    let yaml = r#"
steps:
  - kind: contains_character
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_contains_character_rejects_multiple_characters() {
    let yaml = r#"
steps:
  - kind: contains_character
    character: ab
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_contains_character_error_names_the_step() {
    let yaml = r#"
steps:
  - kind: not_empty
  - kind: contains_character
    character: ab
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PasschainError::ConfigError(_)));
    assert!(
        err.to_string()
            .contains("step 2 (contains_character): character must be exactly one character")
    );
}

#[test]
fn test_contains_character_accepts_combining_sequence() {
    let yaml = "steps:\n  - kind: contains_character\n    character: \"e\\u0301\"\n";
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(
        config.steps,
        vec![StepConfig::ContainsCharacter {
            character: "e\u{301}".to_string()
        }]
    );

    let chain = config.build_chain().unwrap();
    assert!(chain.validate("cafe\u{301}"));
    assert!(!chain.validate("cafe"));
}

#[test]
fn test_to_step_rejects_empty_character() {
    let step = StepConfig::ContainsCharacter {
        character: String::new(),
    };
    assert!(step.to_step().is_err());
}

#[test]
fn test_empty_steps_fail_validation() {
    let err = Config::from_yaml("steps: []").unwrap_err();
    assert!(matches!(err, PasschainError::ConfigError(_)));
    assert!(err.to_string().contains("at least one entry"));
}

#[test]
fn test_inverted_length_range_fails_validation() {
    let yaml = r#"
steps:
  - kind: not_empty
  - kind: length_in_range
    min_size: 20
    max_size: 10
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("step 2 (length_in_range)"));
    assert!(msg.contains("min_size (20) must not exceed max_size (10)"));
}

#[test]
fn test_equal_bounds_are_valid_but_reject_everything() {
    let yaml = r#"
steps:
  - kind: length_in_range
    min_size: 8
    max_size: 8
"#;
    let chain = Config::from_yaml(yaml).unwrap().build_chain().unwrap();
    assert!(!chain.validate("12345678"));
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config::default();
    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_build_chain_from_default() {
    let chain = Config::default().build_chain().unwrap();

    assert_eq!(
        chain.to_string(),
        "not_empty -> length_in_range -> contains_character -> has_mixed_case"
    );
    assert!(!chain.validate("ASD123as"));
    assert!(chain.validate("ASD123asS9"));
    assert!(!chain.validate(""));
}

#[test]
fn test_build_chain_rejects_empty_steps() {
    let config = Config { steps: Vec::new() };
    assert!(config.build_chain().is_err());
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.yaml");
    std::fs::write(&path, "steps:\n  - kind: has_mixed_case\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.steps, vec![StepConfig::HasMixedCase]);
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(temp.path().join("missing.yaml")).unwrap_err();

    assert!(matches!(err, PasschainError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(DEFAULT_CONFIG_FILE),
        "steps:\n  - kind: not_empty\n",
    )
    .unwrap();
    let explicit = temp.path().join("other.yaml");
    std::fs::write(&explicit, "steps:\n  - kind: has_mixed_case\n").unwrap();

    let config = Config::resolve(Some(explicit.as_path()), temp.path()).unwrap();
    assert_eq!(config.steps, vec![StepConfig::HasMixedCase]);
}

#[test]
fn test_resolve_explicit_missing_path_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.yaml");

    assert!(Config::resolve(Some(missing.as_path()), temp.path()).is_err());
}

#[test]
fn test_resolve_uses_file_in_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(DEFAULT_CONFIG_FILE),
        "steps:\n  - kind: not_empty\n",
    )
    .unwrap();

    let config = Config::resolve(None, temp.path()).unwrap();
    assert_eq!(config.steps, vec![StepConfig::NotEmpty]);
}

#[test]
fn test_resolve_falls_back_to_default() {
    let temp = TempDir::new().unwrap();

    let config = Config::resolve(None, temp.path()).unwrap();
    assert_eq!(config, Config::default());
}
