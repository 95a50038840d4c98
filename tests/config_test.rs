//! Integration tests for config files driving the classifier

mod common;

use std::fs;

use tempfile::TempDir;

use terra::config::{ConfigError, GreetingCheck, InternalDefaults};
use terra::{Category, Classification, Config};

use common::{classifier_for, write_config};

#[test]
fn test_load_or_init_creates_default_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.toml");

    let config = Config::load_or_init(&path).unwrap();

    assert!(path.exists(), "Config file should be created on first load");
    assert_eq!(
        config.category.len(),
        InternalDefaults::cached().unwrap().category.len()
    );
    assert_eq!(
        classifier_for(&config).classify("терра создать задачу"),
        Classification::Command(Category::TaskCreation)
    );
}

#[test]
fn test_custom_file_controls_wake_word_and_table() {
    let (_dir, path) = write_config(
        r#"
[wake_word]
words = ["ассистент"]

[greeting]
check = "before_wake_word"

[[category]]
name = "meeting"
phrases = ["созвон с командой"]

[[category]]
name = "search"
phrases = ["найти"]
"#,
    );

    let config = Config::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.greeting.check, GreetingCheck::BeforeWakeWord);

    let classifier = classifier_for(&config);
    assert_eq!(
        classifier.classify("ассистент созвон с командаи"),
        Classification::Command(Category::Meeting)
    );
    assert_eq!(
        classifier.classify("ассистент найти"),
        Classification::Command(Category::Search)
    );
    assert_eq!(
        classifier.classify("терра найти"),
        Classification::WakeWordAbsent
    );
    assert_eq!(
        classifier.classify("добрый день"),
        Classification::Command(Category::Greeting)
    );
}

#[test]
fn test_load_merges_missing_builtin_categories() {
    let (_dir, path) = write_config(
        r#"
[[category]]
name = "search"
phrases = ["разыскать"]
"#,
    );

    let config = Config::load_or_init(&path).unwrap();

    // User entry keeps its place and phrases; built-ins are appended after it
    assert_eq!(config.category[0].name, Category::Search);
    assert_eq!(config.category[0].phrases, vec!["разыскать".to_string()]);
    assert!(config.category.iter().any(|c| c.name == Category::Finance));

    let saved = fs::read_to_string(&path).unwrap();
    assert!(
        saved.contains("finance"),
        "Merged categories should be written back"
    );
}

#[test]
fn test_reduced_table_is_kept_when_merge_is_off() {
    let content = r#"
merge_builtin_categories = false

[[category]]
name = "search"
phrases = ["найти"]
"#;
    let (_dir, path) = write_config(content);

    let config = Config::load_or_init(&path).unwrap();

    assert_eq!(config.category.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
    assert_eq!(
        classifier_for(&config).classify("терра бюджет"),
        Classification::Command(Category::Unknown)
    );
}

#[test]
fn test_newer_builtin_version_replaces_user_entry() {
    let (_dir, path) = write_config(
        r#"
[[category]]
name = "finance"
version = 0
phrases = ["деньги"]
"#,
    );

    let config = Config::load_or_init(&path).unwrap();
    let finance = config
        .category
        .iter()
        .find(|c| c.name == Category::Finance)
        .unwrap();
    assert!(finance.version >= 1);
    assert!(finance.phrases.iter().any(|p| p == "бюджет"));
}

#[test]
fn test_invalid_tables_are_rejected() {
    let (_dir, path) = write_config(
        r#"
[[category]]
name = "search"
phrases = ["найти"]

[[category]]
name = "search"
phrases = ["искать"]
"#,
    );
    let config = Config::from_file(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::DuplicateCategory(Category::Search))
    ));

    let (_dir, path) = write_config(
        r#"
[[category]]
name = "unknown"
phrases = ["что-то"]
"#,
    );
    let config = Config::from_file(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::UnknownInTable)
    ));

    let (_dir, path) = write_config(
        r#"
[[category]]
name = "teleport"
phrases = ["телепорт"]
"#,
    );
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_init_file_respects_force() {
    let (_dir, path) = write_config("# hand edited\n");

    assert!(!Config::init_file(&path, false).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "# hand edited\n");

    assert!(Config::init_file(&path, true).unwrap());
    let config = Config::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.category[0].name, Category::TaskCreation);
}
