#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;
use test_case::test_case;

#[test]
fn GeneratorConfig___default___matches_historical_layout() {
    let config = GeneratorConfig::default();

    assert_eq!(config.input_dir, Path::new("."));
    assert_eq!(config.input_extension, "csv");
    assert_eq!(config.output_dir, Path::new("out"));
    assert_eq!(config.output_extension, "java");
    assert_eq!(config.on_read_error, ReadErrorPolicy::Abort);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn GeneratorConfig___empty_toml___returns_default() {
    let config = GeneratorConfig::from_toml("  \n").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___partial_toml___fills_defaults() {
    let config = GeneratorConfig::from_toml(
        r#"
        output_dir = "generated"
        on_read_error = "skip"
        "#,
    )
    .unwrap();

    assert_eq!(config.output_dir, Path::new("generated"));
    assert_eq!(config.on_read_error, ReadErrorPolicy::Skip);
    assert_eq!(config.input_extension, "csv");
}

#[test_case(r#"log_level = "debug""#, LogLevel::Debug)]
#[test_case(r#"log_level = "warn""#, LogLevel::Warn)]
#[test_case(r#"log_level = "off""#, LogLevel::Off)]
fn GeneratorConfig___log_level_toml___parses_correctly(toml: &str, expected: LogLevel) {
    let config = GeneratorConfig::from_toml(toml).unwrap();

    assert_eq!(config.log_level, expected);
}

#[test_case(r#"on_read_error = "retry""#)]
#[test_case(r#"unknown_key = 1"#)]
#[test_case(r#"output_dir = ["#)]
fn GeneratorConfig___invalid_toml___returns_parse_error(toml: &str) {
    let result = GeneratorConfig::from_toml(toml);

    assert!(matches!(result, Err(GenError::ConfigParse(_))));
}

#[test]
fn GeneratorConfig___from_file___reads_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "output_extension = \"kt\"\n").unwrap();

    let config = GeneratorConfig::from_file(&path).unwrap();

    assert_eq!(config.output_extension, "kt");
}

#[test]
fn GeneratorConfig___from_missing_file___returns_config_error() {
    let dir = TempDir::new().unwrap();

    let result = GeneratorConfig::from_file(dir.path().join("nope.toml"));

    assert!(matches!(result, Err(GenError::Config(_))));
}

#[test]
fn GeneratorConfig___validate_default___succeeds() {
    assert!(GeneratorConfig::default().validate().is_ok());
}

#[test_case("")]
#[test_case(".java")]
#[test_case("java/x")]
#[test_case("tar.gz")]
fn GeneratorConfig___validate_bad_output_extension___fails(extension: &str) {
    let config = GeneratorConfig {
        output_extension: extension.to_string(),
        ..GeneratorConfig::default()
    };

    assert!(matches!(config.validate(), Err(GenError::Config(_))));
}

#[test]
fn GeneratorConfig___validate_empty_output_dir___fails() {
    let config = GeneratorConfig {
        output_dir: PathBuf::new(),
        ..GeneratorConfig::default()
    };

    assert!(matches!(config.validate(), Err(GenError::Config(_))));
}

#[test]
fn GeneratorConfig___layout___uses_output_settings() {
    let config = GeneratorConfig {
        output_dir: PathBuf::from("gen"),
        output_extension: "kt".to_string(),
        ..GeneratorConfig::default()
    };

    let layout = config.layout();

    assert_eq!(layout, OutputLayout::new("gen", "kt"));
}

#[test]
fn GeneratorConfig___validate_output_equals_input___fails() {
    let dir = TempDir::new().unwrap();
    let schemas = dir.path().join("schemas");
    std::fs::create_dir(&schemas).unwrap();
    let config = GeneratorConfig {
        input_dir: schemas.clone(),
        output_dir: schemas,
        ..GeneratorConfig::default()
    };

    assert!(matches!(config.validate(), Err(GenError::Config(_))));
}

#[test]
fn GeneratorConfig___validate_output_dot_with_default_input___fails() {
    let config = GeneratorConfig {
        output_dir: PathBuf::from("."),
        ..GeneratorConfig::default()
    };

    assert!(matches!(config.validate(), Err(GenError::Config(_))));
}

#[test]
fn GeneratorConfig___validate_output_ancestor_of_input___fails() {
    let dir = TempDir::new().unwrap();
    let schemas = dir.path().join("schemas");
    std::fs::create_dir(&schemas).unwrap();
    let config = GeneratorConfig {
        input_dir: schemas,
        output_dir: dir.path().to_path_buf(),
        ..GeneratorConfig::default()
    };

    assert!(matches!(config.validate(), Err(GenError::Config(_))));
}

#[test]
fn GeneratorConfig___validate_output_via_parent_component___fails() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig {
        input_dir: dir.path().to_path_buf(),
        output_dir: dir.path().join("out").join(".."),
        ..GeneratorConfig::default()
    };

    assert!(matches!(config.validate(), Err(GenError::Config(_))));
}

#[test]
fn GeneratorConfig___validate_output_inside_input___succeeds() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig {
        input_dir: dir.path().to_path_buf(),
        output_dir: dir.path().join("out"),
        ..GeneratorConfig::default()
    };

    assert!(config.validate().is_ok());
}
