//! Tests for benchmark configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        name = "Nightly"
        sizes = [10, 20, 30]
        repetitions = 7
        warmup_count = 2
        random_seed = 42
        target = { position = 4 }
        algorithms = ["binary"]

        [output]
        markdown = "report.md"
        chart = false
    "#;

    let config = SearchBenchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.name, "Nightly");
    assert_eq!(config.sizes, vec![10, 20, 30]);
    assert_eq!(config.repetitions, 7);
    assert_eq!(config.warmup_count, 2);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.target, TargetPolicy::Position(4));
    assert_eq!(config.algorithms, vec![AlgorithmKind::Binary]);
    assert_eq!(config.output.markdown.as_deref(), Some("report.md"));
    assert!(!config.output.chart);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        sizes: [100, 1000]
        repetitions: 3
        random_seed: 7
        target: random
        output:
          csv: out.csv
    "#;

    let config = SearchBenchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.sizes, vec![100, 1000]);
    assert_eq!(config.repetitions, 3);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.target, TargetPolicy::Random);
    assert!(config.output.chart);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SearchBenchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchBenchConfig::default());
    assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
    assert_eq!(config.algorithms, AlgorithmKind::ALL.to_vec());
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = SearchBenchConfig::new()
        .with_name("Quick")
        .with_sizes(vec![100, 1000])
        .with_repetitions(3)
        .with_random_seed(123)
        .with_target(TargetPolicy::Middle)
        .with_csv_output("a.csv")
        .with_markdown_output("a.md");

    assert_eq!(config.name, "Quick");
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.output.csv.as_deref(), Some("a.csv"));
    assert_eq!(config.output.markdown.as_deref(), Some("a.md"));
}

#[test]
fn test_validate_rejects_unmeasurable() {
    let no_sizes = SearchBenchConfig::new().with_sizes(Vec::new());
    assert!(matches!(no_sizes.validate(), Err(ConfigError::Invalid(_))));

    let zero_size = SearchBenchConfig::new().with_sizes(vec![10, 0]);
    assert!(matches!(zero_size.validate(), Err(ConfigError::Invalid(_))));

    let zero_reps = SearchBenchConfig::new().with_repetitions(0);
    assert!(matches!(zero_reps.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_duplicate_algorithms() {
    let config = SearchBenchConfig::from_toml_str(r#"algorithms = ["linear", "binary", "linear"]"#)
        .unwrap();
    match config.validate() {
        Err(ConfigError::Invalid(message)) => assert!(message.contains("linear")),
        other => panic!("expected Invalid, got {:?}", other),
    }
}

#[test]
fn test_load_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("searchbench.toml");
    std::fs::write(&toml_path, "sizes = [50]\nrepetitions = 2\n").unwrap();
    let config = SearchBenchConfig::load(&toml_path).unwrap();
    assert_eq!(config.sizes, vec![50]);

    let yaml_path = dir.path().join("searchbench.yml");
    std::fs::write(&yaml_path, "sizes: [60]\n").unwrap();
    let config = SearchBenchConfig::load(&yaml_path).unwrap();
    assert_eq!(config.sizes, vec![60]);

    let invalid_path = dir.path().join("invalid.toml");
    std::fs::write(&invalid_path, "repetitions = 0\n").unwrap();
    assert!(matches!(
        SearchBenchConfig::load(&invalid_path),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let result = SearchBenchConfig::load("definitely/not/here.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
