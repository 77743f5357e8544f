use curator_core::config::*;
use curator_core::errors::CuratorError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CuratorConfig::from_toml("").unwrap();

    // Threshold defaults
    assert_eq!(config.thresholds.min_quality_score, 0.65);
    assert_eq!(config.thresholds.auto_approve_score, 0.85);
    assert_eq!(config.thresholds.duplicate_similarity, 0.90);

    // Pending defaults
    assert_eq!(config.pending.ttl_minutes, 30);
    assert_eq!(config.pending.cleanup_interval_seconds, 60);

    // Type defaults
    assert_eq!(config.types.allowed.len(), 7);
    assert!(config.types.is_allowed("bug"));
    assert!(config.types.is_allowed("investigation"));
    assert!(!config.types.is_allowed("gossip"));
    assert!(config.types.overrides.is_empty());

    // Filtering defaults
    assert_eq!(config.filtering.excluded_patterns.len(), 8);
    assert_eq!(config.filtering.min_content_length, 15);
    assert_eq!(config.filtering.max_content_length, 5000);

    // Source defaults
    assert_eq!(config.source_credibility("github"), 0.95);
    assert_eq!(config.source_credibility("slack"), 0.60);
    assert_eq!(config.source_credibility("carrier-pigeon"), 0.50);

    // Scoring defaults
    assert_eq!(config.scoring.weights.relevance, 0.40);
    assert_eq!(config.scoring.weights.completeness, 0.35);
    assert_eq!(config.scoring.weights.credibility, 0.25);

    // Embedding defaults
    assert_eq!(config.embedding.model, "BAAI/bge-small-en-v1.5");
    assert_eq!(config.embedding.dimensions, 384);
    assert_eq!(config.embedding.batch_size, 100);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[thresholds]
min_quality_score = 0.70

[pending]
ttl_minutes = 5
"#;
    let config = CuratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.thresholds.min_quality_score, 0.70);
    assert_eq!(config.pending.ttl_minutes, 5);
    // Non-overridden fields keep defaults
    assert_eq!(config.thresholds.auto_approve_score, 0.85);
    assert_eq!(config.pending.cleanup_interval_seconds, 60);
    assert_eq!(config.embedding.dimensions, 384);
}

#[test]
fn config_serde_roundtrip() {
    let config = CuratorConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = CuratorConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.thresholds.min_quality_score,
        config.thresholds.min_quality_score
    );
    assert_eq!(roundtripped.types.allowed, config.types.allowed);
    assert_eq!(roundtripped.embedding.model, config.embedding.model);
}

#[test]
fn min_score_for_type_honors_override() {
    let toml = r#"
[types.overrides.bug]
min_quality_score = 0.75
"#;
    let config = CuratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.min_score_for_type("bug"), 0.75);
    // Types without an override fall back to the global threshold
    assert_eq!(config.min_score_for_type("feature"), 0.65);
}

#[test]
fn empty_override_block_falls_back_to_global() {
    let toml = r#"
[types.overrides.bug]
"#;
    let config = CuratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.min_score_for_type("bug"), 0.65);
}

#[test]
fn custom_credibility_table_replaces_defaults() {
    let toml = r#"
[sources]
default_credibility = 0.40

[sources.credibility]
wiki = 0.77
"#;
    let config = CuratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.source_credibility("wiki"), 0.77);
    // Replacing the table drops the built-in entries
    assert_eq!(config.source_credibility("github"), 0.40);
}

#[test]
fn weights_must_sum_to_one() {
    let toml = r#"
[scoring.weights]
relevance = 0.50
completeness = 0.50
credibility = 0.25
"#;
    let err = CuratorConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, CuratorError::InvalidWeights { .. }));
    assert!(err.to_string().contains("1.25"));
}

#[test]
fn weights_within_tolerance_accepted() {
    let toml = r#"
[scoring.weights]
relevance = 0.40
completeness = 0.35
credibility = 0.249
"#;
    let config = CuratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.scoring.weights.credibility, 0.249);
}
