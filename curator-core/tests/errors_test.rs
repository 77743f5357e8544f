use curator_core::errors::*;

#[test]
fn pending_not_found_carries_id_and_exact_message() {
    let err = CuratorError::PendingNotFound {
        id: "pending-abc123def456".into(),
    };
    assert_eq!(
        err.to_string(),
        "Pending item 'pending-abc123def456' not found or expired"
    );
}

#[test]
fn invalid_weights_carries_sum() {
    let err = CuratorError::InvalidWeights { sum: 1.15 };
    let msg = err.to_string();
    assert!(msg.contains("1.15"));
    assert!(msg.contains("sum to 1.0"));
}

#[test]
fn dimension_mismatch_carries_both_sizes() {
    let err = KnowledgeError::DimensionMismatch {
        expected: 384,
        actual: 768,
    };
    let msg = err.to_string();
    assert!(msg.contains("384"));
    assert!(msg.contains("768"));
}

// --- From impls ---

#[test]
fn knowledge_error_converts_to_curator_error() {
    let ke = KnowledgeError::EmbeddingFailed {
        reason: "provider timeout".into(),
    };
    let err: CuratorError = ke.into();
    assert!(matches!(err, CuratorError::KnowledgeError(_)));
    // Transparent wrapping keeps the inner message
    assert!(err.to_string().contains("provider timeout"));
}

#[test]
fn store_failure_message_names_the_store() {
    let ke = KnowledgeError::StoreFailed {
        reason: "write refused".into(),
    };
    assert_eq!(
        ke.to_string(),
        "knowledge store write failed: write refused"
    );
}

#[test]
fn serde_json_error_converts_to_curator_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: CuratorError = json_err.into();
    assert!(matches!(err, CuratorError::SerializationError(_)));
}

#[test]
fn toml_error_converts_to_curator_error() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: CuratorError = toml_err.into();
    assert!(matches!(err, CuratorError::ConfigError(_)));
}
