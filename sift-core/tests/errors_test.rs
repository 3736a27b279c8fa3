//! Tests for the error taxonomy: display text and variant shapes that
//! manifests and logs depend on.

use std::path::PathBuf;

use sift_core::errors::{ArtifactError, ConfigError, EmbeddingError, ReferenceDataError};

#[test]
fn embedding_errors_name_their_cause() {
    assert_eq!(
        EmbeddingError::Timeout { ms: 30 }.to_string(),
        "embedding call timed out after 30ms"
    );
    assert_eq!(
        EmbeddingError::EmptyInput.to_string(),
        "empty text after normalization"
    );
    assert!(EmbeddingError::DimensionMismatch {
        expected: 768,
        actual: 3
    }
    .to_string()
    .contains("768"));
}

#[test]
fn reference_errors_name_the_offending_label() {
    let missing = ReferenceDataError::MissingLabel { label: "Speculative" };
    assert!(missing.to_string().contains("Speculative"));

    let non_finite = ReferenceDataError::NonFiniteValue {
        label: "Actionable",
        index: 12,
    };
    assert!(non_finite.to_string().contains("index 12"));
}

#[test]
fn artifact_errors_carry_the_path() {
    let error = ArtifactError::Io {
        path: PathBuf::from("/data/out.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(error.to_string().contains("/data/out.json"));
}

#[test]
fn config_errors_name_the_bad_parameter() {
    let error = ConfigError::NegativeThreshold {
        name: "tau",
        value: -0.5,
    };
    assert!(error.to_string().contains("tau"));
    assert!(error.to_string().contains("-0.5"));
}
