//! Error taxonomy for the Sift engine.
//!
//! Fatality policy:
//! - [`ReferenceDataError`] is fatal for a whole run; nothing can be
//!   scored without valid centroid data.
//! - [`EmbeddingError`] and [`ArtifactError`] are per-file: recorded in the
//!   run manifest and skipped.
//! - [`ConfigError`] is rejected at run start, before any file is touched.
//!
//! Partial coverage is a manifest field, never an error type.

mod artifact_error;
mod config_error;
mod embedding_error;
mod reference_error;

pub use artifact_error::ArtifactError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use reference_error::ReferenceDataError;
