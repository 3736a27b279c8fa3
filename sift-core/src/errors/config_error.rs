//! Configuration validation errors.

/// Errors raised by configuration validation, before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be non-negative, got {value}")]
    NegativeThreshold { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NonFiniteThreshold { name: &'static str, value: f32 },

    #[error("min_tokens must be at least 1")]
    ZeroMinTokens,

    #[error("embed_timeout_ms must be non-zero")]
    ZeroTimeout,

    #[error("listy_category_ratio must be in [0, 1], got {value}")]
    RatioOutOfRange { value: f32 },
}
