//! Error types for form declarations and model binding.
//!
//! Rendering itself never fails: unknown fields, missing model properties
//! and missing choices all degrade to empty output. Only the surfaces that
//! parse or convert caller input return these errors.

use thiserror::Error;

/// Form builder errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A JSON form declaration could not be parsed.
    #[error("invalid form declaration: {0}")]
    Declaration(#[source] serde_json::Error),

    /// A model could not be serialized for binding.
    #[error("failed to serialize model: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A bound model did not serialize to an object with named properties.
    #[error("model must serialize to an object, got {0}")]
    InvalidModel(String),
}

/// Result type alias for form builder operations.
pub type Result<T> = std::result::Result<T, FormError>;
