/// Convenience result alias used across the crate.
pub type KonaResult<T> = Result<T, KonaError>;

/// Top-level error type.
///
/// Decorative effects never propagate these to the page; they are logged and the effect
/// degrades to a no-op. The SEO generator and the CLI surface them normally.
#[derive(thiserror::Error, Debug)]
pub enum KonaError {
    /// Invalid user-provided input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Drawing surface unavailable or failed.
    #[error("surface error: {0}")]
    Surface(String),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KonaError {
    /// Build [`KonaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`KonaError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build [`KonaError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build [`KonaError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KonaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
