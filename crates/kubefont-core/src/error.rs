use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` has no hex digits")]
    Empty(String),
    #[error("color `{0}` has more than 6 hex digits")]
    TooLong(String),
    #[error("color `{0}` contains non-hex characters")]
    InvalidDigits(String),
}

#[derive(Debug, Error)]
pub enum FontError {
    #[error("malformed typeface json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("font resolution must be positive, got {0}")]
    BadResolution(f32),
    #[error("glyph `{glyph}`: {reason}")]
    Outline { glyph: char, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("option `{0}` is required")]
    Missing(&'static str),
    #[error("option `{key}` has invalid value `{value}`")]
    InvalidValue { key: String, value: String },
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Umbrella error for callers that drive the whole mount sequence.
#[derive(Debug, Error)]
pub enum KubefontError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Font(#[from] FontError),
}
