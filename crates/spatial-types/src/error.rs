//! Error types for spatial navigation.
//!
//! The navigation core itself never fails: misses and unreadable elements
//! are plain `None` / empty-string values. Errors only come from loading
//! and validating settings, or from a host page that cannot be built.

use std::io;

/// Errors produced while configuring or hosting the navigator.
#[derive(Debug, thiserror::Error)]
pub enum SpatialError {
    #[error("config error: {0}")]
    Config(String),

    #[error("page error: {0}")]
    Page(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SpatialError>;
