//! Error types for Sana.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanaError {
    #[error("Keyword '{keyword}' is claimed by both '{first}' and '{second}'")]
    DuplicateKeyword {
        keyword: String,
        first: String,
        second: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
