//! Error types shared by startup code
//!
//! Request handling never fails outward; these errors only surface while
//! loading configuration, content and binding sockets.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Content catalog error: {0}")]
    Content(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid address '{addr}': {message}")]
    Address { addr: String, message: String },

    #[error("Invalid state transition: {0}")]
    Transition(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
