//! Error types for startup, content loading and scene construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Content error: {message}")]
    Content { message: String },

    #[error("Scene error: {message}")]
    Scene { message: String },

    #[error("Window error: {message}")]
    Window { message: String },
}

pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content {
            message: msg.into(),
        }
    }

    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene {
            message: msg.into(),
        }
    }
}
