use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading play resources or configuration
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("tile map {path} is invalid: {message}")]
    InvalidTileMap { path: PathBuf, message: String },

    #[error("failed to load texture {path}: {message}")]
    Texture { path: PathBuf, message: String },
}
