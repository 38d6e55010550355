//! Error types for morsegraph

use thiserror::Error;

/// Result type alias for morsegraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or exporting the trie
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid symbol format: {0:?}")]
    InvalidSymbolFormat(String),

    #[error("Invalid layout direction: {0:?} (expected TB, BT, LR or RL)")]
    InvalidLayoutDirection(String),

    #[error("Malformed trie document: {0}")]
    MalformedDocument(String),

    #[error("Graphviz failed: {0}")]
    Render(String),
}
