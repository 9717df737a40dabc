use std::io;

/// Game-specific error types
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Text that does not name one of the four cardinal directions
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
    /// Configuration values outside their allowed range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration file could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Failures reported by a score store. Never fatal to gameplay.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("score store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("score store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
