use std::path::PathBuf;

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the game engine.
///
/// The first two are recoverable data anomalies: the engine state is
/// guaranteed untouched when they are returned. The persistence
/// variants keep their underlying cause attached.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The choice index is outside the current scene's choices.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// The choice exists but its condition evaluates false.
    #[error("condition not met for \"{0}\"")]
    ConditionNotMet(String),

    /// The save file to load from does not exist.
    #[error("save file not found: {}", .0.display())]
    SaveNotFound(PathBuf),

    /// Writing the save document failed.
    #[error("cannot save game to {}", path.display())]
    Save {
        /// Path that was written to.
        path: PathBuf,
        /// Underlying I/O or encoding failure.
        #[source]
        source: PersistenceError,
    },

    /// Reading or decoding the save document failed. The in-memory
    /// state is left untouched.
    #[error("cannot load game from {}", path.display())]
    Load {
        /// Path that was read from.
        path: PathBuf,
        /// Underlying I/O or decoding failure.
        #[source]
        source: PersistenceError,
    },
}

/// The underlying cause of a failed save or load.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// JSON encoding or decoding failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
