//! Scene catalog loading, the game engine service, and save/load.
//!
//! `tq-core` defines the data model and the script mini-language; this
//! crate wires them to the filesystem: it parses scene documents
//! (falling back to a built-in catalog so there is always something
//! playable), drives choice transitions, resolves image assets, and
//! persists game state as a JSON save document.

/// Image asset lookup.
pub mod assets;
/// The engine service.
pub mod engine;
/// Error types for engine operations.
pub mod error;
/// Scene document parsing and the built-in fallback catalog.
pub mod loader;

/// Re-export the engine service.
pub use engine::{ERROR_SCENE_ID, Engine};
/// Re-export error types.
pub use error::{EngineError, EngineResult, PersistenceError};
/// Re-export loader entry points.
pub use loader::{fallback_catalog, load_catalog};
