//! Core types for TextQuest: the scene graph data model, the mutable
//! game state, and the colon-delimited condition/effect mini-language.
//!
//! This crate is pure data and rules — it performs no I/O. Loading
//! scene documents and persisting state live in `tq-engine`.

/// Scene, choice, and catalog types.
pub mod scene;
/// The condition/effect mini-language.
pub mod script;
/// The mutable player-progress record.
pub mod state;
/// The loosely-typed scalar stored in game variables.
pub mod value;

/// Re-export scene graph types.
pub use scene::{Catalog, Choice, Scene};
/// Re-export script types.
pub use script::{Condition, Effect};
/// Re-export game state types.
pub use state::{GameState, START_SCENE_ID};
/// Re-export the variable value type.
pub use value::Value;
