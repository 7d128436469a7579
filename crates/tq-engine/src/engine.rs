//! The game engine service.
//!
//! One engine owns one catalog and one game state; all mutation flows
//! through its methods. Everything is synchronous and single-threaded;
//! reads hand out copies so the presentation layer is insulated from
//! later mutation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use tq_core::{Catalog, GameState, Scene, Value};

use crate::assets::{self, DEFAULT_IMAGE};
use crate::error::{EngineError, EngineResult, PersistenceError};
use crate::loader;

/// Id of the synthetic scene returned when the current scene id does
/// not resolve.
pub const ERROR_SCENE_ID: &str = "error";

/// The scene graph interpreter: holds the catalog and the player's
/// state, executes choice transitions, and saves/loads progress.
pub struct Engine {
    scenes_path: PathBuf,
    assets_root: PathBuf,
    catalog: Catalog,
    state: GameState,
}

impl Engine {
    /// Create an engine loading its catalog from `scenes_path`, with
    /// assets resolved against the current directory. Never fails; a
    /// bad scene document yields the built-in catalog.
    pub fn new(scenes_path: impl Into<PathBuf>) -> Self {
        Self::with_assets_root(scenes_path, ".")
    }

    /// Create an engine resolving image assets against `assets_root`.
    pub fn with_assets_root(
        scenes_path: impl Into<PathBuf>,
        assets_root: impl Into<PathBuf>,
    ) -> Self {
        let mut engine = Self {
            scenes_path: scenes_path.into(),
            assets_root: assets_root.into(),
            catalog: Catalog::new(),
            state: GameState::new(),
        };
        engine.reload_catalog();
        engine
    }

    /// Discard all progress: fresh default state, catalog reloaded
    /// from its original source.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.reload_catalog();
    }

    fn reload_catalog(&mut self) {
        self.catalog = loader::load_catalog(&self.scenes_path, &self.assets_root);

        // A loaded catalog may lack the start scene; begin at the
        // first loaded scene instead of dead-ending immediately.
        if !self.catalog.contains(self.state.current_scene_id())
            && let Some(first) = self.catalog.first_id()
        {
            warn!(
                missing = %self.state.current_scene_id(),
                fallback = %first,
                "start scene not in catalog, using first scene"
            );
            let first = first.to_string();
            self.state.set_current_scene_id(first);
        }
    }

    /// The scene the player is currently at, as a renderable copy.
    ///
    /// A dangling current scene id yields a synthetic error scene with
    /// no choices instead of failing — the presentation layer always
    /// receives something it can display.
    pub fn current_scene(&self) -> Scene {
        match self.catalog.get(self.state.current_scene_id()) {
            Some(scene) => scene.clone(),
            None => {
                warn!(scene = %self.state.current_scene_id(), "scene not found in catalog");
                Scene::new(ERROR_SCENE_ID, "Error: scene not found!").with_image(DEFAULT_IMAGE)
            }
        }
    }

    /// Execute the choice at `index` on the current scene.
    ///
    /// Out-of-range indices and unmet conditions return an error and
    /// leave the state byte-for-byte unchanged. A satisfied choice
    /// applies its effect and then transitions; a choice without a
    /// target scene applies its effect but stays put (a data anomaly,
    /// reported as a warning).
    pub fn make_choice(&mut self, index: usize) -> EngineResult<()> {
        let scene = self.current_scene();
        let choice = scene
            .choices
            .get(index)
            .ok_or(EngineError::InvalidChoice(index))?;

        if !choice.condition.evaluate(&self.state) {
            return Err(EngineError::ConditionNotMet(choice.text.clone()));
        }

        if let Some(effect) = &choice.effect {
            effect.apply(&mut self.state);
        }

        match choice.next_scene_id.as_deref().filter(|id| !id.is_empty()) {
            Some(next) => self.state.set_current_scene_id(next),
            None => {
                warn!(choice = %choice.text, "choice has no target scene, staying put");
            }
        }
        Ok(())
    }

    /// Labels of the current scene's choices whose conditions hold
    /// right now. Read-only.
    pub fn available_choices(&self) -> Vec<String> {
        self.current_scene()
            .choices
            .iter()
            .filter(|choice| choice.condition.evaluate(&self.state))
            .map(|choice| choice.text.clone())
            .collect()
    }

    /// Read access to the game state for the presentation layer.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // -- Inventory ----------------------------------------------------

    /// Add an item (duplicates and empty names ignored).
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.state.add_item(item);
    }

    /// Remove an item if present.
    pub fn remove_item(&mut self, item: &str) {
        self.state.remove_item(item);
    }

    /// Check if an item is carried.
    pub fn has_item(&self, item: &str) -> bool {
        self.state.has_item(item)
    }

    /// Defensive copy of the inventory.
    pub fn inventory(&self) -> Vec<String> {
        self.state.inventory().to_vec()
    }

    // -- Variables ----------------------------------------------------

    /// Set a variable (empty names ignored).
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.state.set_variable(name, value);
    }

    /// Get a variable's value.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.state.variable(name)
    }

    /// Get a variable coerced to an integer, with a default.
    pub fn variable_int(&self, name: &str, default: i64) -> i64 {
        self.state.variable_int(name, default)
    }

    /// Check if a variable is set.
    pub fn has_variable(&self, name: &str) -> bool {
        self.state.has_variable(name)
    }

    // -- Images -------------------------------------------------------

    /// Resolve a relative image path (direct, under `Images/`, by
    /// basename under `Images/`, else the default sentinel).
    pub fn full_image_path(&self, relative: &str) -> String {
        assets::resolve_image(&self.assets_root, relative)
    }

    /// Resolved image path of the current scene.
    pub fn current_scene_image_path(&self) -> String {
        self.full_image_path(&self.current_scene().image_path)
    }

    // -- Persistence --------------------------------------------------

    /// Serialize the game state to a JSON save document at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        self.write_save(path).map_err(|source| EngineError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_save(&self, path: &Path) -> Result<(), PersistenceError> {
        let document = serde_json::to_string_pretty(&self.state)?;
        fs::write(path, document)?;
        Ok(())
    }

    /// Replace the game state with one loaded from a save document.
    ///
    /// All-or-nothing: the live state is only replaced after the new
    /// one has been fully decoded. A missing file is reported as
    /// [`EngineError::SaveNotFound`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::SaveNotFound(path.to_path_buf()));
        }

        let mut state = Self::read_save(path).map_err(|source| EngineError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        state.normalize();
        self.state = state;
        Ok(())
    }

    fn read_save(path: &Path) -> Result<GameState, PersistenceError> {
        let document = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&document)?)
    }

    // -- Presentation support -----------------------------------------

    /// Human-readable progress summary: inventory plus the variable
    /// table, for the presentation layer's status display.
    pub fn status_line(&self) -> String {
        let inventory = if self.state.inventory().is_empty() {
            "Inventory: empty".to_string()
        } else {
            format!(
                "Inventory ({}): {}",
                self.state.inventory().len(),
                self.state.inventory().join(", ")
            )
        };

        let mut entries: Vec<String> = self
            .state
            .variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        entries.sort();
        let variables = entries.join(", ");

        if variables.is_empty() {
            inventory
        } else {
            format!("{inventory}\nVariables: {variables}")
        }
    }
}
