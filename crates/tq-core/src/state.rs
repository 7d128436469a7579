use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Scene id every fresh or cleared state starts at.
pub const START_SCENE_ID: &str = "start";

/// The mutable player-progress record: where the player is, what they
/// carry, and the named variables the script language reads and writes.
///
/// Fields are kept private so the no-duplicate inventory invariant
/// cannot be violated from outside; all mutation goes through the
/// accessors below. The struct serializes to the save document
/// (`currentSceneId` / `inventory` / `variables`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default)]
    current_scene_id: String,
    #[serde(default)]
    inventory: Vec<String>,
    #[serde(default)]
    variables: HashMap<String, Value>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh state at the start scene with the default
    /// variables (`health = 100`, `money = 0`).
    pub fn new() -> Self {
        let mut state = Self {
            current_scene_id: START_SCENE_ID.to_string(),
            inventory: Vec::new(),
            variables: HashMap::new(),
        };
        state.set_variable("health", 100);
        state.set_variable("money", 0);
        state
    }

    /// Reset to the start scene and drop all items and variables.
    ///
    /// Unlike [`GameState::new`] this leaves the variable table empty.
    pub fn clear(&mut self) {
        self.current_scene_id = START_SCENE_ID.to_string();
        self.inventory.clear();
        self.variables.clear();
    }

    /// Repair a state decoded from a save document: default an empty
    /// scene id to the start scene and drop duplicate inventory
    /// entries.
    pub fn normalize(&mut self) {
        if self.current_scene_id.is_empty() {
            self.current_scene_id = START_SCENE_ID.to_string();
        }
        let mut seen = Vec::with_capacity(self.inventory.len());
        self.inventory.retain(|item| {
            if seen.contains(item) {
                false
            } else {
                seen.push(item.clone());
                true
            }
        });
    }

    /// The id of the scene the player is currently at.
    pub fn current_scene_id(&self) -> &str {
        &self.current_scene_id
    }

    /// Move the player to another scene.
    pub fn set_current_scene_id(&mut self, id: impl Into<String>) {
        self.current_scene_id = id.into();
    }

    /// Check if an item is in the inventory.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Add an item to the inventory. Duplicates and empty names are
    /// ignored; returns whether the item was actually added.
    pub fn add_item(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if item.is_empty() || self.has_item(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Remove an item from the inventory; returns whether it was
    /// present.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// The items the player carries, in acquisition order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Check if a variable is set. Names are case-sensitive.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Get a variable's value.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Get a variable coerced to an integer, falling back to `default`
    /// when the variable is absent or does not coerce.
    pub fn variable_int(&self, name: &str, default: i64) -> i64 {
        self.variables
            .get(name)
            .and_then(Value::as_int)
            .unwrap_or(default)
    }

    /// Set a variable. Empty names are ignored.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.variables.insert(name, value.into());
    }

    /// The full variable table.
    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }
}
