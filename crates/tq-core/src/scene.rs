use std::collections::HashMap;

use crate::script::{Condition, Effect};

/// A node in the narrative graph: display text, an image reference,
/// and the outgoing choices. Scenes are immutable once loaded and are
/// replaced wholesale when the catalog reloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Non-empty unique key of the scene.
    pub id: String,
    /// Display body shown to the player.
    pub text: String,
    /// Image asset reference; the loader guarantees this is either a
    /// validated path or the default sentinel.
    pub image_path: String,
    /// Outgoing choices, in document order.
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no image and no choices.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            image_path: String::new(),
            choices: Vec::new(),
        }
    }

    /// Set the image path.
    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }
}

/// A labeled edge out of a scene, gated by a condition and carrying an
/// optional effect. A choice belongs to exactly one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// The label shown to the player.
    pub text: String,
    /// Target scene key. `None` (or empty in source data) means the
    /// choice applies its effect without transitioning, which the
    /// engine reports as a data anomaly.
    pub next_scene_id: Option<String>,
    /// Gate over the game state; defaults to always available.
    pub condition: Condition,
    /// Mutation applied when the choice is taken.
    pub effect: Option<Effect>,
}

impl Choice {
    /// Create a choice with the given label, no target, no condition,
    /// and no effect.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next_scene_id: None,
            condition: Condition::Always,
            effect: None,
        }
    }

    /// Set the target scene.
    pub fn to_scene(mut self, id: impl Into<String>) -> Self {
        self.next_scene_id = Some(id.into());
        self
    }

    /// Set the gating condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// The full keyed set of loaded scenes. Built once per load, owned by
/// the engine, never persisted. Insertion order is remembered so
/// iteration and reporting stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    scenes: HashMap<String, Scene>,
    order: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scene, keyed by its id. A scene with an already-present
    /// id replaces the earlier one (keeping its position) and the
    /// replaced scene is returned.
    pub fn insert(&mut self, scene: Scene) -> Option<Scene> {
        let id = scene.id.clone();
        let replaced = self.scenes.insert(id.clone(), scene);
        if replaced.is_none() {
            self.order.push(id);
        }
        replaced
    }

    /// Look up a scene by id.
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Check if a scene id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the catalog holds no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Scenes in insertion order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.order.iter().filter_map(|id| self.scenes.get(id))
    }

    /// The first scene id in insertion order, if any.
    pub fn first_id(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_builder() {
        let scene = Scene::new("start", "A dark room.")
            .with_image("Images/start.jpg")
            .with_choice(Choice::new("Look around").to_scene("look_around"));

        assert_eq!(scene.id, "start");
        assert_eq!(scene.image_path, "Images/start.jpg");
        assert_eq!(scene.choices.len(), 1);
        assert_eq!(scene.choices[0].next_scene_id.as_deref(), Some("look_around"));
    }

    #[test]
    fn choice_defaults_to_always_available() {
        let choice = Choice::new("Go");
        assert_eq!(choice.condition, Condition::Always);
        assert!(choice.effect.is_none());
        assert!(choice.next_scene_id.is_none());
    }

    #[test]
    fn duplicate_id_replaces_earlier_scene() {
        let mut catalog = Catalog::new();
        catalog.insert(Scene::new("start", "first"));
        catalog.insert(Scene::new("hall", "a hall"));
        let replaced = catalog.insert(Scene::new("start", "second"));

        assert_eq!(replaced.map(|s| s.text), Some("first".to_string()));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("start").map(|s| s.text.as_str()), Some("second"));
        // Position in insertion order is kept.
        assert_eq!(catalog.ids().collect::<Vec<_>>(), ["start", "hall"]);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut catalog = Catalog::new();
        for id in ["c", "a", "b"] {
            catalog.insert(Scene::new(id, ""));
        }
        assert_eq!(catalog.ids().collect::<Vec<_>>(), ["c", "a", "b"]);
        assert_eq!(catalog.first_id(), Some("c"));
    }
}
