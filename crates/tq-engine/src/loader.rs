//! Scene catalog loading.
//!
//! The scene source document is a JSON array of scene records. Loading
//! never fails: a missing or structurally broken document is replaced
//! by the built-in catalog, malformed fields are repaired in place,
//! and every repair is reported as a warning. Field names match
//! case-insensitively.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value as Json};
use thiserror::Error;
use tracing::warn;

use tq_core::{Catalog, Choice, Condition, Effect, Scene};

use crate::assets::{self, DEFAULT_IMAGE};

/// Label substituted for a choice that has no text.
pub const DEFAULT_CHOICE_TEXT: &str = "Continue...";

/// Structural failure of a scene document. Callers of
/// [`load_catalog`] never see this; it only distinguishes fallback
/// reasons and feeds the `check` diagnostics.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The document's root is not an array of scene records.
    #[error("scene document root is not an array")]
    NotAnArray,
}

/// Load a catalog from a scene document, falling back to the built-in
/// catalog when the file is missing, unparsable, or yields no scenes.
/// Image references are validated against `assets_root`.
pub fn load_catalog(path: &Path, assets_root: &Path) -> Catalog {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            warn!(path = %path.display(), %error, "scene document unreadable, using built-in catalog");
            return fallback_catalog();
        }
    };

    match parse_catalog(&text, assets_root) {
        Ok(catalog) if !catalog.is_empty() => catalog,
        Ok(_) => {
            warn!(path = %path.display(), "scene document contains no scenes, using built-in catalog");
            fallback_catalog()
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "scene document invalid, using built-in catalog");
            fallback_catalog()
        }
    }
}

/// Parse a scene document into a catalog.
///
/// Structural failures (bad JSON, non-array root) are errors; anything
/// recoverable — duplicate ids, missing choice text, bad images,
/// unknown script tokens — is repaired and warned about.
pub fn parse_catalog(document: &str, assets_root: &Path) -> Result<Catalog, ParseError> {
    let root: Json = serde_json::from_str(document)?;
    let records = root.as_array().ok_or(ParseError::NotAnArray)?;

    let mut catalog = Catalog::new();
    for record in records {
        let Some(scene) = parse_scene(record, assets_root) else {
            continue;
        };
        let id = scene.id.clone();
        if catalog.insert(scene).is_some() {
            warn!(scene = %id, "duplicate scene id, later definition wins");
        }
    }
    Ok(catalog)
}

fn parse_scene(record: &Json, assets_root: &Path) -> Option<Scene> {
    let Some(obj) = record.as_object() else {
        warn!("skipping non-object scene record");
        return None;
    };

    let id = str_field(obj, "id").unwrap_or_default();
    if id.is_empty() {
        warn!("skipping scene record without an id");
        return None;
    }

    let mut scene = Scene::new(id, str_field(obj, "text").unwrap_or_default())
        .with_image(validate_image(id, str_field(obj, "imagePath"), assets_root));

    if let Some(choices) = field(obj, "choices").and_then(Json::as_array) {
        for choice in choices {
            if let Some(choice) = parse_choice(id, choice) {
                scene = scene.with_choice(choice);
            }
        }
    }
    Some(scene)
}

fn parse_choice(scene_id: &str, record: &Json) -> Option<Choice> {
    let Some(obj) = record.as_object() else {
        warn!(scene = %scene_id, "skipping non-object choice record");
        return None;
    };

    let text = match str_field(obj, "text") {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            warn!(scene = %scene_id, "choice without text, using placeholder");
            DEFAULT_CHOICE_TEXT.to_string()
        }
    };

    let mut choice = Choice::new(text);

    if let Some(next) = str_field(obj, "nextSceneId").filter(|s| !s.is_empty()) {
        choice = choice.to_scene(next);
    }

    let condition = Condition::parse(str_field(obj, "condition").unwrap_or_default());
    if let Condition::Unknown(raw) = &condition {
        warn!(scene = %scene_id, condition = %raw, "unrecognized condition, choice will be blocked");
    }
    choice = choice.with_condition(condition);

    if let Some(effect) = Effect::parse(str_field(obj, "effect").unwrap_or_default()) {
        if let Effect::Unknown(raw) = &effect {
            warn!(scene = %scene_id, effect = %raw, "unrecognized effect, it will not apply");
        }
        choice = choice.with_effect(effect);
    }
    Some(choice)
}

fn validate_image(scene_id: &str, image_path: Option<&str>, assets_root: &Path) -> String {
    let Some(image_path) = image_path.filter(|p| !p.is_empty()) else {
        warn!(scene = %scene_id, "scene without image, using default");
        return DEFAULT_IMAGE.to_string();
    };
    if !assets::has_image_extension(image_path) {
        warn!(scene = %scene_id, image = %image_path, "not a jpg/jpeg image, using default");
        return DEFAULT_IMAGE.to_string();
    }
    assets::resolve_image(assets_root, image_path)
}

/// Case-insensitive object field lookup.
fn field<'a>(obj: &'a Map<String, Json>, name: &str) -> Option<&'a Json> {
    obj.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

fn str_field<'a>(obj: &'a Map<String, Json>, name: &str) -> Option<&'a str> {
    field(obj, name).and_then(Json::as_str)
}

/// The built-in catalog used whenever a scene document cannot be
/// loaded: a small closed four-scene graph that is always playable.
pub fn fallback_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.insert(
        Scene::new(
            "start",
            "You are standing in a dark room. Two doors face you: one on the left, one on the right.",
        )
        .with_image(DEFAULT_IMAGE)
        .with_choice(Choice::new("Open the left door").to_scene("left_room"))
        .with_choice(Choice::new("Open the right door").to_scene("right_room"))
        .with_choice(
            Choice::new("Look around")
                .to_scene("look_around")
                .with_effect(Effect::AddItem {
                    item: "Lantern".to_string(),
                }),
        ),
    );

    catalog.insert(
        Scene::new("left_room", "You enter a library. An ancient book lies on the table.")
            .with_image(DEFAULT_IMAGE)
            .with_choice(
                Choice::new("Take the book")
                    .to_scene("left_room")
                    .with_condition(Condition::NotHasItem {
                        item: "Ancient Book".to_string(),
                    })
                    .with_effect(Effect::AddItem {
                        item: "Ancient Book".to_string(),
                    }),
            )
            .with_choice(Choice::new("Go back").to_scene("start")),
    );

    catalog.insert(
        Scene::new("right_room", "The door is locked. You need a key.")
            .with_image(DEFAULT_IMAGE)
            .with_choice(
                Choice::new("Unlock the door")
                    .to_scene("start")
                    .with_condition(Condition::HasItem {
                        item: "Key".to_string(),
                    })
                    .with_effect(Effect::RemoveItem {
                        item: "Key".to_string(),
                    }),
            )
            .with_choice(Choice::new("Go back").to_scene("start")),
    );

    catalog.insert(
        Scene::new("look_around", "In the corner of the room you find an old lantern.")
            .with_image(DEFAULT_IMAGE)
            .with_choice(Choice::new("Return to the doors").to_scene("start")),
    );

    catalog
}
