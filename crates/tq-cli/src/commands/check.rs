use std::fs;
use std::path::Path;

use colored::Colorize;
use tq_core::{Condition, Effect};
use tq_engine::loader;

/// Validate a scene document: report scene/choice counts plus the
/// anomalies the engine would tolerate at runtime (dangling targets,
/// missing targets, unrecognized conditions and effects).
pub fn run(scenes: &Path, assets: &Path) -> Result<(), String> {
    let document = fs::read_to_string(scenes)
        .map_err(|e| format!("cannot read {}: {e}", scenes.display()))?;
    let catalog = loader::parse_catalog(&document, assets)
        .map_err(|e| format!("invalid scene document: {e}"))?;

    let choice_count: usize = catalog.scenes().map(|s| s.choices.len()).sum();
    println!(
        "{}: {} scenes, {} choices",
        scenes.display(),
        catalog.len(),
        choice_count
    );

    let mut warnings = 0;
    let mut warn = |message: String| {
        println!("{}", format!("warning: {message}").yellow());
        warnings += 1;
    };

    if !catalog.contains("start") {
        warn("no 'start' scene; play begins at the first scene".to_string());
    }

    for scene in catalog.scenes() {
        for choice in &scene.choices {
            match &choice.next_scene_id {
                Some(target) if !catalog.contains(target) => {
                    warn(format!(
                        "{}: \"{}\" leads to unknown scene '{}'",
                        scene.id, choice.text, target
                    ));
                }
                None => {
                    warn(format!(
                        "{}: \"{}\" has no target scene",
                        scene.id, choice.text
                    ));
                }
                _ => {}
            }
            if let Condition::Unknown(raw) = &choice.condition {
                warn(format!(
                    "{}: \"{}\" has unrecognized condition '{raw}'",
                    scene.id, choice.text
                ));
            }
            if let Some(Effect::Unknown(raw)) = &choice.effect {
                warn(format!(
                    "{}: \"{}\" has unrecognized effect '{raw}'",
                    scene.id, choice.text
                ));
            }
        }
    }

    if warnings == 0 {
        println!("{}", "No anomalies found.".green());
    } else {
        println!("{warnings} warning(s); the game stays playable, anomalies are tolerated at runtime");
    }
    Ok(())
}
