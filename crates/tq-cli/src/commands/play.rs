use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tq_engine::Engine;

/// Run an interactive play session against a scene document.
pub fn run(scenes: &Path, save: &Path, assets: &Path) -> Result<(), String> {
    let mut engine = Engine::with_assets_root(scenes, assets);

    println!("{}", "TextQuest".bold());
    println!("Type a choice number, or 'help' for commands.");
    render(&engine);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "q" => break,
            "help" | "?" => help(),
            "status" | "inventory" | "i" => println!("{}", engine.status_line()),
            "save" => match engine.save(save) {
                Ok(()) => println!("{}", format!("Game saved to {}", save.display()).green()),
                Err(e) => println!("{}", format!("Save failed: {e}").red()),
            },
            "load" => match engine.load(save) {
                Ok(()) => {
                    println!("{}", format!("Game loaded from {}", save.display()).green());
                    render(&engine);
                }
                Err(e) => println!("{}", format!("Load failed: {e}").red()),
            },
            "new" => {
                engine.reset();
                println!("{}", "New game started.".green());
                render(&engine);
            }
            _ => match input.parse::<usize>() {
                Ok(n) if n >= 1 => match engine.make_choice(n - 1) {
                    Ok(()) => render(&engine),
                    Err(e) => println!("{}", e.to_string().yellow()),
                },
                _ => println!("Type a choice number, or 'help' for commands."),
            },
        }

        prompt()?;
    }

    Ok(())
}

fn render(engine: &Engine) {
    let scene = engine.current_scene();
    let available = engine.available_choices();

    println!();
    println!("{}", scene.text.bold());
    for (i, choice) in scene.choices.iter().enumerate() {
        if available.contains(&choice.text) {
            println!("  [{}] {}", i + 1, choice.text);
        } else {
            println!("{}", format!("  [{}] {} (locked)", i + 1, choice.text).dimmed());
        }
    }
    println!("{}", engine.status_line().dimmed());
}

fn help() {
    println!("Commands:");
    println!("  <number>   take that choice");
    println!("  status     show inventory and variables (also: inventory, i)");
    println!("  save       save the game");
    println!("  load       load the saved game");
    println!("  new        start a new game");
    println!("  quit       leave (also: q)");
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout()
        .flush()
        .map_err(|e| format!("cannot write output: {e}"))
}
