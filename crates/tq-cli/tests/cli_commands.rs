//! Integration tests for the `tq` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENES: &str = r#"[
    {
        "id": "start",
        "text": "A dark room. Two doors.",
        "choices": [
            {"text": "Open the left door", "nextSceneId": "library"},
            {"text": "Unlock the right door", "nextSceneId": "vault", "condition": "hasitem:Key"},
            {"text": "Search the floor", "nextSceneId": "start", "effect": "additem:Key"}
        ]
    },
    {
        "id": "library",
        "text": "Shelves of ancient books.",
        "choices": [{"text": "Go back", "nextSceneId": "start"}]
    },
    {
        "id": "vault",
        "text": "Gold everywhere.",
        "choices": [{"text": "Go back", "nextSceneId": "start"}]
    }
]"#;

fn scene_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scenes.json"), SCENES).unwrap();
    dir
}

fn tq() -> Command {
    let mut cmd = Command::cargo_bin("tq").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_counts() {
    let dir = scene_dir();
    tq().args(["check", "-s"])
        .arg(dir.path().join("scenes.json"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("3 scenes, 5 choices")
                .and(predicate::str::contains("No anomalies found.")),
        );
}

#[test]
fn check_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    tq().args(["check", "-s"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn check_fails_on_invalid_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scenes.json"), "{ broken").unwrap();
    tq().args(["check", "-s"])
        .arg(dir.path().join("scenes.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scene document"));
}

#[test]
fn check_warns_about_dangling_targets() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("scenes.json"),
        r#"[{"id": "start", "text": "", "choices": [
            {"text": "Step through", "nextSceneId": "nowhere"},
            {"text": "Wait"},
            {"text": "Cheat", "nextSceneId": "start", "condition": "teleport:anywhere"}
        ]}]"#,
    )
    .unwrap();

    tq().args(["check", "-s"])
        .arg(dir.path().join("scenes.json"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown scene 'nowhere'")
                .and(predicate::str::contains("has no target scene"))
                .and(predicate::str::contains("unrecognized condition"))
                .and(predicate::str::contains("3 warning(s)")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_walks_the_graph() {
    let dir = scene_dir();
    tq().args(["play", "-s"])
        .arg(dir.path().join("scenes.json"))
        .write_stdin("1\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A dark room.")
                .and(predicate::str::contains("Shelves of ancient books.")),
        );
}

#[test]
fn play_blocks_gated_choice_until_condition_met() {
    let dir = scene_dir();
    tq().args(["play", "-s"])
        .arg(dir.path().join("scenes.json"))
        .write_stdin("2\n3\n2\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("condition not met")
                .and(predicate::str::contains("Gold everywhere.")),
        );
}

#[test]
fn play_saves_and_loads() {
    let dir = scene_dir();
    let save = dir.path().join("save.json");

    tq().args(["play", "-s"])
        .arg(dir.path().join("scenes.json"))
        .arg("--save")
        .arg(&save)
        .write_stdin("3\nsave\nnew\nload\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Game saved to")
                .and(predicate::str::contains("New game started."))
                .and(predicate::str::contains("Game loaded from"))
                .and(predicate::str::contains("Inventory (1): Key")),
        );

    assert!(save.exists());
}

#[test]
fn play_falls_back_to_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    tq().args(["play", "-s"])
        .arg(dir.path().join("missing.json"))
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are standing in a dark room."));
}

#[test]
fn play_rejects_out_of_range_choice() {
    let dir = scene_dir();
    tq().args(["play", "-s"])
        .arg(dir.path().join("scenes.json"))
        .write_stdin("9\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid choice: 8"));
}
