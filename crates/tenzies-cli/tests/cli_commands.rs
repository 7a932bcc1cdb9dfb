//! Integration tests for the tenzies CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::collections::HashSet;

use assert_cmd::Command;
use predicates::prelude::*;

fn tenzies() -> Command {
    let mut cmd = Command::cargo_bin("tenzies").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    tenzies()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("play")
                .and(predicate::str::contains("deal"))
                .and(predicate::str::contains("tui")),
        );
}

#[test]
fn unknown_subcommand_fails() {
    tenzies().arg("cheat").assert().failure();
}

// ---------------------------------------------------------------------------
// deal
// ---------------------------------------------------------------------------

#[test]
fn deal_json_is_a_fresh_board() {
    let output = tenzies()
        .args(["deal", "--json", "--seed", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let board: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dice = board.as_array().unwrap();
    assert_eq!(dice.len(), 10);

    let mut ids = HashSet::new();
    for die in dice {
        let value = die["value"].as_u64().unwrap();
        assert!((1..=6).contains(&value));
        assert_eq!(die["held"], false);
        ids.insert(die["id"].as_str().unwrap().to_string());
    }
    assert_eq!(ids.len(), 10);
}

#[test]
fn deal_with_seed_is_reproducible() {
    let first = tenzies().args(["deal", "--seed", "7"]).output().unwrap();
    let second = tenzies().args(["deal", "--seed", "7"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn deal_text_shows_roll_label() {
    tenzies()
        .args(["deal", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next: Roll").and(predicate::str::contains("[*").not()));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_roll_and_quit() {
    tenzies()
        .args(["play", "--seed", "1"])
        .write_stdin("roll\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tenzies")
                .and(predicate::str::contains("Roll until all dice are the same."))
                .and(predicate::str::contains("Next: Roll"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_hold_marks_die() {
    tenzies()
        .args(["play", "--seed", "2"])
        .write_stdin("hold 1 4\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[*"));
}

#[test]
fn play_reports_bad_input_and_keeps_going() {
    tenzies()
        .args(["play", "--seed", "3"])
        .write_stdin("hold 11\ndance\nhold\nhelp\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid position: 11")
                .and(predicate::str::contains("unknown command: dance"))
                .and(predicate::str::contains("missing argument"))
                .and(predicate::str::contains("Commands:")),
        );
}

#[test]
fn play_ends_on_eof() {
    tenzies()
        .args(["play"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'help' for commands"));
}

#[test]
fn play_held_dice_survive_a_roll() {
    let output = tenzies()
        .args(["play", "--seed", "11"])
        .write_stdin("hold 1 2 3 4 5 6 7 8 9 10\nroll\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let boards: Vec<&str> = stdout
        .lines()
        .filter(|l| l.trim_start().starts_with('['))
        .collect();
    // Opening board, after hold, after roll.
    assert_eq!(boards.len(), 3);
    assert_eq!(boards[1], boards[2]);
    assert_eq!(boards[1].matches("[*").count(), 10);
}
