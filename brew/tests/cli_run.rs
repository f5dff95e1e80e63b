//! CLI tests for `brew run`, `brew list` and `brew check`.
//!
//! Spawns the brew binary and verifies stdout and exit codes.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use brew::exit_codes;
use brew::test_support::RecipeBookFixture;

fn brew(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_brew"))
        .args(args)
        .env_remove("BREW_RECIPES")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn brew");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("brew output")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn run_reads_choice_from_stdin() {
    let output = brew(&["run"], "  Milk \n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Choose a type (black/milk): Boiling water...",
            "Brewing coffee...",
            "Adding sugar...",
            "Adding milk...",
            "Tasting: brewed + sugar + milk",
            "Enjoying: brewed + sugar + milk",
        ]
    );
}

#[test]
fn run_with_argument_skips_prompt_and_prints_json() {
    let output = brew(&["run", "black", "--json"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Boiling water...");
    assert_eq!(lines[4], "Enjoying: brewed + sugar");
    assert_eq!(lines[5], r#"{"water":"hot","coffee":"brewed + sugar"}"#);
}

#[test]
fn unknown_choice_exits_with_lookup_code_before_any_action() {
    let output = brew(&["run", "latte"], "");

    assert_eq!(output.status.code(), Some(exit_codes::LOOKUP));
    assert!(stdout_lines(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown recipe choice: latte"));
}

#[test]
fn recipe_book_failures_map_to_exit_codes() {
    let fixture = RecipeBookFixture::new(
        r#"
[recipes]
bitter = ["boil_water", "grind", "brew_coffee"]
"#,
    )
    .expect("fixture");
    let path = fixture.path.to_str().expect("utf8 path");

    let output = brew(&["--recipes", path, "run", "bitter"], "");
    assert_eq!(output.status.code(), Some(exit_codes::LOOKUP));
    assert_eq!(stdout_lines(&output), vec!["Boiling water..."]);

    let fixture = RecipeBookFixture::new("[recipes]\nthin = [\"add_milk\"]\n").expect("fixture");
    let path = fixture.path.to_str().expect("utf8 path");
    // A fresh context starts with an empty beverage, so this run succeeds.
    let output = brew(&["--recipes", path, "run", "thin"], "");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output), vec!["Adding milk..."]);
}

#[test]
fn list_prints_recipes_with_groups() {
    let output = brew(&["list"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "black: boil_water, brew_coffee, add_sugar, taste_test, enjoy",
            "milk: boil_water, brew_coffee, [add_sugar, add_milk], taste_test, enjoy",
        ]
    );
}

#[test]
fn check_reports_unknown_actions() {
    let fixture = RecipeBookFixture::new("[recipes]\nbitter = [\"brew_coffee\", \"grind\"]\n")
        .expect("fixture");
    let path = fixture.path.to_str().expect("utf8 path");

    let output = brew(&["--recipes", path, "check"], "");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "fail: bitter",
            "- step 2: unknown action name: grind",
            "ok: black",
            "ok: milk",
        ]
    );

    let output = brew(&["check", "milk"], "");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output), vec!["ok: milk"]);
}

#[test]
fn actions_lists_registry_in_name_order() {
    let output = brew(&["actions"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let names: Vec<String> = stdout_lines(&output)
        .iter()
        .filter_map(|line| line.split(':').next().map(str::to_string))
        .collect();
    assert_eq!(
        names,
        vec![
            "add_milk",
            "add_sugar",
            "boil_water",
            "brew_coffee",
            "enjoy",
            "taste_test"
        ]
    );
}

#[test]
fn missing_recipe_book_exits_invalid_and_names_the_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("typo.toml");
    let path = missing.to_str().expect("utf8 path");

    let output = brew(&["--recipes", path, "run", "double"], "");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stdout_lines(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(path));
    assert!(stderr.contains("does not exist"));
    assert!(!stderr.contains("unknown recipe choice"));
}
