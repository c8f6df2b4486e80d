use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing.
///
/// The config directory points into `temp_dir` so a user's own seed file
/// never leaks into the tests.
fn fb_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fb").expect("Failed to find fb binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path());
    cmd.arg("--no-color");
    cmd
}

/// Runs the shell with one command per line.
fn shell(temp_dir: &TempDir, script: &[&str]) -> assert_cmd::assert::Assert {
    let mut input = script.join("\n");
    input.push('\n');
    fb_cmd(temp_dir).arg("shell").write_stdin(input).assert()
}

#[test]
fn test_show_board() {
    let temp_dir = create_cli_test_environment();

    fb_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Board"))
        .stdout(predicate::str::contains("## ○ To Do (3)"))
        .stdout(predicate::str::contains("## ➤ In Progress (1)"))
        .stdout(predicate::str::contains("## ✓ Done (1)"))
        .stdout(predicate::str::contains("**Complete Math Assignment** ★★★ (0/3)"));
}

#[test]
fn test_show_single_column() {
    let temp_dir = create_cli_test_environment();

    fb_cmd(&temp_dir)
        .args(["show", "--column", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## ✓ Done (1)"))
        .stdout(predicate::str::contains("Bake cupcakes for school outing"))
        .stdout(predicate::str::contains("To Do").not());
}

#[test]
fn test_seed_file_replaces_built_in_tasks() {
    let temp_dir = create_cli_test_environment();
    let seed = temp_dir.path().join("tasks.json");
    fs::write(
        &seed,
        r#"[{"id": "t1", "title": "Water the plants", "impactStars": 2, "column": "inProgress"}]"#,
    )
    .unwrap();

    fb_cmd(&temp_dir)
        .args(["--seed-file", seed.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## ➤ In Progress (1)"))
        .stdout(predicate::str::contains("Water the plants ★★☆"))
        .stdout(predicate::str::contains("Complete Math Assignment").not());
}

#[test]
fn test_config_seed_is_picked_up() {
    let temp_dir = create_cli_test_environment();
    let config_dir = temp_dir.path().join("focusboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("seed.json"),
        r#"[{"id": "c1", "title": "From config", "impactStars": 1}]"#,
    )
    .unwrap();

    fb_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("From config"));
}

#[test]
fn test_missing_seed_file_fails() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    fb_cmd(&temp_dir)
        .args(["--seed-file", missing.to_str().unwrap(), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize board"));
}

#[test]
fn test_zero_minute_sessions_are_rejected() {
    let temp_dir = create_cli_test_environment();

    fb_cmd(&temp_dir)
        .args(["--focus-minutes", "0", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("focus_minutes"));
}

#[test]
fn test_shell_board_commands() {
    let temp_dir = create_cli_test_environment();

    shell(
        &temp_dir,
        &[
            "move task-1 in-progress",
            "impact task-2 3",
            "add task-2 Proofread the essay",
            "toggle task-2 step-2a",
            "show task-2",
        ],
    )
    .success()
    .stdout(predicate::str::contains("Focusboard shell."))
    .stdout(predicate::str::contains(
        "Success: Moved Complete Math Assignment to In Progress",
    ))
    .stdout(predicate::str::contains("## Write English Essay ★★★"))
    .stdout(predicate::str::contains("Success: Added step to Write English Essay"))
    .stdout(predicate::str::contains("Success: Checked Create outline"))
    .stdout(predicate::str::contains("- [x] Create outline `step-2a`"))
    .stdout(predicate::str::contains("- [ ] Proofread the essay `step-1`"));
}

#[test]
fn test_shell_reports_bad_input_and_continues() {
    let temp_dir = create_cli_test_environment();

    shell(
        &temp_dir,
        &[
            "show ghost",
            "impact task-1 9",
            "add task-5 Eat cupcakes",
            "pause",
            "fly away",
            "board",
        ],
    )
    .success()
    .stdout(predicate::str::contains("Error: Task with ID 'ghost' not found"))
    .stdout(predicate::str::contains(
        "Error: Invalid input for field 'impact_stars'",
    ))
    .stdout(predicate::str::contains(
        "Error: Bake cupcakes for school outing is done and takes no new steps",
    ))
    .stdout(predicate::str::contains("Error: No focus session is open"))
    .stdout(predicate::str::contains("'fly'"))
    .stdout(predicate::str::contains("# Board"));
}

#[test]
fn test_shell_moving_to_done_celebrates() {
    let temp_dir = create_cli_test_environment();

    shell(&temp_dir, &["move task-4 done"])
        .success()
        .stdout(predicate::str::contains("🎉 **Done!** `task-4` is finished."));
}

#[test]
fn test_shell_focus_session_is_saved_into_the_task() {
    let temp_dir = create_cli_test_environment();

    shell(
        &temp_dir,
        &[
            "focus task-1",
            "adjust +5",
            "start",
            "end",
            "select step-1a",
            "next Ask about problem 7",
            "done Re-read the examples",
            "close",
        ],
    )
    .success()
    .stdout(predicate::str::contains("## Focus: Complete Math Assignment"))
    .stdout(predicate::str::contains("**25:00**"))
    .stdout(predicate::str::contains("- State: running"))
    .stdout(predicate::str::contains("## Session summary: Complete Math Assignment"))
    .stdout(predicate::str::contains("- [x] Review chapter 5 formulas `step-1a`"))
    .stdout(predicate::str::contains("Success: Focus session saved"))
    .stdout(predicate::str::contains("- [ ] Ask about problem 7 `step-1`"))
    .stdout(predicate::str::contains("- [x] Re-read the examples `step-2`"));
}

#[test]
fn test_shell_cancel_before_start_discards() {
    let temp_dir = create_cli_test_environment();

    shell(&temp_dir, &["focus task-3", "close", "focus task-2", "status"])
        .success()
        .stdout(predicate::str::contains("Success: Focus session discarded"))
        .stdout(predicate::str::contains("## Focus: Write English Essay"))
        .stdout(predicate::str::contains("- State: ready"));
}

#[test]
fn test_shell_quit_stops_reading() {
    let temp_dir = create_cli_test_environment();

    shell(&temp_dir, &["quit", "board"])
        .success()
        .stdout(predicate::str::contains("# Board").not());
}

#[test]
fn test_shell_runs_by_default() {
    let temp_dir = create_cli_test_environment();

    fb_cmd(&temp_dir)
        .write_stdin("board\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## ○ To Do (3)"));
}
