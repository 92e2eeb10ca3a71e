use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn agenda_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ag").expect("Failed to find ag binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper function to extract an event ID from `(ID: evt-...)` output
fn extract_event_id(output: &str) -> String {
    extract_id_after(output, "(ID: ", ')')
}

/// Helper function to extract an item ID from `Created item with ID:` output
fn extract_item_id(output: &str) -> String {
    extract_id_after(output, "Created item with ID: ", '\n')
}

fn extract_id_after(output: &str, marker: &str, terminator: char) -> String {
    let start = output
        .find(marker)
        .unwrap_or_else(|| panic!("Could not find '{marker}' in output: {output}"))
        + marker.len();
    let rest = &output[start..];
    let end = rest.find(terminator).unwrap_or(rest.len());
    rest[..end].trim().to_string()
}

fn stdout_string(output: Vec<u8>) -> String {
    String::from_utf8(output).expect("Invalid UTF-8")
}

fn create_event(db_arg: &str, name: &str) -> String {
    let output = agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "event",
            "create",
            name,
            "--days",
            "2",
            "--day-starts",
            "09:00,10:00",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_event_id(&stdout_string(output))
}

fn add_item(db_arg: &str, event_id: &str, topic: &str, duration: &str) -> String {
    let output = agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "add",
            event_id,
            topic,
            "--duration",
            duration,
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_item_id(&stdout_string(output))
}

#[test]
fn test_cli_create_event_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "event",
            "create",
            "Team Offsite",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Event Created"))
        .stdout(predicate::str::contains("Team Offsite"))
        .stdout(predicate::str::contains("(ID: evt-"));
}

#[test]
fn test_cli_create_event_with_day_starts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "event",
            "create",
            "Conference",
            "--days",
            "2",
            "--day-starts",
            "09:00,10:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day starts: 09:00, 10:30"));
}

#[test]
fn test_cli_create_event_rejects_bad_time() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "event",
            "create",
            "Conference",
            "--day-starts",
            "9am",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty_events() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[test]
fn test_cli_list_events() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    create_event(db_arg, "Listed Event");

    agenda_cmd()
        .args(["--database-file", db_arg, "event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Events"))
        .stdout(predicate::str::contains("Listed Event"));
}

#[test]
fn test_cli_add_item_and_show_timetable() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Timed Event");
    add_item(db_arg, &event_id, "Opening", "30");
    add_item(db_arg, &event_id, "Keynote", "60");

    agenda_cmd()
        .args(["--database-file", db_arg, "show", &event_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Day 1 (starts 09:00)"))
        .stdout(predicate::str::contains("**09:00–09:30** Opening (30 min)"))
        .stdout(predicate::str::contains("**09:30–10:30** Keynote (60 min)"));
}

#[test]
fn test_cli_add_filler_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Break Event");

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "add",
            &event_id,
            "Coffee",
            "--duration",
            "15",
            "--filler",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("*(filler)*"));
}

#[test]
fn test_cli_add_item_rejects_zero_duration() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Zero Event");

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "add",
            &event_id,
            "Nothing",
            "--duration",
            "0",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_update_item_duration() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Update Event");
    let item_id = add_item(db_arg, &event_id, "Opening", "30");

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "update",
            &event_id,
            &item_id,
            "--duration",
            "45",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated item"))
        .stdout(predicate::str::contains("(45 min)"));
}

#[test]
fn test_cli_move_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Move Event");
    add_item(db_arg, &event_id, "Opening", "30");
    let keynote = add_item(db_arg, &event_id, "Keynote", "60");

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "move",
            &event_id,
            &keynote,
            "--index",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("**09:00–10:00** Keynote (60 min)"))
        .stdout(predicate::str::contains("**10:00–10:30** Opening (30 min)"));
}

#[test]
fn test_cli_move_item_across_days() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Cross Event");
    let opening = add_item(db_arg, &event_id, "Opening", "30");

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "move",
            &event_id,
            &opening,
            "--day",
            "1",
            "--index",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Day 2 (starts 10:00)"))
        .stdout(predicate::str::contains("**10:00–10:30** Opening (30 min)"));
}

#[test]
fn test_cli_nudge_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Nudge Event");
    let opening = add_item(db_arg, &event_id, "Opening", "30");
    add_item(db_arg, &event_id, "Keynote", "60");

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "nudge",
            &event_id,
            &opening,
            "down",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("**09:00–10:00** Keynote (60 min)"))
        .stdout(predicate::str::contains("**10:00–10:30** Opening (30 min)"));
}

#[test]
fn test_cli_delete_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Delete Event");
    let opening = add_item(db_arg, &event_id, "Opening", "30");
    add_item(db_arg, &event_id, "Keynote", "60");

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "delete",
            &event_id,
            &opening,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted item"))
        .stdout(predicate::str::contains("**09:00–10:00** Keynote (60 min)"));
}

#[test]
fn test_cli_delete_event_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let event_id = create_event(db_arg, "Kept Event");

    agenda_cmd()
        .args(["--database-file", db_arg, "event", "delete", &event_id])
        .assert()
        .failure();

    agenda_cmd()
        .args([
            "--database-file",
            db_arg,
            "event",
            "delete",
            &event_id,
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted event"));
}

#[test]
fn test_cli_show_unknown_event() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "show",
            "evt-ghost",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_help_output() {
    agenda_cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("event"))
        .stdout(predicate::str::contains("item"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_cli_item_help() {
    agenda_cmd()
        .args(["item", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("move"))
        .stdout(predicate::str::contains("nudge"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_cli_version_output() {
    agenda_cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ag "));
}
