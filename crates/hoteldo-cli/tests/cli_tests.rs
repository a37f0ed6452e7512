use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hoteldo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hoteldo").expect("binary should build");
    cmd.current_dir(dir.path())
        .env("HOTELDO_DATABASE_PATH", dir.path().join("tasks.db"))
        .env("HOTELDO_TIMEZONE", "UTC");
    cmd
}

#[test]
fn add_reports_created_then_already_exists() {
    let dir = tempfile::tempdir().unwrap();

    hoteldo(&dir)
        .args(["add", "Clean lobby", "--due", "2024-06-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task"));

    hoteldo(&dir)
        .args(["add", "Clean lobby", "--due", "2024-06-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn add_rejects_malformed_date() {
    let dir = tempfile::tempdir().unwrap();

    hoteldo(&dir)
        .args(["add", "Clean lobby", "--due", "2024-13-40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn weekend_view_places_task_on_its_day() {
    let dir = tempfile::tempdir().unwrap();

    hoteldo(&dir)
        .args(["add", "Change bedsheets", "--due", "2024-06-15"])
        .assert()
        .success();

    // Wednesday the 12th targets the weekend of Friday the 14th.
    hoteldo(&dir)
        .args(["weekend", "--date", "2024-06-12"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2024-06-14")
                .and(predicate::str::contains("Change bedsheets")),
        );
}

#[test]
fn done_edit_delete_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    hoteldo(&dir)
        .args(["add", "Water plants", "--due", "2024-06-14"])
        .assert()
        .success();

    hoteldo(&dir)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed task #1"));

    hoteldo(&dir)
        .args(["edit", "1", "Water lobby plants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Water lobby plants"));

    hoteldo(&dir)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task #1"));

    hoteldo(&dir)
        .args(["delete", "1", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn list_shows_pagination_summary() {
    let dir = tempfile::tempdir().unwrap();

    for title in ["a", "b", "c"] {
        hoteldo(&dir)
            .args(["add", title, "--due", "2024-06-14"])
            .assert()
            .success();
    }

    hoteldo(&dir)
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Showing 2 of 3 task(s)")
                .and(predicate::str::contains("more available")),
        );

    hoteldo(&dir)
        .args(["list", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit"));
}

#[test]
fn health_reports_connected() {
    let dir = tempfile::tempdir().unwrap();

    hoteldo(&dir)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("connected"));
}
