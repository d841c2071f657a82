use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add(home: &Path, title: &str, author: &str, status: &str) {
    shelf(home)
        .args(["add", title, author, "--status", status])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));
}

#[test]
fn empty_shelf_lists_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    shelf(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."))
        .stdout(predicate::str::contains("all (0)"));
}

#[test]
fn filter_by_status_and_search() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Angular Pro", "Adam Freeman", "reading");
    add(home, "TypeScript Mastery", "Jane Doe", "finished");
    add(home, "RxJS in Depth", "Ben Lesh", "want-to-read");

    shelf(home)
        .args(["list", "--status", "finished"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TypeScript Mastery"))
        .stdout(predicate::str::contains("Angular Pro").not())
        .stdout(predicate::str::contains("Finished (1)"));

    shelf(home)
        .args(["ls", "-q", "ANGULAR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Angular Pro"))
        .stdout(predicate::str::contains("TypeScript Mastery").not())
        .stdout(predicate::str::contains("Showing 1-1 of 1"));
}

#[test]
fn pages_follow_configured_size() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    for title in ["Alpha", "Bravo", "Charlie"] {
        add(home, title, "Writer", "reading");
    }

    shelf(home)
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    shelf(home)
        .args(["list", "--sort", "title", "--asc", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Charlie"))
        .stdout(predicate::str::contains("Alpha").not())
        .stdout(predicate::str::contains("Showing 3-3 of 3"))
        .stdout(predicate::str::contains("[2]"));
}

#[test]
fn out_of_range_page_is_a_warning_not_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Only Book", "Writer", "reading");

    shelf(home)
        .args(["list", "--page", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Only Book"))
        .stdout(predicate::str::contains("Page 999 is out of range"));
}

#[test]
fn mark_then_stats() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Dune", "Frank Herbert", "reading");

    let books = std::fs::read_to_string(home.join("books.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&books).unwrap();
    let id = parsed[0]["id"].as_str().unwrap().to_string();

    shelf(home)
        .args(["mark", &id[..8], "finished"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading -> Finished"));

    shelf(home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("100% of your shelf is finished"));
}

#[test]
fn users_have_separate_shelves() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Mine", "Writer", "reading");

    shelf(home)
        .args(["list", "--user", "someone-else"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn unknown_book_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    shelf(temp_dir.path())
        .args(["mark", "deadbeef", "finished"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No book matches id deadbeef"));
}
