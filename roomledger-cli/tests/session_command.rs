//! Integration tests for the interactive `session` command.

mod common;

use common::{TestEnv, DATE};
use predicates::prelude::*;

#[test]
fn test_session_books_and_saves_on_quit() {
    let env = TestEnv::new();

    env.command()
        .arg("session")
        .write_stdin("reserve\nDeluxe Suite\nAlice\n2\n\ntotal\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reserved Deluxe Suite room 236 for Alice"))
        .stdout(predicate::str::contains("Total revenue: $700.00"))
        .stdout(predicate::str::contains("Goodbye"));

    assert!(env
        .read_record(DATE)
        .contains(&format!("Alice,236,Deluxe Suite,{DATE},2,15,350,700")));
}

#[test]
fn test_session_continues_after_errors() {
    let env = TestEnv::new();

    env.command()
        .arg("session")
        .write_stdin("reserve\nPresidential\nAlice\n\n\noccupied\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("No rooms are occupied"));

    assert!(!env.record_path(DATE).exists());
}

#[test]
fn test_session_sees_earlier_bookings() {
    let env = TestEnv::new();
    env.reserve("Penthouse", "Alice");

    env.command()
        .arg("session")
        .write_stdin("guest Alice\nundo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice: 301"))
        .stdout(predicate::str::contains("Undid booking of room 301 for Alice"));

    assert!(!env.record_path(DATE).exists());
}

#[test]
fn test_session_quit_keeps_records_it_could_not_restore() {
    let env = TestEnv::new();
    let contents = "TOTAL_REVENUE=350\nAlice,236,Deluxe Suite,07-02-2025,1,15,350,350\nBob,999\n";
    env.write_record(DATE, contents);

    env.command()
        .arg("session")
        .write_stdin("total\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No changes to save for {DATE}")));

    assert_eq!(env.read_record(DATE), contents);
}
