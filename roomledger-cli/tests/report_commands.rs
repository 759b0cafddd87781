//! Integration tests for the reporting commands.

mod common;

use common::{TestEnv, DATE};
use predicates::prelude::*;

#[test]
fn test_availability_table() {
    let env = TestEnv::new();
    env.reserve("Penthouse", "Alice");

    env.command()
        .arg("availability")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hilton - 07-01-2025"))
        .stdout(predicate::str::contains(
            "1. Deluxe Suite (236 thru 250) - 15 available of 15 - $350.00 per night",
        ))
        .stdout(predicate::str::contains(
            "2. Penthouse (301 and 302) - 1 available of 2 - $1135.00 per night",
        ));
}

#[test]
fn test_availability_json() {
    let env = TestEnv::new();
    env.reserve("Deluxe Suite", "Alice");

    let output = env
        .command()
        .args(["availability", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["room_type"], "Deluxe Suite");
    assert_eq!(entries[0]["available"], 14);
    assert_eq!(entries[0]["occupied"], 1);
    assert_eq!(entries[0]["total"], 15);
}

#[test]
fn test_occupied_with_guests_is_ordered() {
    let env = TestEnv::new();
    env.reserve("Penthouse", "Alice");
    env.reserve("4", "Bob");
    env.reserve("Deluxe Suite", "Carol");

    env.command()
        .args(["occupied", "--with-guests"])
        .assert()
        .success()
        .stdout("101\tBob\n236\tCarol\n301\tAlice\n");
}

#[test]
fn test_guest_lookup() {
    let env = TestEnv::new();
    env.reserve("Penthouse", "Alice");
    env.reserve("Deluxe Suite", "Bob");
    env.reserve("Deluxe Suite", "Alice");

    env.command()
        .args(["guest", "Alice"])
        .assert()
        .success()
        .stdout("301\n237\n");
}

#[test]
fn test_unknown_guest_is_a_semantic_failure() {
    let env = TestEnv::new();

    env.command()
        .args(["guest", "Nobody"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No rooms found for guest Nobody"));
}

#[test]
fn test_show_csv() {
    let env = TestEnv::new();
    env.reserve("Deluxe Suite", "Alice");

    env.command()
        .args(["show", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "guest,room,room_type,stay_date,nights,check_in_hour,price_per_night,total_cost\n",
        ))
        .stdout(predicate::str::contains(format!(
            "Alice,236,Deluxe Suite,{DATE},1,15,350,350"
        )));
}

#[test]
fn test_show_quotes_commas_in_csv() {
    let env = TestEnv::new();
    env.reserve("3", "Alice");

    env.command()
        .args(["show", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice,201,\"Standard Room, Scenic\""));
}

#[test]
fn test_total_report() {
    let env = TestEnv::new();
    env.reserve("Deluxe Suite", "Alice");
    env.reserve("Penthouse", "Bob");

    env.command()
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total revenue for 07-01-2025: $1485.00"))
        .stdout(predicate::str::contains("Alice\t236\nBob\t301\n"))
        .stdout(predicate::str::contains("Occupied rooms: 236 301"));
}

#[test]
fn test_total_json() {
    let env = TestEnv::new();
    env.reserve("Deluxe Suite", "Alice");

    let output = env.command().args(["total", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["date"], DATE);
    assert_eq!(report["bookings"][0]["guest"], "Alice");
    assert_eq!(report["bookings"][0]["room"], 236);
    assert_eq!(report["occupied_rooms"][0], 236);
}

#[test]
fn test_reach_order() {
    let env = TestEnv::new();

    env.command()
        .args(["reach", "240"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("240 239 241 238 242"));
}

#[test]
fn test_load_replays_legacy_records() {
    let env = TestEnv::new();
    env.write_record(DATE, "$700\nAlice,236\nBob,301\n");

    env.command()
        .args(["occupied", "--with-guests"])
        .assert()
        .success()
        .stdout("236\tAlice\n301\tBob\n");
}

#[test]
fn test_load_warns_about_malformed_lines() {
    let env = TestEnv::new();
    env.write_record(DATE, "TOTAL_REVENUE=350\nAlice,236\ngarbage\n");

    env.command()
        .arg("history")
        .assert()
        .success()
        .stdout("Alice\n")
        .stderr(predicate::str::contains("Warning: skipped line 3"));
}
