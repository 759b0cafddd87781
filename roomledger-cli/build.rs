//! Build script for roomledger-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: build scripts cannot depend on the crate being built, so the command
//! structure is declared here as well.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("roomledger")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book hotel rooms and keep the daily reservation ledger")
        .long_about(
            "Command-line tool for booking hotel rooms, undoing bookings and keeping \
             one plain-text reservation record file per date",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Hotel configuration file (YAML)")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("records-dir")
                .long("records-dir")
                .help("Directory holding the per-date record files")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .help("Active date label (default: today, as MM-DD-YYYY)")
                .value_name("DATE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("reserve")
                .about("Book the lowest free room of a type")
                .long_about("Book the lowest-numbered free room of a room type for a guest"),
            Command::new("undo")
                .about("Reverse the most recent booking")
                .long_about("Reverse the most recent booking of the active date"),
            Command::new("availability")
                .about("Show free and occupied rooms per type")
                .long_about("Display every room type with its price and free room count"),
            Command::new("occupied")
                .about("List occupied rooms in ascending order")
                .long_about("List the occupied rooms of the active date in ascending order"),
            Command::new("guest")
                .about("Look up a guest's rooms")
                .long_about("Show the rooms a guest holds on the active date"),
            Command::new("history")
                .about("Show guests in booking order")
                .long_about("Show the guest of every active booking, oldest first"),
            Command::new("show")
                .about("List a date's reservations")
                .long_about("Display the reservations of a date in table, JSON or CSV format"),
            Command::new("total")
                .about("Show revenue and bookings for the active date")
                .long_about("Show the active date's revenue, its bookings and the occupied rooms"),
            Command::new("reach")
                .about("Show rooms reachable from a room")
                .long_about("List the rooms reachable from a room in breadth-first order"),
            Command::new("session")
                .about("Run an interactive booking session")
                .long_about("Accept booking commands from standard input until quit or end of input"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("roomledger.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
