//! Interactive session command.
//!
//! This module implements the `session` command: a line-oriented front desk
//! that keeps one date's ledger in memory, accepts commands until `quit` or
//! end of input, and saves the active date on the way out.

use crate::error::CliError;
use crate::utils::{
    format_money, report_load, validate_guest_name, GlobalOptions, OpenLedger, SaveOutcome,
};
use clap::Args;
use roomledger::{LoadReport, RoomGraph, RoomNumber, RoomTypeSelector, DEFAULT_CHECK_IN_HOUR};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  reserve            book a room (prompts for details)
  undo               reverse the most recent booking
  rooms              show availability per room type
  occupied           list occupied rooms in order
  guest <name>       show a guest's rooms
  history            show guests in booking order
  show               list the active date's reservations
  total              show revenue and bookings
  reach <room>       rooms reachable from a room
  save               save the active date if it changed
  switch <date>      save, then load another date
  help               show this help
  quit               save and exit";

/// Run an interactive booking session.
#[derive(Args)]
pub struct SessionCommand {}

impl SessionCommand {
    /// Execute the session command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);

        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(ledger, stdin.lock(), stdout.lock(), global.clone()).run()
    }
}

/// What the loop does after a command.
enum Flow {
    Continue,
    Quit,
}

/// A running session over any line source and sink.
pub struct Session<R, W> {
    ledger: OpenLedger,
    input: R,
    output: W,
    global: GlobalOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an already opened ledger.
    pub fn new(ledger: OpenLedger, input: R, output: W, global: GlobalOptions) -> Self {
        Self {
            ledger,
            input,
            output,
            global,
        }
    }

    /// Run until `quit` or end of input, then save the active date.
    ///
    /// Command errors are reported and the loop continues; only failures to
    /// write to the output or to save on exit end the session with an error.
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(
            self.output,
            "{} front desk - {} (type 'help' for commands)",
            self.ledger.engine().catalog().hotel_name(),
            self.ledger.date()
        )?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (command, argument) = match line.split_once(char::is_whitespace) {
                Some((command, rest)) => (command, rest.trim()),
                None => (line, ""),
            };

            match self.dispatch(command, argument) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }

        self.save()?;
        writeln!(self.output, "Goodbye")?;
        Ok(())
    }

    fn dispatch(&mut self, command: &str, argument: &str) -> Result<Flow, CliError> {
        match command.to_ascii_lowercase().as_str() {
            "reserve" | "r" => self.reserve()?,
            "undo" | "u" => self.undo()?,
            "rooms" | "availability" => self.rooms()?,
            "occupied" => self.occupied()?,
            "guest" => self.guest(argument)?,
            "history" => self.history()?,
            "show" => self.show()?,
            "total" => self.total()?,
            "reach" => self.reach(argument)?,
            "save" => self.save()?,
            "switch" => self.switch(argument)?,
            "help" | "?" => writeln!(self.output, "{HELP}")?,
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            other => {
                return Err(CliError::InvalidArguments(format!(
                    "unknown command '{other}' (type 'help')"
                )))
            }
        }
        Ok(Flow::Continue)
    }

    /// Print `label` and read one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a number, falling back to `default` on an empty answer.
    fn prompt_number<T>(&mut self, label: &str, default: T) -> Result<T, CliError>
    where
        T: std::str::FromStr + std::fmt::Display,
    {
        let answer = self
            .prompt(&format!("{label} [{default}]: "))?
            .unwrap_or_default();
        if answer.is_empty() {
            return Ok(default);
        }
        answer
            .parse()
            .map_err(|_| CliError::InvalidArguments(format!("'{answer}' is not a valid {label}")))
    }

    fn reserve(&mut self) -> Result<(), CliError> {
        self.rooms()?;

        let room_type = self
            .prompt("Room type (option or name): ")?
            .unwrap_or_default();
        let selector: RoomTypeSelector = room_type
            .parse()
            .map_err(|_| CliError::InvalidArguments(format!("bad room type '{room_type}'")))?;
        let guest = self.prompt("Guest name: ")?.unwrap_or_default();
        let guest = validate_guest_name(&guest)?;
        let nights: u32 = self.prompt_number("nights", 1)?;
        let hour: u8 = self.prompt_number("check-in hour", DEFAULT_CHECK_IN_HOUR)?;

        let reservation = self.ledger.reserve(&selector, &guest, nights, hour)?;
        writeln!(
            self.output,
            "Reserved {} room {} for {}: {} night(s), total {}",
            reservation.room_type(),
            reservation.room_number(),
            reservation.guest_name(),
            reservation.nights(),
            format_money(reservation.total_cost())
        )?;
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CliError> {
        match self.ledger.undo()? {
            Some(action) => writeln!(
                self.output,
                "Undid booking of room {} for {}",
                action.room_number, action.guest_name
            )?,
            None => writeln!(self.output, "Nothing to undo")?,
        }
        Ok(())
    }

    fn rooms(&mut self) -> Result<(), CliError> {
        for e in self.ledger.engine().availability_report() {
            writeln!(
                self.output,
                "{}. {} ({}) - {} available - {} per night",
                e.option,
                e.room_type,
                e.rooms,
                e.available,
                format_money(e.price_per_night)
            )?;
        }
        Ok(())
    }

    fn occupied(&mut self) -> Result<(), CliError> {
        let rooms = self.ledger.engine().occupied_rooms_in_order();
        if rooms.is_empty() {
            writeln!(self.output, "No rooms are occupied")?;
        }
        for room in rooms {
            let guest = self.ledger.engine().occupant(room).unwrap_or("-");
            writeln!(self.output, "{room}\t{guest}")?;
        }
        Ok(())
    }

    fn guest(&mut self, name: &str) -> Result<(), CliError> {
        if name.is_empty() {
            return Err(CliError::InvalidArguments("usage: guest <name>".to_string()));
        }
        let rooms = self.ledger.engine().guest_rooms(name);
        if rooms.is_empty() {
            writeln!(self.output, "No rooms found for guest {name}")?;
        } else {
            let rendered: Vec<String> = rooms.iter().map(ToString::to_string).collect();
            writeln!(self.output, "{name}: {}", rendered.join(" "))?;
        }
        Ok(())
    }

    fn history(&mut self) -> Result<(), CliError> {
        let history = self.ledger.engine().guest_history();
        if history.is_empty() {
            writeln!(self.output, "No guest history")?;
        }
        for (position, guest) in history.iter().enumerate() {
            writeln!(self.output, "{}. {guest}", position + 1)?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), CliError> {
        let reservations = self.ledger.engine().reservations_on_date(&self.ledger.date());
        if reservations.is_empty() {
            writeln!(self.output, "No reservations found for {}", self.ledger.date())?;
        }
        for r in reservations {
            writeln!(
                self.output,
                "{}\t{}\t{}\t{} night(s)\t{}:00\t{}",
                r.guest_name(),
                r.room_number(),
                r.room_type(),
                r.nights(),
                r.check_in_hour(),
                format_money(r.total_cost())
            )?;
        }
        Ok(())
    }

    fn total(&mut self) -> Result<(), CliError> {
        writeln!(
            self.output,
            "Total revenue: {}",
            format_money(self.ledger.engine().total_revenue())
        )?;
        for r in self.ledger.engine().reservations() {
            writeln!(self.output, "{}\t{}", r.guest_name(), r.room_number())?;
        }
        Ok(())
    }

    fn reach(&mut self, argument: &str) -> Result<(), CliError> {
        let start: RoomNumber = argument
            .parse()
            .map_err(|_| CliError::InvalidArguments("usage: reach <room>".to_string()))?;
        let order = RoomGraph::from_catalog(self.ledger.engine().catalog()).reachable_from(start)?;
        let rendered: Vec<String> = order.iter().map(ToString::to_string).collect();
        writeln!(self.output, "{}", rendered.join(" "))?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), CliError> {
        match self.ledger.persist()? {
            SaveOutcome::Saved(report) => writeln!(
                self.output,
                "Saved {} reservation(s) for {}",
                report.reservations, report.date
            )?,
            SaveOutcome::Cleared => {
                writeln!(self.output, "Nothing to save for {}", self.ledger.date())?
            }
            SaveOutcome::Unchanged => {
                writeln!(self.output, "No changes to save for {}", self.ledger.date())?
            }
        }
        Ok(())
    }

    fn switch(&mut self, date: &str) -> Result<(), CliError> {
        if date.is_empty() {
            return Err(CliError::InvalidArguments("usage: switch <date>".to_string()));
        }
        self.save()?;
        let report = self.ledger.switch_to(date)?;
        self.describe_load(&report)?;
        Ok(())
    }

    fn describe_load(&mut self, report: &LoadReport) -> Result<(), CliError> {
        report_load(report, &self.global);
        if report.found {
            writeln!(
                self.output,
                "Loaded {} reservation(s) for {}",
                report.restored, report.date
            )?;
        } else {
            writeln!(self.output, "Starting a new ledger for {}", report.date)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomledger::{BookingEngine, HotelConfig, PersistenceCoordinator};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn ledger_in(temp: &TempDir, date: &str) -> OpenLedger {
        let mut ledger = OpenLedger::new(
            BookingEngine::from_config(&HotelConfig::default()).unwrap(),
            PersistenceCoordinator::in_dir(temp.path()),
            date,
        );
        ledger.switch_to(date).unwrap();
        ledger
    }

    fn run_script(ledger: OpenLedger, script: &str) -> (OpenLedger, String) {
        let quiet = GlobalOptions {
            quiet: true,
            ..GlobalOptions::default()
        };
        let mut output = Vec::new();
        let mut session = Session::new(ledger, Cursor::new(script.to_string()), &mut output, quiet);
        session.run().unwrap();
        let Session { ledger, .. } = session;
        (ledger, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reserve_with_defaults_and_save_on_eof() {
        let temp = TempDir::new().unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let (ledger, output) = run_script(ledger, "reserve\nDeluxe Suite\nAlice\n\n\n");

        assert!(output.contains("Reserved Deluxe Suite room 236 for Alice: 1 night(s), total $350.00"));
        assert!(output.contains("Saved 1 reservation(s) for 07-01-2025"));
        assert_eq!(ledger.engine().reservations()[0].check_in_hour(), 15);
        assert!(temp.path().join("07-01-2025.txt").exists());
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let temp = TempDir::new().unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let script = "bogus\nreserve\nPresidential\nBob\n2\n\nguest\nundo\nquit\n";
        let (ledger, output) = run_script(ledger, script);

        assert!(output.contains("Error: Invalid arguments: unknown command 'bogus'"));
        assert!(output.contains("Error:"));
        assert!(output.contains("Nothing to undo"));
        assert!(output.contains("Goodbye"));
        assert!(ledger.engine().reservations().is_empty());
    }

    #[test]
    fn test_undo_and_history() {
        let temp = TempDir::new().unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let script = "reserve\n1\nAlice\n2\n14\nreserve\n1\nBob\n\n\nhistory\nundo\nhistory\nquit\n";
        let (ledger, output) = run_script(ledger, script);

        assert!(output.contains("1. Alice\n2. Bob\n"));
        assert!(output.contains("Undid booking of room 237 for Bob"));
        assert_eq!(ledger.engine().guest_history(), ["Alice".to_string()]);
        assert_eq!(ledger.engine().reservations()[0].check_in_hour(), 14);
    }

    #[test]
    fn test_switch_saves_and_loads() {
        let temp = TempDir::new().unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let script = "reserve\n1\nAlice\n\n\nswitch 07-02-2025\noccupied\nswitch 07-01-2025\noccupied\nquit\n";
        let (ledger, output) = run_script(ledger, script);

        assert!(output.contains("Starting a new ledger for 07-02-2025"));
        assert!(output.contains("No rooms are occupied"));
        assert!(output.contains("Loaded 1 reservation(s) for 07-01-2025"));
        assert!(output.contains("236\tAlice"));
        assert_eq!(ledger.date(), "07-01-2025");
        assert!(!temp.path().join("07-02-2025.txt").exists());
    }

    #[test]
    fn test_bad_number_aborts_reservation() {
        let temp = TempDir::new().unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let (ledger, output) = run_script(ledger, "reserve\n1\nAlice\nmany\ntotal\n");

        assert!(output.contains("'many' is not a valid nights"));
        assert!(output.contains("Total revenue: $0.00"));
        assert!(ledger.engine().reservations().is_empty());
    }

    const FOREIGN_RECORDS: &str =
        "TOTAL_REVENUE=350\nAlice,236,Deluxe Suite,07-02-2025,1,15,350,350\nBob,999\n";

    #[test]
    fn test_quit_leaves_unrestorable_records_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("07-01-2025.txt");
        std::fs::write(&path, FOREIGN_RECORDS).unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let (_, output) = run_script(ledger, "occupied\nquit\n");

        assert!(output.contains("No changes to save for 07-01-2025"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), FOREIGN_RECORDS);
    }

    #[test]
    fn test_switch_away_leaves_unrestorable_records_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("07-01-2025.txt");
        std::fs::write(&path, FOREIGN_RECORDS).unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let (_, output) = run_script(ledger, "switch 07-03-2025\n");

        assert!(output.contains("Starting a new ledger for 07-03-2025"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), FOREIGN_RECORDS);
        assert!(!temp.path().join("07-03-2025.txt").exists());
    }

    #[test]
    fn test_undoing_the_last_booking_removes_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("07-01-2025.txt");
        let ledger = ledger_in(&temp, "07-01-2025");

        let (ledger, output) = run_script(ledger, "reserve\n1\nAlice\n\n\nsave\nundo\nquit\n");

        assert!(output.contains("Saved 1 reservation(s) for 07-01-2025"));
        assert!(output.contains("Nothing to save for 07-01-2025"));
        assert!(ledger.engine().reservations().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_reach_from_room() {
        let temp = TempDir::new().unwrap();
        let ledger = ledger_in(&temp, "07-01-2025");

        let (_, output) = run_script(ledger, "reach 240\nreach abc\n");

        assert!(output.contains("240 239 241 238 242"));
        assert!(output.contains("usage: reach <room>"));
    }
}
