//! Command definitions and implementations.
//!
//! Each non-interactive command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs`: the [`Execute`] impl and its result type
//! - `output.rs`: the [`Outputable`] impl for that result

mod addresses;
mod customers;
mod setup;
mod shell;
mod show;
mod stats;

pub use addresses::AddressesCmd;
pub use customers::CustomersCmd;
pub use setup::SetupCmd;
pub use shell::ShellCmd;
pub use show::ShowCmd;
pub use stats::StatsCmd;

use clap::Subcommand;
use rusqlite::Connection;
use std::error::Error;

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>>;
}

/// Trait for running a command and producing its printable output.
pub trait CommandRunner {
    fn run(self, conn: &Connection, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

impl<T: Execute> CommandRunner for T {
    fn run(self, conn: &Connection, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(conn)?;
        Ok(result.format(format))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive menu (the default)
    Shell(ShellCmd),

    /// Create the tables, optionally inserting demonstration rows
    Setup(SetupCmd),

    /// List every customer
    Customers(CustomersCmd),

    /// List addresses, optionally only one customer's
    Addresses(AddressesCmd),

    /// Show one customer and its addresses
    Show(ShowCmd),

    /// Count stored customers and addresses
    Stats(StatsCmd),
}

impl Default for Command {
    fn default() -> Self {
        Command::Shell(ShellCmd {})
    }
}

impl Command {
    /// Whether startup should create tables and seed before running this command.
    ///
    /// `setup` does that work itself and reports on it.
    pub fn wants_bootstrap(&self) -> bool {
        !matches!(self, Command::Setup(_))
    }

    /// Execute the command and return formatted output
    pub fn run(self, conn: &Connection, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Shell(cmd) => cmd.run_interactive(conn),
            Command::Setup(cmd) => cmd.run(conn, format),
            Command::Customers(cmd) => cmd.run(conn, format),
            Command::Addresses(cmd) => cmd.run(conn, format),
            Command::Show(cmd) => cmd.run(conn, format),
            Command::Stats(cmd) => cmd.run(conn, format),
        }
    }
}
