use std::error::Error;

use clap::Args;
use rusqlite::Connection;

use crate::console::Console;

/// Interactive menu over the database
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  customer_tracker                      # Start the menu on ./Customers.db
  customer_tracker shell --db shop.db   # Start the menu on another file")]
pub struct ShellCmd {}

impl ShellCmd {
    /// Run the menu on stdin/stdout. Produces no formatted output.
    pub fn run_interactive(self, conn: &Connection) -> Result<String, Box<dyn Error>> {
        let mut console = Console::stdio();
        crate::shell::run(conn, &mut console)?;
        Ok(String::new())
    }
}
