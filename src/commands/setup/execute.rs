use std::error::Error;

use rusqlite::Connection;
use serde::Serialize;

use super::SetupCmd;
use crate::commands::Execute;
use crate::db::schema::{self, TableStatus};

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub tables: Vec<TableStatus>,
    pub seeded: bool,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let tables = schema::bootstrap(conn)?;
        let seeded = if self.seed {
            schema::seed_if_empty(conn)?
        } else {
            false
        };
        Ok(SetupResult { tables, seeded })
    }
}
