//! Output formatting for setup command results.

use super::execute::SetupResult;
use crate::db::schema::TableState;
use crate::output::Outputable;

impl Outputable for SetupResult {
    fn to_table(&self) -> String {
        let mut output = String::new();

        output.push_str("Database Setup\n\n");
        output.push_str("Schema creation:\n");

        for table in &self.tables {
            let status_text = match table.state {
                TableState::Created => "created",
                TableState::AlreadyExists => "exists",
            };
            output.push_str(&format!("  ✓ {} ({})\n", table.name, status_text));
        }

        if self.seeded {
            output.push_str("\nSample data inserted.\n");
        }

        if self.tables.iter().any(|t| t.state == TableState::Created) {
            output.push_str("\nDatabase ready.");
        } else {
            output.push_str("\nDatabase already configured.");
        }
        output
    }
}
