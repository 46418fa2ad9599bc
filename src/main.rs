use std::path::Path;

use clap::Parser;
use rusqlite::Connection;
use tracing::{error, info};

use customer_tracker::cli::Args;
use customer_tracker::config::ConfigFile;
use customer_tracker::db::{self, schema};
use customer_tracker::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ConfigFile::load_from(&args.config)?.with_overrides(args.db, args.no_seed);
    logging::init_tracing(&config.log_level, args.verbose)?;

    let command = args.command.unwrap_or_default();
    let conn = db::open_db(&config.database.path)?;
    eprintln!("Database opened successfully.");

    if command.wants_bootstrap() {
        prepare(&conn, &config.database.path, config.seed_sample_data)?;
    }

    let result = command.run(&conn, args.format);

    match db::close_db(conn) {
        Ok(()) => eprintln!("Closed Database Successfully."),
        Err(e) => {
            error!(error = %e, "close failed");
            eprintln!("Error closing DB: {}", e);
        }
    }

    let output = result?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Create missing tables and, when enabled, seed an empty database.
fn prepare(conn: &Connection, path: &Path, seed: bool) -> Result<(), db::DbError> {
    let created = schema::bootstrap(conn)?;
    info!(path = %path.display(), tables = ?created, "schema ready");
    if seed && schema::seed_if_empty(conn)? {
        eprintln!("Customer table is empty. Adding sample data...");
    }
    Ok(())
}
