mod execute;
mod output;

use clap::Args;

/// Create the tables without starting the menu
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  customer_tracker setup --db ./shop.db          # Create tables
  customer_tracker setup --db ./shop.db --seed   # Create tables and demonstration rows")]
pub struct SetupCmd {
    /// Insert demonstration rows if the Customers table is empty
    #[arg(long, default_value_t = false)]
    pub seed: bool,
}
