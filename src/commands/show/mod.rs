mod cli_tests;
mod execute;
mod output;

use clap::Args;

/// Show one customer with all of its addresses
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  customer_tracker show -s JSMITH                 # Customer row and its addresses
  customer_tracker show -s JSMITH --format toon   # Same, token-efficient")]
pub struct ShowCmd {
    /// Short name identifier of the customer
    #[arg(short, long)]
    pub short_name: String,
}
