mod execute;
mod output;

use clap::Args;

/// Count stored customers and addresses
#[derive(Args, Debug)]
pub struct StatsCmd {}
