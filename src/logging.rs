//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`. Operator-facing prompts and
//! results never pass through here.

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter directive for a given `-v` count, starting from the configured level.
pub fn filter_directive(base: &str, verbose: u8) -> String {
    match verbose {
        0 => base.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber.
///
/// `-v` flags win over `RUST_LOG`, which wins over the configured level.
pub fn init_tracing(base: &str, verbose: u8) -> Result<(), SetGlobalDefaultError> {
    let filter = if verbose > 0 {
        EnvFilter::new(filter_directive(base, verbose))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
