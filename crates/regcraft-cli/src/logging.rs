//! Log output for the CLI.
//!
//! Logs go to stderr so stdout stays machine-readable. `RUST_LOG` selects the
//! filter; without it only errors are shown. `-v` forces `debug`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "error";

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
