//! File logging. The terminal belongs to the UI, so log lines go to
//! ~/.critter/critter.log instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CRITTER_LOG=critter=debug`.
pub const LOG_ENV_VAR: &str = "CRITTER_LOG";
const DEFAULT_FILTER: &str = "critter=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber appending to `path`.
///
/// Returns false when the file cannot be opened or a subscriber is already
/// installed; the game runs on without logging in that case.
pub fn init(path: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
