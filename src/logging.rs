// src/logging.rs
use log::LevelFilter;

use crate::config::Config;

/// Maps the number of `-v` flags to a log level.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` on stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init(config: &Config) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(config.verbosity));
    builder.parse_default_env();
    // A logger may already be installed when embedded in tests.
    let _ = builder.try_init();
}
