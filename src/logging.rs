// src/logging.rs
use log::LevelFilter;

/// Maps the `-v` count onto a log level; warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. `RUST_LOG` takes precedence over `-v`.
///
/// A logger that is already installed (e.g. by a test harness) is left in place.
pub fn init(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();
}
