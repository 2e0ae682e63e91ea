//! Logging to stderr for the command-line tool.

use anyhow::Result;
use log::LevelFilter;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// `base` raised by one step per `-v`, saturating at trace.
pub fn effective_level(base: LevelFilter, verbose: u8) -> LevelFilter {
    let i = (base as usize).saturating_add(verbose as usize);
    LEVELS[i.min(LEVELS.len() - 1)]
}

/// Log to stderr at `level`. `RUST_LOG` overrides when set.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init()?;
    Ok(())
}
