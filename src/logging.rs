#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level used when `NAVAL_DUEL_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parse a level name such as `debug` or `off`, falling back to
/// [`DEFAULT_LEVEL`].
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Initialize logging to stderr with a level taken from the `NAVAL_DUEL_LOG`
/// environment variable. Calling it twice is harmless.
pub fn init_logging() {
    let level = parse_level(env::var("NAVAL_DUEL_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
