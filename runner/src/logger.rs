use std::env;

use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level
pub const LOG_ENV: &str = "SCHED_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parses a level name or `off`, `info` when unset or unknown
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn init() -> Result<(), SetLoggerError> {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());

    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
